//! Human-readable rendering of feed delays.

// Seconds per unit, most significant first.
const DAY_SECS: i64 = 86_400;
const HOUR_SECS: i64 = 3_600;
const MINUTE_SECS: i64 = 60;

/// Format how long a feed is overdue, e.g. "2h 10m".
///
/// `ms_to_be_updated` is expected to be negative. Delays of more than
/// `cap_days` whole days are rendered as `"> {cap_days}d"`.
pub fn format_delay(ms_to_be_updated: i64, cap_days: i64) -> String {
    let mut secs = ms_to_be_updated.saturating_neg().div_euclid(1000);

    let days = secs.div_euclid(DAY_SECS);
    secs -= days * DAY_SECS;
    let hours = secs.div_euclid(HOUR_SECS);
    secs -= hours * HOUR_SECS;
    let minutes = secs.div_euclid(MINUTE_SECS);

    if days > cap_days {
        format!("> {}d", cap_days)
    } else if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: i64 = 60_000;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    #[test]
    fn test_minutes_only() {
        assert_eq!(format_delay(-25 * MINUTE, 2), "25m");
        assert_eq!(format_delay(-30_000, 2), "0m");
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(format_delay(-130 * MINUTE, 2), "2h 10m");
        assert_eq!(format_delay(-HOUR, 2), "1h 0m");
    }

    #[test]
    fn test_days_hours_minutes() {
        assert_eq!(format_delay(-(DAY + 3 * HOUR + 4 * MINUTE), 2), "1d 3h 4m");
        assert_eq!(format_delay(-2 * DAY, 2), "2d 0h 0m");
    }

    #[test]
    fn test_capped() {
        assert_eq!(format_delay(-3 * DAY, 2), "> 2d");
        assert_eq!(format_delay(-8 * DAY, 7), "> 7d");
        assert_eq!(format_delay(i64::MIN, 2), "> 2d");
    }

    #[test]
    fn test_partial_seconds_are_floored() {
        assert_eq!(format_delay(-(MINUTE + 59_999), 2), "1m");
    }
}
