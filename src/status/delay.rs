//! Delay arithmetic: how long until a feed must update, and whether it is late.
//!
//! All values are signed milliseconds. A negative result means the feed is
//! overdue by that much; zero or positive means time is left.

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Heartbeat plus tolerance.
///
/// The tolerance is `floor(heartbeat / divisor)`; a missing or zero divisor
/// means no tolerance at all.
pub fn admissible_delay(heartbeat_ms: i64, divisor: Option<u64>) -> i64 {
    match divisor {
        Some(d) if d > 0 => {
            let d = i64::try_from(d).unwrap_or(i64::MAX);
            heartbeat_ms.saturating_add(heartbeat_ms.div_euclid(d))
        }
        _ => heartbeat_ms,
    }
}

/// Milliseconds left before the feed counts as outdated.
///
/// A feed that was never updated gets `-(now - days_absent days)`, a value
/// so negative it always reads as outdated and renders as capped.
pub fn ms_to_be_updated(
    heartbeat_ms: i64,
    divisor: Option<u64>,
    last_update_secs: Option<i64>,
    now_ms: i64,
    days_absent: i64,
) -> i64 {
    let Some(last_update_secs) = last_update_secs else {
        return -(now_ms.saturating_sub(days_absent.saturating_mul(MS_PER_DAY)));
    };

    let since_last_update = now_ms.saturating_sub(last_update_secs.saturating_mul(1000));
    admissible_delay(heartbeat_ms, divisor).saturating_sub(since_last_update)
}

/// A feed is outdated once its remaining time goes negative.
pub fn is_outdated(ms_to_be_updated: i64) -> bool {
    ms_to_be_updated < 0
}
