use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use feedwatch::{FeedSource, FileSource, LogNotifier, Monitor, MonitorConfig, Notifier};

#[derive(Parser, Debug)]
#[command(name = "feedwatch")]
#[command(about = "Watch data feeds for missed heartbeats and post status summaries")]
struct Args {
    /// Path to a TOML config file (FEEDWATCH_* environment variables override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read feeds from a JSON file instead of the GraphQL endpoint
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seconds between checks
    #[arg(short, long, default_value = "300", value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Run a single check and exit
    #[arg(long)]
    once: bool,

    /// Log summaries instead of posting them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = MonitorConfig::load(args.config.as_deref()).context("loading configuration")?;

    let source = build_source(&args, &config)?;
    let notifier = build_notifier(&args, &config)?;
    info!(source = source.description(), interval_secs = args.interval, "feedwatch starting");

    let mut monitor = Monitor::new(source, notifier, config);

    if args.once {
        monitor.run_cycle().await?;
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(err) = monitor.run_cycle().await {
                    error!(error = %err, "feed status cycle failed");
                }
            }
            _ = &mut shutdown => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

fn build_source(args: &Args, config: &MonitorConfig) -> Result<Box<dyn FeedSource>> {
    if let Some(ref path) = args.file {
        return Ok(Box::new(FileSource::new(path)));
    }

    #[cfg(feature = "http")]
    {
        use feedwatch_adapters::graphql::GraphQlFeedClient;

        let endpoint = config
            .graphql_endpoint
            .as_deref()
            .context("no feed source: pass --file or set FEEDWATCH_GRAPHQL_ENDPOINT")?;
        let client = GraphQlFeedClient::builder().endpoint(endpoint).build()?;
        Ok(Box::new(client))
    }

    #[cfg(not(feature = "http"))]
    {
        let _ = config;
        anyhow::bail!("built without the http feature: pass --file")
    }
}

fn build_notifier(args: &Args, config: &MonitorConfig) -> Result<Box<dyn Notifier>> {
    if args.dry_run {
        return Ok(Box::new(LogNotifier));
    }

    #[cfg(feature = "http")]
    {
        use feedwatch::SlackNotifier;
        use feedwatch_adapters::slack::SlackClient;

        let token = config
            .slack_token
            .as_deref()
            .context("no Slack token: pass --dry-run or set FEEDWATCH_SLACK_TOKEN")?;
        let client = SlackClient::builder().token(token).build()?;
        Ok(Box::new(SlackNotifier::from_config(client, config)))
    }

    #[cfg(not(feature = "http"))]
    {
        let _ = config;
        tracing::warn!("built without the http feature, summaries will only be logged");
        Ok(Box::new(LogNotifier))
    }
}
