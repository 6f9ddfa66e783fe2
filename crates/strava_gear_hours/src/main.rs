use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use strava_client::{config::Config, http_client::ReqwestStravaClient};
use strava_gear_hours::format::{format_activity, format_total};
use strava_gear_hours::{DEFAULT_PAGE_SIZE, ReportQuery, build_report};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Total the moving time recorded on one piece of Strava gear.
///
/// Reads the access token from `STRAVA_ACCESS_TOKEN`.
#[derive(Parser, Debug)]
#[command(name = "strava-gear-hours")]
#[command(version)]
pub struct Args {
    /// Gear name, exactly as shown in Strava
    #[arg(long, visible_alias = "bike", default_value = "default")]
    pub gear: String,

    /// Only count activities on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub since: Option<NaiveDate>,

    /// Activities requested per API call
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..=200))]
    pub page_size: u32,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| format!("expected date in format YYYY-MM-DD: {e}"))
}

/// Build the log filter from a directive, falling back to `warn` when it does not parse.
fn log_filter(directive: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_new(directive)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
}

fn init_tracing() {
    // `STRAVA_GEAR_HOURS_LOG_LEVEL` wins over `RUST_LOG`; default keeps stderr quiet.
    let log_env = std::env::var("STRAVA_GEAR_HOURS_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let env_filter = log_filter(&log_env);
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("log filter: {}", log_env);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let cfg = Config::from_env().context("error reading configuration")?;
    let client = ReqwestStravaClient::from_config(&cfg);

    let mut query = ReportQuery::new(&args.gear).page_size(args.page_size);
    if let Some(since) = args.since {
        query = query.since(since);
    }

    let report = build_report(&client, &query)
        .await
        .with_context(|| format!("error totalling moving time for {:?}", args.gear))?;

    println!("Activities:");
    for activity in &report.activities {
        println!("{}", format_activity(activity));
    }
    println!("{}", format_total(&report.gear, report.total_moving_time));

    Ok(())
}
