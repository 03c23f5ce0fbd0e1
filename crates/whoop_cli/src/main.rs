//! Command-line tool for extracting sleep, heart rate and cycle data from
//! WHOOP.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use whoop_client::http_client::ReqwestWhoopClient;
use whoop_client::output::save_to_json;
use whoop_client::{
    Config, Credentials, DateRange, get_cycle_data, get_heart_rate_data, get_sleep_data,
};

#[derive(Parser)]
#[command(
    name = "whoop-data",
    about = "Extract sleep, heart rate and cycle data from WHOOP"
)]
struct Cli {
    /// WHOOP account username/email (falls back to WHOOP_USERNAME)
    #[arg(short, long)]
    username: Option<String>,
    /// WHOOP account password (falls back to WHOOP_PASSWORD)
    #[arg(short, long)]
    password: Option<String>,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    from_date: Option<NaiveDate>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    to_date: Option<NaiveDate>,
    /// Type of data to extract
    #[arg(short = 't', long, value_enum, default_value_t = DataType::All)]
    data_type: DataType,
    /// Time step for heart rate data in seconds
    #[arg(long, default_value_t = 600)]
    step: u32,
    /// Output file path (honored for a single data type; `all` writes one
    /// file per type under ./output)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DataType {
    #[value(name = "heart_rate")]
    HeartRate,
    Sleep,
    Cycles,
    All,
}

impl DataType {
    fn includes(self, other: DataType) -> bool {
        self == other || self == DataType::All
    }
}

fn resolve_range(
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
) -> anyhow::Result<DateRange> {
    match (from_date, to_date) {
        (Some(start), Some(end)) => Ok(DateRange::new(start, end)?),
        (None, None) => Ok(DateRange::last_week()),
        _ => anyhow::bail!("--from-date and --to-date must be provided together"),
    }
}

fn output_path(
    explicit: Option<&Path>,
    data_type: DataType,
    kind: &str,
    timestamp: &str,
) -> anyhow::Result<PathBuf> {
    if data_type != DataType::All {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
    }
    std::fs::create_dir_all("output").context("creating output directory")?;
    Ok(PathBuf::from(format!("output/{kind}_{timestamp}.json")))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    // Configure logging from `WHOOP_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WHOOP_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();
    let range = resolve_range(cli.from_date, cli.to_date)?;
    let credentials = Credentials::resolve(cli.username, cli.password)?;

    let client = ReqwestWhoopClient::login(Config::new(credentials)).await?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();

    if cli.data_type.includes(DataType::Sleep) {
        let records = get_sleep_data(&client, &range).await?;
        tracing::info!("retrieved {} sleep records", records.len());
        if !records.is_empty() {
            let path = output_path(cli.output.as_deref(), cli.data_type, "sleep_data", &timestamp)?;
            save_to_json(&records, &path)?;
            tracing::info!("sleep data saved to {}", path.display());
        }
    }

    if cli.data_type.includes(DataType::HeartRate) {
        let samples = get_heart_rate_data(&client, &range, cli.step).await?;
        tracing::info!("retrieved {} heart rate samples", samples.len());
        if !samples.is_empty() {
            let path = output_path(
                cli.output.as_deref(),
                cli.data_type,
                "heart_rate_data",
                &timestamp,
            )?;
            save_to_json(&samples, &path)?;
            tracing::info!("heart rate data saved to {}", path.display());
        }
    }

    if cli.data_type.includes(DataType::Cycles) {
        let cycles = get_cycle_data(&client, &range).await?;
        tracing::info!("retrieved {} cycle records", cycles.len());
        if !cycles.is_empty() {
            let path = output_path(cli.output.as_deref(), cli.data_type, "cycle_data", &timestamp)?;
            save_to_json(&cycles, &path)?;
            tracing::info!("cycle data saved to {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_requires_both_bounds_or_neither() {
        assert!(resolve_range(Some(date(2025, 10, 1)), None).is_err());
        assert!(resolve_range(None, Some(date(2025, 10, 1))).is_err());
        assert!(resolve_range(Some(date(2025, 10, 1)), Some(date(2025, 10, 7))).is_ok());
        assert!(resolve_range(None, None).is_ok());
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(resolve_range(Some(date(2025, 10, 7)), Some(date(2025, 10, 1))).is_err());
    }

    #[test]
    fn data_type_flag_accepts_documented_values() {
        let cli = Cli::try_parse_from(["whoop-data", "--data-type", "heart_rate"]).unwrap();
        assert_eq!(cli.data_type, DataType::HeartRate);
        let cli = Cli::try_parse_from(["whoop-data", "-t", "sleep"]).unwrap();
        assert_eq!(cli.data_type, DataType::Sleep);
        let cli = Cli::try_parse_from(["whoop-data"]).unwrap();
        assert_eq!(cli.data_type, DataType::All);
        assert_eq!(cli.step, 600);
    }

    #[test]
    fn all_includes_every_type() {
        assert!(DataType::All.includes(DataType::Sleep));
        assert!(DataType::All.includes(DataType::HeartRate));
        assert!(DataType::All.includes(DataType::Cycles));
        assert!(!DataType::Sleep.includes(DataType::Cycles));
    }
}
