use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use feature_pipeline::{Column, config::PipelineConfig, enrich_with, export::write_csv};
use market_data_ingestor::{
    io::csv_source::read_csv_file,
    models::{
        bar_series::BarSeries,
        request_params::{BarsRequestParams, OutputSize},
    },
    providers::{DataProvider, alpha_vantage::AlphaVantageProvider},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Derive return, volatility, momentum and moving-average columns from daily
/// bars and write them as CSV to stdout.
#[derive(Parser)]
#[command(version, about)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "fetch"])))]
struct Cli {
    /// Ticker symbol of the series.
    #[arg(long)]
    symbol: String,

    /// Daily-adjusted CSV file to read.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Fetch bars from Alpha Vantage (needs ALPHAVANTAGE_API_KEY).
    #[arg(long)]
    fetch: bool,

    /// Request the full history instead of the latest ~100 days.
    #[arg(long, requires = "fetch")]
    full: bool,

    /// TOML file overriding pipeline windows.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Comma separated columns to emit (default: all).
    #[arg(long, value_delimiter = ',')]
    select: Vec<Column>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    let series = load_series(&cli).await?;
    info!(symbol = %series.symbol, rows = series.len(), "bars loaded");

    let enriched = enrich_with(&series, &config)
        .with_context(|| format!("enriching {}", series.symbol))?;

    let columns = if cli.select.is_empty() {
        Column::ALL.to_vec()
    } else {
        cli.select.clone()
    };
    write_csv(io::stdout().lock(), &enriched, &columns).context("writing CSV")?;
    Ok(())
}

async fn load_series(cli: &Cli) -> Result<BarSeries> {
    if let Some(path) = &cli.input {
        return read_csv_file(path, &cli.symbol)
            .map_err(market_data_ingestor::errors::Error::from)
            .with_context(|| format!("reading {}", path.display()));
    }

    let provider = AlphaVantageProvider::new()
        .map_err(market_data_ingestor::errors::Error::from)
        .context("setting up Alpha Vantage")?;
    let output_size = if cli.full {
        OutputSize::Full
    } else {
        OutputSize::Compact
    };
    provider
        .fetch_bars(&BarsRequestParams::new(cli.symbol.as_str(), output_size))
        .await
        .map_err(market_data_ingestor::errors::Error::from)
        .with_context(|| format!("fetching {}", cli.symbol))
}
