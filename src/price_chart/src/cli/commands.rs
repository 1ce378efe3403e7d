use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use price_bars::{BucketOrigin, IntervalSpec};

#[derive(Parser, Debug)]
#[command(author, version, about = "Candlestick bars and an EMA overlay from a price CSV")]
pub struct Cli {
    /// Path to a TOML config file (falls back to $PRICE_CHART_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// CSV source with TS and PRICE columns
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Candlestick bucket width (e.g. "10h", "2 days", "15min")
    #[arg(long)]
    pub interval: Option<IntervalSpec>,

    /// EMA smoothing period
    #[arg(long)]
    pub ema_period: Option<u32>,

    /// Bucket anchoring
    #[arg(long, value_enum)]
    pub origin: Option<OriginArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OriginArg {
    /// Unix epoch
    Epoch,
    /// Midnight of the first observation's day
    StartDay,
}

impl From<OriginArg> for BucketOrigin {
    fn from(value: OriginArg) -> Self {
        match value {
            OriginArg::Epoch => BucketOrigin::Epoch,
            OriginArg::StartDay => BucketOrigin::StartDay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text tables
    Table,
    /// Chart data as JSON
    Json,
}
