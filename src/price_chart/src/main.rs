use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use price_chart::{
    build_charts,
    cli::{Cli, OutputFormat, resolve_config},
    render::{write_json, write_table},
};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(
        source = %config.source_path.display(),
        interval = %config.interval,
        ema_period = config.ema_period,
        origin = ?config.origin,
        "building charts"
    );

    let charts = build_charts(&config)
        .with_context(|| format!("building charts from {}", config.source_path.display()))?;
    info!(bars = charts.candlestick.bars.len(), "charts ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Json => {
            write_json(&mut out, &charts)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&mut out, &charts)?,
    }
    out.flush()?;

    Ok(())
}
