//! Command-line front end for `price_bars`: config, chart data, output.

pub mod cli;
pub mod config;
pub mod render;

use price_bars::{aggregate_with, ema_series, load};
use tracing::debug;

use crate::config::ChartConfig;
use crate::render::{ChartSet, candlestick_chart, price_ema_chart};

/// Load the configured source and build both charts.
///
/// Aggregation and smoothing run independently on the same loaded series.
pub fn build_charts(config: &ChartConfig) -> price_bars::Result<ChartSet> {
    let series = load(&config.source_path)?;
    debug!(rows = series.len(), "loaded price series");

    let bars = aggregate_with(&series, &config.interval, config.origin)?;
    debug!(bars = bars.len(), interval = %config.interval, "aggregated bars");

    let ema = ema_series(&series, i64::from(config.ema_period))?;

    Ok(ChartSet {
        candlestick: candlestick_chart(bars, config.interval),
        line: price_ema_chart(&series, &ema)?,
    })
}
