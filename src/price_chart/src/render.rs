//! Chart data handed to a renderer.
//!
//! Nothing here draws. The candlestick chart and the price/EMA line chart are
//! plain serializable structs; the binary prints them as JSON or text tables.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use price_bars::{EmaSeries, IntervalSpec, OhlcBar, PriceSeries};
use serde::Serialize;

pub const CANDLESTICK_TITLE: &str = "Candlestick Chart";
pub const CANDLESTICK_STYLE: &str = "yahoo";
pub const LINE_TITLE: &str = "Price Chart with EMA";
pub const PRICE_LABEL: &str = "Price";
pub const EMA_COLOR: &str = "orange";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlestickChart {
    pub title: String,
    pub style: String,
    pub interval: IntervalSpec,
    pub bars: Vec<OhlcBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: String,
    pub color: Option<String>,
    pub points: Vec<(DateTime<Utc>, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeries>,
}

/// Both charts for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub candlestick: CandlestickChart,
    pub line: LineChart,
}

pub fn candlestick_chart(bars: Vec<OhlcBar>, interval: IntervalSpec) -> CandlestickChart {
    CandlestickChart {
        title: CANDLESTICK_TITLE.to_string(),
        style: CANDLESTICK_STYLE.to_string(),
        interval,
        bars,
    }
}

/// Raw prices and their EMA on shared axes.
pub fn price_ema_chart(series: &PriceSeries, ema: &EmaSeries) -> price_bars::Result<LineChart> {
    let prices = series
        .price_points()?
        .into_iter()
        .map(|p| (p.timestamp, p.price))
        .collect();

    Ok(LineChart {
        title: LINE_TITLE.to_string(),
        x_label: "Time".to_string(),
        y_label: PRICE_LABEL.to_string(),
        series: vec![
            LineSeries {
                label: PRICE_LABEL.to_string(),
                color: None,
                points: prices,
            },
            LineSeries {
                label: ema.label(),
                color: Some(EMA_COLOR.to_string()),
                points: ema.iter().collect(),
            },
        ],
    })
}

pub fn write_json<W: Write>(out: W, charts: &ChartSet) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, charts)
}

pub fn write_table<W: Write>(mut out: W, charts: &ChartSet) -> io::Result<()> {
    let candles = &charts.candlestick;
    writeln!(out, "{} ({})", candles.title, candles.interval)?;
    writeln!(
        out,
        "{:<25} {:<25} {:>12} {:>12} {:>12} {:>12}",
        "start", "end", "open", "high", "low", "close"
    )?;
    for bar in &candles.bars {
        writeln!(
            out,
            "{:<25} {:<25} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            bar.start.to_rfc3339(),
            bar.end(&candles.interval).to_rfc3339(),
            bar.open,
            bar.high,
            bar.low,
            bar.close
        )?;
    }
    writeln!(out)?;

    let line = &charts.line;
    writeln!(out, "{}", line.title)?;
    let [price, ema] = line.series.as_slice() else {
        return Ok(());
    };
    writeln!(
        out,
        "{:<25} {:>12} {:>12}",
        line.x_label, price.label, ema.label
    )?;
    // the price line skips rows with no observation; the EMA line has every row
    let mut prices = price.points.iter().peekable();
    for (ts, e) in &ema.points {
        match prices.next_if(|(at, _)| at == ts) {
            Some((_, p)) => writeln!(out, "{:<25} {:>12.4} {:>12.4}", ts.to_rfc3339(), p, e)?,
            None => writeln!(out, "{:<25} {:>12} {:>12.4}", ts.to_rfc3339(), "", e)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use price_bars::{Cell, aggregate, ema_series};

    use super::*;

    fn sample() -> (PriceSeries, ChartSet) {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let index = (0..5).map(|d| start + Duration::days(d)).collect();
        let series = PriceSeries::from_prices(index, [1i64, 2, 3, 4, 5]).unwrap();
        let interval: IntervalSpec = "2d".parse().unwrap();
        let bars = aggregate(&series, "2d").unwrap();
        let ema = ema_series(&series, 14).unwrap();
        let charts = ChartSet {
            candlestick: candlestick_chart(bars, interval),
            line: price_ema_chart(&series, &ema).unwrap(),
        };
        (series, charts)
    }

    #[test]
    fn line_chart_pairs_price_with_labelled_ema() {
        let (series, charts) = sample();
        let labels: Vec<_> = charts.line.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Price", "EMA-14"]);
        assert_eq!(charts.line.series[0].points.len(), series.len());
        assert_eq!(charts.line.series[1].points.len(), series.len());
        assert_eq!(charts.line.series[1].color.as_deref(), Some("orange"));
    }

    #[test]
    fn table_lists_every_bar_and_point() {
        let (_, charts) = sample();
        let mut buf = Vec::new();
        write_table(&mut buf, &charts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Candlestick Chart (2d)"));
        assert!(text.contains("EMA-14"));
        // start and end per bar, one row per price
        assert_eq!(text.matches("2023-01-0").count(), 3 * 2 + 5);
        assert!(text.contains("2023-01-07T00:00:00+00:00"));
    }

    #[test]
    fn table_leaves_blank_price_rows_empty() {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let index = (0..3).map(|d| start + Duration::days(d)).collect();
        let series =
            PriceSeries::from_prices(index, [Cell::Integer(1), Cell::Missing, Cell::Integer(3)])
                .unwrap();
        let ema = ema_series(&series, 3).unwrap();
        let line = price_ema_chart(&series, &ema).unwrap();
        assert_eq!(line.series[0].points.len(), 2);
        assert_eq!(line.series[1].points.len(), 3);

        let charts = ChartSet {
            candlestick: candlestick_chart(Vec::new(), "1d".parse().unwrap()),
            line,
        };
        let mut buf = Vec::new();
        write_table(&mut buf, &charts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let row = text
            .lines()
            .find(|l| l.starts_with("2023-01-02"))
            .expect("gap row");
        assert_eq!(row.split_whitespace().count(), 2);
        assert!(row.ends_with("1.0000"));
    }

    #[test]
    fn json_carries_both_charts() {
        let (_, charts) = sample();
        let mut buf = Vec::new();
        write_json(&mut buf, &charts).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["candlestick"]["interval"], "2d");
        assert_eq!(value["candlestick"]["bars"].as_array().unwrap().len(), 3);
        assert_eq!(value["line"]["series"][1]["label"], "EMA-14");
    }
}
