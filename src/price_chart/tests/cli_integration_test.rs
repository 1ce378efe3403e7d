use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::str;

use price_bars::{BucketOrigin, Error};
use price_chart::{build_charts, config::ChartConfig};
use tempfile::TempDir;

const PRICES_CSV: &str = "\
TS,PRICE,SOURCE
2023-01-01 00:00:00,100,feed-a
2023-01-01 06:00:00,104,feed-a
2023-01-01 12:00:00,98,feed-b
2023-01-01 18:00:00,101,feed-a
2023-01-02 00:00:00,107,feed-b
2023-01-02 06:00:00,103,feed-a
";

fn fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("prices.csv");
    fs::write(&path, PRICES_CSV).expect("write fixture");
    (dir, path)
}

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_price-chart"));
    cmd.env_remove("PRICE_CHART_CONFIG");
    cmd
}

#[test]
fn build_charts_from_file() {
    let (_dir, path) = fixture();
    let config = ChartConfig {
        source_path: path,
        interval: "12h".parse().unwrap(),
        ema_period: 3,
        origin: BucketOrigin::Epoch,
    };

    let charts = build_charts(&config).expect("charts");
    let bars = &charts.candlestick.bars;
    assert_eq!(bars.len(), 3);
    let ohlc = |i: usize| (bars[i].open, bars[i].high, bars[i].low, bars[i].close);
    assert_eq!(ohlc(0), (100.0, 104.0, 100.0, 104.0));
    assert_eq!(ohlc(1), (98.0, 101.0, 98.0, 101.0));
    assert_eq!(ohlc(2), (107.0, 107.0, 103.0, 103.0));

    let ema = &charts.line.series[1];
    assert_eq!(ema.label, "EMA-3");
    assert_eq!(ema.points.len(), 6);
    assert_eq!(ema.points[1].1, 102.0);
}

#[test]
fn build_charts_survives_blank_prices() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("gappy.csv");
    fs::write(
        &path,
        "TS,PRICE\n2023-01-01 00:00:00,100\n2023-01-01 06:00:00,\n2023-01-01 12:00:00,NaN\n2023-01-01 18:00:00,104\n",
    )
    .expect("write fixture");
    let config = ChartConfig {
        source_path: path,
        interval: "1d".parse().unwrap(),
        ema_period: 3,
        origin: BucketOrigin::Epoch,
    };

    let charts = build_charts(&config).expect("charts");
    let bar = charts.candlestick.bars[0];
    assert_eq!((bar.open, bar.high, bar.low, bar.close), (100.0, 104.0, 100.0, 104.0));
    assert_eq!(charts.line.series[0].points.len(), 2);

    let ema: Vec<f64> = charts.line.series[1].points.iter().map(|(_, v)| *v).collect();
    assert_eq!(&ema[..3], &[100.0, 100.0, 100.0]);
    assert!(ema[3] > 100.0 && ema[3] < 104.0);
}

#[test]
fn build_charts_missing_source_is_not_found() {
    let config = ChartConfig {
        source_path: PathBuf::from("data/prices2.csv"),
        ..ChartConfig::default()
    };
    assert!(matches!(build_charts(&config), Err(Error::NotFound { .. })));
}

#[test]
fn binary_prints_json_charts() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fixture();
    let output = bin()
        .args([
            "--source",
            path.to_str().unwrap(),
            "--interval",
            "1 day",
            "--ema-period",
            "14",
            "--format",
            "json",
        ])
        .output()?;

    if !output.status.success() {
        eprintln!("stderr: {}", str::from_utf8(&output.stderr)?);
    }
    assert!(output.status.success(), "Binary did not exit successfully");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["candlestick"]["title"], "Candlestick Chart");
    assert_eq!(value["candlestick"]["bars"].as_array().unwrap().len(), 2);
    assert_eq!(value["line"]["series"][1]["label"], "EMA-14");
    Ok(())
}

#[test]
fn binary_prints_table_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fixture();
    let output = bin().args(["--source", path.to_str().unwrap()]).output()?;
    assert!(output.status.success());

    let stdout = str::from_utf8(&output.stdout)?;
    assert!(stdout.contains("Candlestick Chart (10h)"));
    assert!(stdout.contains("Price Chart with EMA"));
    Ok(())
}

#[test]
fn binary_fails_on_missing_source() -> Result<(), Box<dyn std::error::Error>> {
    let output = bin().args(["--source", "no/such/prices.csv"]).output()?;
    assert!(!output.status.success());
    let stderr = str::from_utf8(&output.stderr)?;
    assert!(stderr.contains("no/such/prices.csv"), "stderr: {stderr}");
    Ok(())
}
