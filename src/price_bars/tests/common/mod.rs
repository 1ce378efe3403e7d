#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use price_bars::PriceSeries;
use tempfile::TempDir;

pub struct Fixture {
    _dir: TempDir,     // keep alive for the life of the test
    pub path: PathBuf, // <tmpdir>/prices.csv
}

/// Write `contents` to a fresh `prices.csv` inside a temp dir.
pub fn write_csv(contents: &str) -> Fixture {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("prices.csv");
    fs::write(&path, contents).expect("write fixture");
    Fixture { _dir: dir, path }
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// `prices.len()` points spaced `step` apart, starting at `start`.
pub fn spaced_series(start: DateTime<Utc>, step: Duration, prices: &[f64]) -> PriceSeries {
    let index = (0..prices.len() as i32).map(|i| start + step * i).collect();
    PriceSeries::from_prices(index, prices.iter().copied()).expect("aligned series")
}

/// Five daily points from 2023-01-01 priced 1..=5.
pub fn five_days() -> PriceSeries {
    spaced_series(
        utc(2023, 1, 1, 0, 0, 0),
        Duration::days(1),
        &[1.0, 2.0, 3.0, 4.0, 5.0],
    )
}
