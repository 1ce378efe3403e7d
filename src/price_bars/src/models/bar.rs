//! Aggregated open/high/low/close bar.
//!
//! Bars are produced by [`aggregate`](crate::aggregate::aggregate) and carry the
//! start of the half-open bucket they summarize.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::interval::IntervalSpec;

/// One OHLC bar for the bucket `[start, start + interval)`.
///
/// Always satisfies `low <= open, close <= high` when built from finite prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OhlcBar {
    /// Inclusive bucket start (UTC).
    pub start: DateTime<Utc>,

    /// First price observed in the bucket.
    pub open: f64,

    /// Highest price observed in the bucket.
    pub high: f64,

    /// Lowest price observed in the bucket.
    pub low: f64,

    /// Last price observed in the bucket.
    pub close: f64,
}

impl OhlcBar {
    /// A bar seeded from the first observation of a bucket.
    pub fn opened_at(start: DateTime<Utc>, price: f64) -> Self {
        Self {
            start,
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    /// Fold the next observation (in index order) into the bar.
    pub fn push(&mut self, price: f64) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
    }

    /// Exclusive end instant of the bucket.
    pub fn end(&self, interval: &IntervalSpec) -> DateTime<Utc> {
        self.start + interval.duration()
    }
}
