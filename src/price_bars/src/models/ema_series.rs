use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::smoothing::EmaPeriod;

/// EMA values aligned one-to-one with the time index they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmaSeries {
    pub period: EmaPeriod,
    pub index: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

impl EmaSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Legend label, e.g. `EMA-14`.
    pub fn label(&self) -> String {
        format!("EMA-{}", self.period)
    }

    /// `(timestamp, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }
}
