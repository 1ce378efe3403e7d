use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    /// Observation instant (UTC).
    pub timestamp: DateTime<Utc>,
    /// Observed price.
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}
