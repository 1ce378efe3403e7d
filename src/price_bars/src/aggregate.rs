//! Fixed-width OHLC resampling.
//!
//! - Buckets are half-open: `[start, start + width)`.
//! - Boundaries are a function of absolute time: `floor((ts - origin) / width)`,
//!   with Euclidean division so instants before the origin map correctly.
//! - Default origin is the Unix epoch (1970-01-01T00:00:00Z). [`BucketOrigin::StartDay`]
//!   anchors at midnight UTC of the earliest observation instead.
//! - Empty buckets are omitted; output is ascending by bucket start.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::models::{IntervalSpec, OhlcBar, PricePoint, PriceSeries};

/// Unix epoch start (1970-01-01T00:00:00Z).
pub const EPOCH_UNIX: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Where bucket boundaries are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketOrigin {
    /// Unix epoch; boundaries do not depend on the data.
    #[default]
    Epoch,
    /// Midnight UTC of the day holding the earliest observation.
    StartDay,
}

impl BucketOrigin {
    /// Resolve the anchor instant for a set of timestamps.
    pub fn anchor(self, index: &[DateTime<Utc>]) -> DateTime<Utc> {
        match self {
            BucketOrigin::Epoch => EPOCH_UNIX,
            BucketOrigin::StartDay => index
                .iter()
                .min()
                .map(|first| first.date_naive().and_time(NaiveTime::MIN).and_utc())
                .unwrap_or(EPOCH_UNIX),
        }
    }
}

/// Compute the bucket id of `ts` for buckets of `width_secs` anchored at `origin`.
///
/// `origin` must sit on a whole second.
pub fn bucket_id(ts: DateTime<Utc>, origin: DateTime<Utc>, width_secs: i64) -> i64 {
    // timestamp() floors, so sub-second instants stay in their bucket
    let secs = ts.timestamp() - origin.timestamp();
    secs.div_euclid(width_secs)
}

/// Inclusive start instant of a bucket id.
pub fn bucket_start(id: i64, origin: DateTime<Utc>, width_secs: i64) -> DateTime<Utc> {
    origin + Duration::seconds(id * width_secs)
}

/// Aggregate the `PRICE` column into OHLC bars, epoch-anchored.
///
/// Errors:
/// - [`Error::MissingField`](crate::Error::MissingField) when there is no `PRICE` column
///   (including a table with no columns at all)
/// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) when `interval` does not parse
/// - [`Error::TypeMismatch`](crate::Error::TypeMismatch) when a price is text
pub fn aggregate(series: &PriceSeries, interval: &str) -> Result<Vec<OhlcBar>> {
    // field lookup happens before the interval is looked at
    series.prices()?;
    let interval: IntervalSpec = interval.parse()?;
    aggregate_with(series, &interval, BucketOrigin::Epoch)
}

/// Aggregate with a pre-parsed interval and an explicit origin.
pub fn aggregate_with(
    series: &PriceSeries,
    interval: &IntervalSpec,
    origin: BucketOrigin,
) -> Result<Vec<OhlcBar>> {
    let points = series.price_points()?;
    let anchor = origin.anchor(series.index());
    Ok(aggregate_points(&points, interval.seconds(), anchor))
}

/// Reduce points into bars keyed by bucket start.
///
/// Points are taken in timestamp order whatever order they arrive in, so open
/// and close are the chronologically first and last prices. Equal timestamps
/// keep their input order.
pub fn aggregate_points(
    points: &[PricePoint],
    width_secs: i64,
    origin: DateTime<Utc>,
) -> Vec<OhlcBar> {
    let mut ordered = points.to_vec();
    ordered.sort_by_key(|p| p.timestamp);

    let mut buckets: BTreeMap<i64, OhlcBar> = BTreeMap::new();
    for point in &ordered {
        let id = bucket_id(point.timestamp, origin, width_secs);
        buckets
            .entry(id)
            .and_modify(|bar| bar.push(point.price))
            .or_insert_with(|| {
                OhlcBar::opened_at(bucket_start(id, origin, width_secs), point.price)
            });
    }

    buckets.into_values().collect()
}
