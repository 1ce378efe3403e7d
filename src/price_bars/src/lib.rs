//! Price series ingestion, OHLC resampling and EMA smoothing.
//!
//! Three independent, pure stages:
//! - [`load`]: read a CSV with a `TS` column into a time-indexed [`PriceSeries`]
//! - [`aggregate`]: resample the `PRICE` column into fixed-width [`OhlcBar`]s
//! - [`ema`]: exponential moving average of a numeric series
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use price_bars::{aggregate, ema_series, PriceSeries};
//!
//! let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
//! let index = (0..5).map(|d| start + Duration::days(d)).collect();
//! let series = PriceSeries::from_prices(index, [1i64, 2, 3, 4, 5]).unwrap();
//!
//! let bars = aggregate(&series, "2 days").unwrap();
//! assert_eq!(bars.len(), 3);
//!
//! let smoothed = ema_series(&series, 3).unwrap();
//! assert_eq!(smoothed.values, vec![1.0, 1.5, 2.25, 3.125, 4.0625]);
//! ```

pub mod aggregate;
pub mod errors;
pub mod io;
pub mod models;
pub mod smoothing;

pub use aggregate::{BucketOrigin, aggregate, aggregate_with};
pub use errors::{Error, Result};
pub use io::csv::{LoadOptions, load, load_with, read_from};
pub use models::{Cell, EmaSeries, IntervalSpec, OhlcBar, PricePoint, PriceSeries};
pub use smoothing::{EmaPeriod, ema, ema_series};
