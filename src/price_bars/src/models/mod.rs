pub mod bar;
pub mod cell;
pub mod ema_series;
pub mod interval;
pub mod price_point;
pub mod price_series;

pub use bar::OhlcBar;
pub use cell::Cell;
pub use ema_series::EmaSeries;
pub use interval::{IntervalSpec, IntervalUnit};
pub use price_point::PricePoint;
pub use price_series::{PRICE_COLUMN, PriceSeries, TS_COLUMN};
