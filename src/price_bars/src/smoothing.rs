//! Exponential moving average.
//!
//! The recurrence is the non-adjusted form: with `α = 2 / (period + 1)`,
//!
//! ```text
//! out[0] = in[0]
//! out[i] = α·in[i] + (1 − α)·out[i − 1]
//! ```
//!
//! One pass, no lookahead, no renormalization by sample count.
//!
//! Absent values (empty cells, NaN) are gaps, not errors. Each gap position
//! repeats the previous average, and the average keeps decaying across the
//! gap: the next observation after `k` steps is blended as
//! `(w·prev + α·x) / (w + α)` with `w = (1 − α)^k`. Positions before the first
//! observation are NaN.

use std::{fmt, num::NonZeroU32};

use serde::Serialize;

use crate::errors::{Error, Result};
use crate::models::{Cell, EmaSeries, PRICE_COLUMN, PriceSeries};

/// A validated, strictly positive smoothing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmaPeriod(NonZeroU32);

impl EmaPeriod {
    /// Errors with [`Error::InvalidArgument`] for zero, negative, or oversized periods.
    pub fn new(period: i64) -> Result<Self> {
        u32::try_from(period)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("EMA period must be a positive integer, got {period}"))
            })
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Decay factor `2 / (period + 1)`.
    pub fn alpha(self) -> f64 {
        2.0 / (f64::from(self.0.get()) + 1.0)
    }
}

impl From<NonZeroU32> for EmaPeriod {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmaPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// EMA over an untyped series.
///
/// The period is checked first, then every element is checked to be numeric
/// or absent before any smoothing happens. An empty series yields an empty
/// result; the output always has one value per input element.
pub fn ema(values: &[Cell], period: i64) -> Result<Vec<f64>> {
    let period = EmaPeriod::new(period)?;
    let numbers = numeric_values("series", values)?;
    Ok(ema_f64(&numbers, period))
}

/// EMA over the `PRICE` column, paired with the series' time index.
pub fn ema_series(series: &PriceSeries, period: i64) -> Result<EmaSeries> {
    let period = EmaPeriod::new(period)?;
    let numbers = numeric_values(PRICE_COLUMN, series.prices()?)?;
    Ok(EmaSeries {
        period,
        index: series.index().to_vec(),
        values: ema_f64(&numbers, period),
    })
}

/// The bare recurrence over already-numeric input. NaN marks a gap.
pub fn ema_f64(values: &[f64], period: EmaPeriod) -> Vec<f64> {
    let alpha = period.alpha();
    let decay = 1.0 - alpha;
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    // steps since the last observation
    let mut steps: i32 = 0;

    for &x in values {
        match prev {
            None if x.is_nan() => {}
            None => prev = Some(x),
            Some(_) if x.is_nan() => steps = steps.saturating_add(1),
            Some(p) => {
                steps = steps.saturating_add(1);
                let next = if steps == 1 {
                    alpha * x + decay * p
                } else {
                    let w = decay.powi(steps);
                    (w * p + alpha * x) / (w + alpha)
                };
                prev = Some(next);
                steps = 0;
            }
        }
        out.push(prev.unwrap_or(f64::NAN));
    }
    out
}

fn numeric_values(column: &str, cells: &[Cell]) -> Result<Vec<f64>> {
    cells
        .iter()
        .enumerate()
        .map(|(position, cell)| {
            if cell.is_absent() {
                return Ok(f64::NAN);
            }
            cell.as_f64().ok_or_else(|| Error::TypeMismatch {
                column: column.to_string(),
                position,
                found: cell.type_name(),
            })
        })
        .collect()
}
