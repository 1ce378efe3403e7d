//! Interval tokens for fixed-width resampling buckets.
//!
//! An [`IntervalSpec`] pairs a non-zero amount with an [`IntervalUnit`]
//! (second, minute, hour, day). Every interval is a fixed number of seconds,
//! so bucket math never needs a calendar.
//!
//! Accepted grammar: `<amount>? <whitespace>* <unit>`, where the amount is a
//! decimal integer (default 1) and the unit is case-insensitive:
//!
//! | unit   | spellings                                 |
//! |--------|-------------------------------------------|
//! | second | `s`, `sec`, `secs`, `second`, `seconds`   |
//! | minute | `m`, `t`, `min`, `mins`, `minute`, `minutes` |
//! | hour   | `h`, `hr`, `hrs`, `hour`, `hours`         |
//! | day    | `d`, `day`, `days`                        |
//!
//! ```
//! use price_bars::models::{IntervalSpec, IntervalUnit};
//!
//! let iv: IntervalSpec = "10 hours".parse().unwrap();
//! assert_eq!(iv.amount().get(), 10);
//! assert_eq!(iv.unit(), IntervalUnit::Hour);
//! assert_eq!(iv.to_string(), "10h");
//! ```

use std::{fmt, num::NonZeroU32, str::FromStr};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Number of seconds in a minute.
pub const SECS_PER_MINUTE: i64 = 60;
/// Number of seconds in an hour.
pub const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
/// Number of seconds in a day.
pub const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Interval granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl IntervalUnit {
    pub const fn seconds(self) -> i64 {
        match self {
            IntervalUnit::Second => 1,
            IntervalUnit::Minute => SECS_PER_MINUTE,
            IntervalUnit::Hour => SECS_PER_HOUR,
            IntervalUnit::Day => SECS_PER_DAY,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            IntervalUnit::Second => "s",
            IntervalUnit::Minute => "min",
            IntervalUnit::Hour => "h",
            IntervalUnit::Day => "d",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        let unit = match token.to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => IntervalUnit::Second,
            "m" | "t" | "min" | "mins" | "minute" | "minutes" => IntervalUnit::Minute,
            "h" | "hr" | "hrs" | "hour" | "hours" => IntervalUnit::Hour,
            "d" | "day" | "days" => IntervalUnit::Day,
            _ => return None,
        };
        Some(unit)
    }
}

/// A bucket width = amount × unit (e.g. 10-Hour, 2-Day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IntervalSpec {
    amount: NonZeroU32,
    unit: IntervalUnit,
}

impl IntervalSpec {
    pub const fn new(amount: NonZeroU32, unit: IntervalUnit) -> Self {
        Self { amount, unit }
    }
    pub const fn amount(&self) -> NonZeroU32 {
        self.amount
    }
    pub const fn unit(&self) -> IntervalUnit {
        self.unit
    }

    /// Bucket width in whole seconds. Always strictly positive.
    pub const fn seconds(&self) -> i64 {
        self.amount.get() as i64 * self.unit.seconds()
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.seconds())
    }
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount.get(), self.unit.suffix())
    }
}

impl FromStr for IntervalSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.is_empty() {
            return Err(invalid(s, "empty interval"));
        }
        if token.starts_with(['-', '+']) {
            return Err(invalid(s, "amount must be a positive integer"));
        }

        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (digits, unit) = token.split_at(split);
        let unit = unit.trim_start();

        if unit.is_empty() {
            return Err(invalid(s, "missing unit"));
        }
        let unit = IntervalUnit::from_token(unit)
            .ok_or_else(|| invalid(s, &format!("unknown unit '{unit}'")))?;

        let amount = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u32>()
                .map_err(|e| invalid(s, &format!("bad amount: {e}")))?
        };
        let amount = NonZeroU32::new(amount).ok_or_else(|| invalid(s, "amount must be > 0"))?;

        Ok(IntervalSpec::new(amount, unit))
    }
}

fn invalid(token: &str, reason: &str) -> Error {
    Error::InvalidArgument(format!("invalid interval '{token}': {reason}"))
}

impl TryFrom<String> for IntervalSpec {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<IntervalSpec> for String {
    fn from(value: IntervalSpec) -> Self {
        value.to_string()
    }
}
