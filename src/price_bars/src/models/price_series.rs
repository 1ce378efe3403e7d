//! Time-indexed price table.
//!
//! A [`PriceSeries`] is what the loader produces: a time index (one UTC instant
//! per row) plus named columns of [`Cell`]s in their original header order.
//! The `PRICE` column feeds both the aggregator and the smoother; every other
//! column rides along untouched.
//!
//! The index is kept in row order. Callers that need chronological order can
//! ask for [`PriceSeries::sorted_by_index`].

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::errors::{Error, Result};
use crate::models::{cell::Cell, price_point::PricePoint};

/// Name of the timestamp column promoted to the index.
pub const TS_COLUMN: &str = "TS";
/// Name of the price column consumed by the aggregator and smoother.
pub const PRICE_COLUMN: &str = "PRICE";

/// A table of columns aligned to a time index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    index: Vec<DateTime<Utc>>,
    columns: IndexMap<String, Vec<Cell>>,
}

impl PriceSeries {
    /// Build a series, checking that every column matches the index length.
    pub fn new(index: Vec<DateTime<Utc>>, columns: IndexMap<String, Vec<Cell>>) -> Result<Self> {
        for (name, values) in &columns {
            if values.len() != index.len() {
                return Err(Error::Shape {
                    column: name.clone(),
                    expected: index.len(),
                    found: values.len(),
                });
            }
        }
        Ok(Self { index, columns })
    }

    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table holding just a `PRICE` column.
    pub fn from_prices<C, I>(index: Vec<DateTime<Utc>>, prices: I) -> Result<Self>
    where
        C: Into<Cell>,
        I: IntoIterator<Item = C>,
    {
        let mut columns = IndexMap::new();
        columns.insert(
            PRICE_COLUMN.to_string(),
            prices.into_iter().map(Into::into).collect(),
        );
        Self::new(index, columns)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in header order (index column excluded).
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Look up a column by name.
    ///
    /// Errors with [`Error::MissingField`] if the column does not exist.
    pub fn column(&self, name: &str) -> Result<&[Cell]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingField(name.to_string()))
    }

    /// The `PRICE` column.
    pub fn prices(&self) -> Result<&[Cell]> {
        self.column(PRICE_COLUMN)
    }

    /// Numeric `PRICE` observations in row order.
    ///
    /// Absent prices (empty or NaN) are skipped; a text price is a
    /// [`Error::TypeMismatch`].
    pub fn price_points(&self) -> Result<Vec<PricePoint>> {
        let prices = self.prices()?;
        let mut points = Vec::with_capacity(prices.len());
        for (position, (ts, cell)) in self.index.iter().zip(prices).enumerate() {
            if cell.is_absent() {
                continue;
            }
            match cell.as_f64() {
                Some(price) => points.push(PricePoint::new(*ts, price)),
                None => {
                    return Err(Error::TypeMismatch {
                        column: PRICE_COLUMN.to_string(),
                        position,
                        found: cell.type_name(),
                    });
                }
            }
        }
        Ok(points)
    }

    /// A copy of this series with rows stably sorted by timestamp.
    pub fn sorted_by_index(&self) -> Self {
        let mut order: Vec<usize> = (0..self.index.len()).collect();
        order.sort_by_key(|&i| self.index[i]);

        let index = order.iter().map(|&i| self.index[i]).collect();
        let columns = self
            .columns
            .iter()
            .map(|(name, values)| {
                let reordered = order.iter().map(|&i| values[i].clone()).collect();
                (name.clone(), reordered)
            })
            .collect();

        Self { index, columns }
    }
}
