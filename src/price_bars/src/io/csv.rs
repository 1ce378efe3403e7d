//! CSV loading into a [`PriceSeries`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use crate::errors::{Error, Result};
use crate::io::timestamp::parse_timestamp;
use crate::models::{Cell, PriceSeries, TS_COLUMN};

/// Reader settings for [`load_with`] and [`read_from`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Header name of the column promoted to the time index.
    pub index_column: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            index_column: TS_COLUMN.to_string(),
        }
    }
}

/// Load a CSV file with a `TS` column into a time-indexed [`PriceSeries`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
    load_with(path, &LoadOptions::default())
}

/// Load a CSV file with explicit [`LoadOptions`].
///
/// Errors:
/// - [`Error::NotFound`] if `path` does not exist (checked before anything is read)
/// - [`Error::Parse`] if the index column is absent or a timestamp is unparseable
/// - [`Error::Csv`] for malformed records
pub fn load_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<PriceSeries> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    read_from(file, options)
}

/// Read CSV from any byte source.
pub fn read_from<R: Read>(source: R, options: &LoadOptions) -> Result<PriceSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let ts_col = headers
        .iter()
        .position(|h| h == options.index_column)
        .ok_or_else(|| Error::Parse {
            column: options.index_column.clone(),
            message: "column not present in header".to_string(),
        })?;

    let mut columns: IndexMap<String, Vec<Cell>> = IndexMap::new();
    for (i, name) in headers.iter().enumerate() {
        if i != ts_col {
            columns.insert(unique_name(&columns, name), Vec::new());
        }
    }

    let mut index = Vec::new();
    for result in reader.records() {
        let record = result?;

        let raw_ts = record.get(ts_col).unwrap_or("");
        let ts = parse_timestamp(raw_ts).ok_or_else(|| Error::Parse {
            column: options.index_column.clone(),
            message: format!(
                "line {}: unrecognized timestamp {raw_ts:?}",
                record.position().map_or(0, |p| p.line())
            ),
        })?;
        index.push(ts);

        let fields = record
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != ts_col)
            .map(|(_, field)| field);
        for ((_, values), field) in columns.iter_mut().zip(fields) {
            values.push(Cell::parse(field));
        }
    }

    PriceSeries::new(index, columns)
}

/// Repeated header names get a `.1`, `.2`, ... suffix so no column is lost.
fn unique_name(existing: &IndexMap<String, Vec<Cell>>, name: &str) -> String {
    if !existing.contains_key(name) {
        return name.to_string();
    }
    (1..)
        .map(|n| format!("{name}.{n}"))
        .find(|candidate| !existing.contains_key(candidate))
        .unwrap_or_else(|| name.to_string())
}
