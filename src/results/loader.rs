use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::ResultRow;
use crate::config::InputConfig;
use crate::error::{ChartError, Result};

/// Header name of the label column.
pub const METHOD_COLUMN: &str = "method";

/// Header name of the elapsed-milliseconds column.
pub const MS_COLUMN: &str = "ms";

/// Load result rows from a comma-separated file.
///
/// # Errors
/// Returns `FileRead` if the file cannot be opened, `MissingColumn` if the
/// header lacks `method` or `ms`, and `Parse` if an `ms` value is not numeric.
pub fn load_results(source_path: &Path) -> Result<Vec<ResultRow>> {
    load_results_with(source_path, &InputConfig::default())
}

/// Load result rows using the delimiter from `input`.
///
/// # Errors
/// Same as [`load_results`].
pub fn load_results_with(source_path: &Path, input: &InputConfig) -> Result<Vec<ResultRow>> {
    let file = File::open(source_path).map_err(|source| ChartError::FileRead {
        path: source_path.to_path_buf(),
        source,
    })?;
    read_results(BufReader::new(file), input.delimiter_byte())
}

/// Read result rows from any reader, preserving source order.
///
/// Columns are located by header name; their position and any extra
/// columns are irrelevant. Row numbers in errors count data rows from 1.
///
/// # Errors
/// Returns `MissingColumn`, `Parse`, or `Csv` for malformed records.
pub fn read_results<R: Read>(reader: R, delimiter: u8) -> Result<Vec<ResultRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_error)?.clone();
    let method_idx = column_index(&headers, METHOD_COLUMN)?;
    let ms_idx = column_index(&headers, MS_COLUMN)?;

    let mut rows = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let row = i + 1;
        let method = record.get(method_idx).unwrap_or_default();
        let raw_ms = record.get(ms_idx).unwrap_or_default();
        let ms = raw_ms.parse::<f64>().map_err(|_| ChartError::Parse {
            row,
            column: MS_COLUMN.to_string(),
            value: raw_ms.to_string(),
        })?;
        rows.push(ResultRow::new(method, ms));
    }

    Ok(rows)
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ChartError::MissingColumn {
            column: column.to_string(),
        })
}

fn csv_error(err: csv::Error) -> ChartError {
    if err.is_io_error() {
        ChartError::Io(std::io::Error::from(err))
    } else {
        ChartError::Csv(err)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
