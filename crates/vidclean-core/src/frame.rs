//! DataFrame construction from ingested tables and back.
//!
//! The raw table arrives as all-string cells; stages retype columns as they
//! go (numeric coercion to `i64`, duplicate flags as booleans). Conversion
//! back to a [`CsvTable`] renders every cell through the output formatting
//! rules.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use vidclean_ingest::CsvTable;

use crate::data_utils::any_to_string_for_output;

/// Build an all-string DataFrame from an ingested table.
pub fn frame_from_table(table: &CsvTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, header) in table.headers.iter().enumerate() {
        let mut values: Vec<String> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            values.push(row.get(idx).cloned().unwrap_or_default());
        }
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    let data = DataFrame::new(columns).context("build dataframe from table")?;
    Ok(data)
}

/// Render a DataFrame back into a string table for output.
pub fn frame_to_table(df: &DataFrame) -> CsvTable {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Vec::with_capacity(headers.len());
        for series in df.get_columns() {
            let value = series
                .get(idx)
                .unwrap_or(polars::prelude::AnyValue::Null);
            row.push(any_to_string_for_output(value));
        }
        rows.push(row);
    }
    CsvTable { headers, rows }
}
