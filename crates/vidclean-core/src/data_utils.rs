//! DataFrame cell extraction and parsing helpers.

use polars::prelude::{AnyValue, DataFrame};

/// String view of a cell; nulls become the empty string.
pub fn any_to_string(value: AnyValue) -> String {
    match value {
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Null => String::new(),
        _ => value.to_string(),
    }
}

/// Cell rendering for the output file: nulls empty, booleans as 1/0.
pub fn any_to_string_for_output(value: AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(value) => value.to_string(),
        AnyValue::StringOwned(value) => value.to_string(),
        AnyValue::Int64(value) => value.to_string(),
        AnyValue::Int32(value) => value.to_string(),
        AnyValue::Boolean(value) => {
            if value {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
        value => value.to_string(),
    }
}

/// Integral view of a cell, parsing string cells.
pub fn any_to_i64(value: AnyValue) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int32(value) => Some(value as i64),
        AnyValue::Int64(value) => Some(value),
        AnyValue::Float64(value) => Some(value as i64),
        AnyValue::String(value) => parse_i64(value),
        AnyValue::StringOwned(value) => parse_i64(&value),
        _ => None,
    }
}

pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// One cell as a string, or empty if the column does not exist.
pub fn column_value_string(df: &DataFrame, name: &str, idx: usize) -> String {
    match df.column(name) {
        Ok(series) => any_to_string(series.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => String::new(),
    }
}

/// Every cell of a column as strings, or None if the column is absent.
pub fn string_column_values(df: &DataFrame, name: &str) -> Option<Vec<String>> {
    let series = df.column(name).ok()?;
    Some(
        (0..df.height())
            .map(|idx| any_to_string(series.get(idx).unwrap_or(AnyValue::Null)))
            .collect(),
    )
}

/// Every cell of a column as integers; non-integral cells become None.
pub fn int_column_values(df: &DataFrame, name: &str) -> Option<Vec<Option<i64>>> {
    let series = df.column(name).ok()?;
    Some(
        (0..df.height())
            .map(|idx| any_to_i64(series.get(idx).unwrap_or(AnyValue::Null)))
            .collect(),
    )
}
