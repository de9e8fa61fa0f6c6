//! Numeric column coercion.
//!
//! Every declared metric column is rewritten as a non-negative integer
//! column. Parsing is deliberately permissive: anything unparsable (empty
//! cells, the `-` sentinel, stray text) becomes `0` without raising. That
//! policy is load-bearing for downstream consumers and must not be
//! tightened into an error.

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::warn;

use vidclean_model::{CleaningReport, CoercionSummary, Schema, Stage};

use crate::data_utils::{parse_f64, parse_i64, string_column_values};

/// Parse one raw cell. Decimal values are truncated toward zero, matching
/// an integer cast after a general numeric parse.
fn parse_cell(raw: &str) -> Option<i64> {
    parse_i64(raw).or_else(|| parse_f64(raw).map(|value| value as i64))
}

/// Coerce every declared numeric column present in the dataset to `i64`.
///
/// Absent columns are skipped with a diagnostic. Negative parses are
/// clamped to `0`: metric counts cannot go below zero.
pub fn coerce_numeric_columns(
    df: &mut DataFrame,
    schema: &Schema,
    report: &mut CleaningReport,
) -> Result<()> {
    for column in &schema.numeric_columns {
        let Some(values) = string_column_values(df, column) else {
            warn!(column = %column, "numeric column missing, coercion skipped");
            report.skip(Stage::TypeCoercion, column);
            continue;
        };

        let mut zeroed = 0usize;
        let coerced: Vec<i64> = values
            .iter()
            .map(|raw| match parse_cell(raw) {
                Some(value) if value >= 0 => value,
                _ => {
                    zeroed += 1;
                    0
                }
            })
            .collect();

        let series = Series::new(column.as_str().into(), coerced);
        df.with_column(series)?;
        report.coercions.push(CoercionSummary {
            column: column.clone(),
            zeroed,
        });
    }
    Ok(())
}
