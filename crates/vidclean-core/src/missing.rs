//! Missing-value detection and resolution.
//!
//! Missing means a null/empty cell or the scraper's `-` sentinel. Counts
//! are reported for every column; only the free-text columns are rewritten,
//! with the empty string as the canonical missing value. Numeric columns
//! were already filled by coercion and are left untouched.

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::warn;

use vidclean_model::schema::MISSING_SENTINEL;
use vidclean_model::{CleaningReport, MissingSummary, Schema, Stage};

use crate::data_utils::{any_to_string, string_column_values};

fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == MISSING_SENTINEL
}

/// Count missing entries (nulls plus the `-` sentinel) in one column.
pub fn check_missing(df: &DataFrame, column: &str) -> usize {
    let Ok(series) = df.column(column) else {
        return 0;
    };
    (0..df.height())
        .filter(|idx| {
            let value = any_to_string(series.get(*idx).unwrap_or(polars::prelude::AnyValue::Null));
            is_missing(&value)
        })
        .count()
}

/// Report missing counts per column and resolve text-field markers to `""`.
pub fn resolve_missing(
    df: &mut DataFrame,
    schema: &Schema,
    report: &mut CleaningReport,
) -> Result<()> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    for column in &columns {
        let count = check_missing(df, column);
        if count > 0 {
            report.missing.push(MissingSummary {
                column: column.clone(),
                count,
                resolved: schema.text_columns.iter().any(|c| c == column),
            });
        }
    }

    for column in &schema.text_columns {
        let Some(values) = string_column_values(df, column) else {
            warn!(column = %column, "text column missing, resolution skipped");
            report.skip(Stage::MissingValues, column);
            continue;
        };
        let resolved: Vec<String> = values
            .into_iter()
            .map(|value| if is_missing(&value) { String::new() } else { value })
            .collect();
        let series = Series::new(column.as_str().into(), resolved);
        df.with_column(series)?;
    }
    Ok(())
}
