//! Symbol stripping on free-text columns.
//!
//! Titles, tags, and categories arrive wrapped in list-literal leftovers
//! from the scrape: square brackets and apostrophes. Stripping them is
//! idempotent, so re-running the pipeline over already-clean data is safe.

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::warn;

use vidclean_model::{CleaningReport, SanitizeSummary, Schema, Stage};

use crate::data_utils::string_column_values;

const STRIPPED_CHARS: [char; 3] = ['[', ']', '\''];

/// Strip the scrape-artifact characters from one value.
pub fn sanitize_value(raw: &str) -> String {
    raw.chars().filter(|ch| !STRIPPED_CHARS.contains(ch)).collect()
}

/// Strip artifact symbols from every designated text column.
pub fn sanitize_text_columns(
    df: &mut DataFrame,
    schema: &Schema,
    report: &mut CleaningReport,
) -> Result<()> {
    for column in &schema.sanitize_columns {
        let Some(values) = string_column_values(df, column) else {
            warn!(column = %column, "text column missing, sanitize skipped");
            report.skip(Stage::TextSanitize, column);
            continue;
        };
        let mut changed = 0usize;
        let sanitized: Vec<String> = values
            .into_iter()
            .map(|value| {
                let stripped = sanitize_value(&value);
                if stripped != value {
                    changed += 1;
                }
                stripped
            })
            .collect();
        let series = Series::new(column.as_str().into(), sanitized);
        df.with_column(series)?;
        report.sanitized.push(SanitizeSummary {
            column: column.clone(),
            changed,
        });
    }
    Ok(())
}
