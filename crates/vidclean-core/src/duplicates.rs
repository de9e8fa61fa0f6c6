//! Duplicate detection over identity columns.
//!
//! A row is a duplicate when its identity value (link, title) appears more
//! than once; every member of such a group counts, so two rows sharing a
//! link report two duplicates. Marking is advisory: the flag columns are
//! appended, no row is ever removed. Empty values never form groups.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::warn;

use vidclean_model::{CleaningReport, DuplicateSummary, Schema, Stage};

use crate::data_utils::string_column_values;

/// How many repeated values the audit keeps as examples.
const MAX_SAMPLES: usize = 5;

/// Read-only audit result for one identity column.
#[derive(Debug, Clone)]
pub struct ColumnAudit {
    pub column: String,
    /// Rows belonging to a group of size > 1.
    pub duplicate_rows: usize,
    /// Up to [`MAX_SAMPLES`] distinct repeated values, in row order.
    pub samples: Vec<String>,
    /// Per-row duplicate membership, aligned with the dataset rows.
    pub flags: Vec<bool>,
}

fn audit_column(df: &DataFrame, column: &str) -> Option<ColumnAudit> {
    let values = string_column_values(df, column)?;
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in &values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        *counts.entry(trimmed).or_insert(0) += 1;
    }

    let mut flags = Vec::with_capacity(values.len());
    let mut samples = Vec::new();
    let mut sampled: BTreeSet<&str> = BTreeSet::new();
    let mut duplicate_rows = 0usize;
    for value in &values {
        let trimmed = value.trim();
        let duplicated = !trimmed.is_empty()
            && counts.get(trimmed).copied().unwrap_or(0) > 1;
        if duplicated {
            duplicate_rows += 1;
            if samples.len() < MAX_SAMPLES && sampled.insert(trimmed) {
                samples.push(trimmed.to_string());
            }
        }
        flags.push(duplicated);
    }

    Some(ColumnAudit {
        column: column.to_string(),
        duplicate_rows,
        samples,
        flags,
    })
}

/// Audit the identity columns without touching the dataset.
pub fn audit_duplicates(df: &DataFrame, schema: &Schema) -> Vec<ColumnAudit> {
    schema
        .identity_columns
        .iter()
        .filter_map(|column| audit_column(df, column))
        .collect()
}

/// Audit and append one boolean flag column per identity column.
pub fn flag_duplicates(
    df: &mut DataFrame,
    schema: &Schema,
    report: &mut CleaningReport,
) -> Result<()> {
    for column in &schema.identity_columns {
        let Some(audit) = audit_column(df, column) else {
            warn!(column = %column, "identity column missing, duplicate audit skipped");
            report.skip(Stage::DuplicateAudit, column);
            continue;
        };
        let flag_column = Schema::flag_column(column);
        let series = Series::new(flag_column.as_str().into(), audit.flags.clone());
        df.with_column(series)?;
        report.duplicates.push(DuplicateSummary {
            column: audit.column,
            duplicate_rows: audit.duplicate_rows,
            samples: audit.samples,
        });
    }
    Ok(())
}
