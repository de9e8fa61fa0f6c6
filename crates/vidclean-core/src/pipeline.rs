//! The cleaning pipeline with explicit stages.
//!
//! Stages run strictly in this order:
//! 1. **TypeCoercion**: numeric columns to non-negative integers
//! 2. **MissingValueResolver**: sentinel/null unification on text fields
//! 3. **TemporalSplitter**: timestamp into date, time, weekday
//! 4. **OutlierRectifier**: out-of-range values to the column median
//! 5. **DuplicateAuditor**: flag columns for repeated identity values
//! 6. **TextSanitizer**: symbol stripping on designated text columns
//!
//! Later stages assume earlier ones ran: rectification needs integral
//! columns, the temporal split expects coerced data. All stages mutate the
//! one shared frame; there is no retry or rollback.

use std::time::Instant;

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use vidclean_model::{CleaningReport, Schema};

use crate::coerce::coerce_numeric_columns;
use crate::duplicates::flag_duplicates;
use crate::missing::resolve_missing;
use crate::outliers::rectify_outliers;
use crate::sanitize::sanitize_text_columns;
use crate::temporal::split_timestamp;

/// Run every cleaning stage over the frame, in order.
///
/// Returns the accumulated diagnostics. Recoverable conditions (unparsable
/// cells, absent columns, out-of-range values, duplicates) are counted in
/// the report; only frame-level failures propagate as errors.
pub fn run_stages(df: &mut DataFrame, schema: &Schema) -> Result<CleaningReport> {
    let pipeline_start = Instant::now();
    let mut report = CleaningReport {
        rows: df.height(),
        ..CleaningReport::default()
    };

    // =========================================================================
    // Stage 1: TypeCoercion
    // =========================================================================
    info_span!("coerce").in_scope(|| -> Result<()> {
        let start = Instant::now();
        coerce_numeric_columns(df, schema, &mut report)?;
        debug!(
            columns = report.coercions.len(),
            zeroed = report.total_zeroed(),
            duration_ms = start.elapsed().as_millis(),
            "type coercion complete"
        );
        Ok(())
    })?;

    // =========================================================================
    // Stage 2: MissingValueResolver
    // =========================================================================
    info_span!("missing").in_scope(|| -> Result<()> {
        let start = Instant::now();
        resolve_missing(df, schema, &mut report)?;
        debug!(
            missing = report.total_missing(),
            duration_ms = start.elapsed().as_millis(),
            "missing values resolved"
        );
        Ok(())
    })?;

    // =========================================================================
    // Stage 3: TemporalSplitter
    // =========================================================================
    info_span!("temporal").in_scope(|| -> Result<()> {
        let start = Instant::now();
        split_timestamp(df, schema, &mut report)?;
        let (parsed, unparsable) = report
            .temporal
            .as_ref()
            .map(|summary| (summary.parsed, summary.unparsable))
            .unwrap_or((0, 0));
        debug!(
            parsed,
            unparsable,
            duration_ms = start.elapsed().as_millis(),
            "timestamp split complete"
        );
        Ok(())
    })?;

    // =========================================================================
    // Stage 4: OutlierRectifier
    // =========================================================================
    info_span!("outliers").in_scope(|| -> Result<()> {
        let start = Instant::now();
        rectify_outliers(df, schema, &mut report)?;
        debug!(
            outliers = report.total_outliers(),
            duration_ms = start.elapsed().as_millis(),
            "outlier rectification complete"
        );
        Ok(())
    })?;

    // =========================================================================
    // Stage 5: DuplicateAuditor
    // =========================================================================
    info_span!("duplicates").in_scope(|| -> Result<()> {
        let start = Instant::now();
        flag_duplicates(df, schema, &mut report)?;
        debug!(
            duplicates = report.total_duplicates(),
            duration_ms = start.elapsed().as_millis(),
            "duplicate audit complete"
        );
        Ok(())
    })?;

    // =========================================================================
    // Stage 6: TextSanitizer
    // =========================================================================
    info_span!("sanitize").in_scope(|| -> Result<()> {
        let start = Instant::now();
        sanitize_text_columns(df, schema, &mut report)?;
        let changed: usize = report.sanitized.iter().map(|entry| entry.changed).sum();
        debug!(
            changed,
            duration_ms = start.elapsed().as_millis(),
            "text sanitize complete"
        );
        Ok(())
    })?;

    info!(
        rows = report.rows,
        columns = df.width(),
        missing = report.total_missing(),
        zeroed = report.total_zeroed(),
        outliers = report.total_outliers(),
        duplicates = report.total_duplicates(),
        skipped_columns = report.skipped.len(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "cleaning complete"
    );
    Ok(report)
}
