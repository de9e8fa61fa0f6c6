//! Timestamp decomposition.
//!
//! Splits the raw publish timestamp into a calendar date, a time-of-day
//! (written back into the timestamp column), and a weekday label. The
//! weekday comes from the parsed date value, never from re-parsing the
//! formatted string, so the two derived columns cannot disagree.

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::warn;

use vidclean_model::schema::{DATE_COLUMN, MISSING_SENTINEL, WEEKDAY_COLUMN};
use vidclean_model::{CleaningReport, Schema, Stage, TemporalSummary};

use crate::data_utils::string_column_values;
use crate::datetime::{parse_timestamp, weekday_label};

/// Split the timestamp column into date, time-of-day, and weekday.
///
/// Unparsable entries fail softly: all three derived cells become empty and
/// the failure is counted, not raised.
pub fn split_timestamp(
    df: &mut DataFrame,
    schema: &Schema,
    report: &mut CleaningReport,
) -> Result<()> {
    let column = schema.timestamp_column.as_str();
    let Some(values) = string_column_values(df, column) else {
        warn!(column = %column, "timestamp column missing, temporal split skipped");
        report.skip(Stage::TemporalSplit, column);
        return Ok(());
    };

    let mut summary = TemporalSummary::default();
    let mut dates = Vec::with_capacity(values.len());
    let mut times = Vec::with_capacity(values.len());
    let mut weekdays = Vec::with_capacity(values.len());

    for raw in &values {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == MISSING_SENTINEL {
            summary.missing += 1;
            dates.push(String::new());
            times.push(String::new());
            weekdays.push(String::new());
            continue;
        }
        match parse_timestamp(trimmed) {
            Some(parsed) => {
                summary.parsed += 1;
                dates.push(parsed.date().format("%Y-%m-%d").to_string());
                times.push(parsed.time().format("%H:%M:%S").to_string());
                weekdays.push(weekday_label(parsed.date()).to_string());
            }
            None => {
                summary.unparsable += 1;
                dates.push(String::new());
                times.push(String::new());
                weekdays.push(String::new());
            }
        }
    }

    df.with_column(Series::new(column.into(), times))?;
    df.with_column(Series::new(DATE_COLUMN.into(), dates))?;
    df.with_column(Series::new(WEEKDAY_COLUMN.into(), weekdays))?;
    report.temporal = Some(summary);
    Ok(())
}
