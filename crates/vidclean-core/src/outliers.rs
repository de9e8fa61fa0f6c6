//! Range-based outlier rectification.
//!
//! Each configured column has an inclusive plausible range. Out-of-range
//! cells are overwritten with the column's median, computed over the
//! column's current values with nothing excluded. This is lossy,
//! irreversible imputation and is exactly what downstream consumers
//! expect; rows are never dropped.

use anyhow::Result;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::{debug, warn};

use vidclean_model::{CleaningReport, OutlierSummary, Schema, Stage};

use crate::data_utils::int_column_values;

/// Median of the values as an integer. For an even count the two middle
/// values are averaged and rounded to the nearest integer so the column
/// stays integral.
fn median_of(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(((sorted[mid - 1] + sorted[mid]) as f64 / 2.0).round() as i64)
    }
}

/// Clip out-of-range values in every configured column to the column median.
pub fn rectify_outliers(
    df: &mut DataFrame,
    schema: &Schema,
    report: &mut CleaningReport,
) -> Result<()> {
    for (column, range) in &schema.value_ranges {
        let Some(cells) = int_column_values(df, column) else {
            warn!(column = %column, "configured column missing, rectification skipped");
            report.skip(Stage::OutlierRectification, column);
            continue;
        };
        let values: Vec<i64> = cells
            .into_iter()
            .map(|cell| cell.unwrap_or(0))
            .collect();

        let below = values.iter().filter(|v| **v < range.min).count();
        let above = values.iter().filter(|v| **v > range.max).count();

        let mut median = None;
        if below + above > 0 {
            median = median_of(&values);
            if let Some(median) = median {
                let rectified: Vec<i64> = values
                    .iter()
                    .map(|value| if range.contains(*value) { *value } else { median })
                    .collect();
                let series = Series::new(column.as_str().into(), rectified);
                df.with_column(series)?;
                debug!(
                    column = %column,
                    below,
                    above,
                    median,
                    "out-of-range values replaced with median"
                );
            }
        }

        report.outliers.push(OutlierSummary {
            column: column.clone(),
            below,
            above,
            median,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::AnyValue;
    use vidclean_ingest::CsvTable;

    use crate::coerce::coerce_numeric_columns;
    use crate::frame::frame_from_table;

    fn coerced_frame(column: &str, values: &[&str]) -> DataFrame {
        let table = CsvTable {
            headers: vec![column.to_string()],
            rows: values.iter().map(|v| vec![(*v).to_string()]).collect(),
        };
        let mut df = frame_from_table(&table).unwrap();
        let mut report = CleaningReport::default();
        coerce_numeric_columns(&mut df, &Schema::default(), &mut report).unwrap();
        df
    }

    fn int_at(df: &DataFrame, column: &str, idx: usize) -> i64 {
        match df.column(column).unwrap().get(idx).unwrap() {
            AnyValue::Int64(value) => value,
            other => panic!("expected Int64, got {other:?}"),
        }
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median_of(&[3, 1, 2]), Some(2));
        assert_eq!(median_of(&[1, 2, 3, 4]), Some(3)); // 2.5 rounds up
        assert_eq!(median_of(&[]), None);
    }

    #[test]
    fn out_of_range_value_becomes_current_median() {
        // play_count range is (1000, 100_000_000); 50 is below range.
        let mut df = coerced_frame("play_count", &["50", "2000", "3000", "4000", "5000"]);
        let schema = Schema::default();
        let mut report = CleaningReport::default();
        rectify_outliers(&mut df, &schema, &mut report).unwrap();

        // Median over current values [50, 2000, 3000, 4000, 5000] is 3000.
        assert_eq!(int_at(&df, "play_count", 0), 3000);
        assert_eq!(int_at(&df, "play_count", 1), 2000);

        let summary = report
            .outliers
            .iter()
            .find(|entry| entry.column == "play_count")
            .unwrap();
        assert_eq!(summary.below, 1);
        assert_eq!(summary.above, 0);
        assert_eq!(summary.median, Some(3000));
    }

    #[test]
    fn in_range_columns_are_untouched() {
        let mut df = coerced_frame("like_count", &["10", "20"]);
        let schema = Schema::default();
        let mut report = CleaningReport::default();
        rectify_outliers(&mut df, &schema, &mut report).unwrap();

        assert_eq!(int_at(&df, "like_count", 0), 10);
        let summary = report
            .outliers
            .iter()
            .find(|entry| entry.column == "like_count")
            .unwrap();
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.median, None);
    }

    #[test]
    fn above_range_is_also_clipped() {
        let mut df = coerced_frame("favorite_count", &["5000000", "10", "20"]);
        let schema = Schema::default();
        let mut report = CleaningReport::default();
        rectify_outliers(&mut df, &schema, &mut report).unwrap();

        // favorite_count max is 4_000_000; median of [5000000, 10, 20] is 20.
        assert_eq!(int_at(&df, "favorite_count", 0), 20);
        let summary = report
            .outliers
            .iter()
            .find(|entry| entry.column == "favorite_count")
            .unwrap();
        assert_eq!(summary.above, 1);
    }
}
