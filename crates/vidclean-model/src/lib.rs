pub mod report;
pub mod schema;

pub use report::{
    CleaningReport, CoercionSummary, DuplicateSummary, MissingSummary, OutlierSummary,
    SanitizeSummary, SkippedColumn, Stage, TemporalSummary,
};
pub use schema::{ColumnRole, Schema, ValueRange};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_totals() {
        let mut report = CleaningReport::default();
        report.missing.push(MissingSummary {
            column: "description".to_string(),
            count: 3,
            resolved: true,
        });
        report.duplicates.push(DuplicateSummary {
            column: "video_link".to_string(),
            duplicate_rows: 2,
            samples: vec!["https://example.com/v/1".to_string()],
        });
        report.outliers.push(OutlierSummary {
            column: "play_count".to_string(),
            below: 1,
            above: 0,
            median: Some(4200),
        });

        assert_eq!(report.total_missing(), 3);
        assert_eq!(report.total_duplicates(), 2);
        assert_eq!(report.total_outliers(), 1);
        assert!(report.has_diagnostics());
    }

    #[test]
    fn schema_defaults_cover_configured_ranges() {
        let schema = Schema::default();
        for (column, _) in &schema.value_ranges {
            assert!(
                schema.numeric_columns.iter().any(|c| c == column),
                "range configured for non-numeric column {column}"
            );
        }
    }
}
