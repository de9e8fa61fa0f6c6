//! Diagnostics collected while cleaning a dataset.
//!
//! Every recoverable condition (missing values, coerced cells, clipped
//! outliers, duplicate rows, unparsable timestamps) is counted here instead
//! of raised as an error. The report is printed as the run summary and can
//! be persisted as JSON.

use serde::{Deserialize, Serialize};

/// Pipeline stage names, used to attribute skip diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    TypeCoercion,
    MissingValues,
    TemporalSplit,
    OutlierRectification,
    DuplicateAudit,
    TextSanitize,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::TypeCoercion => "type coercion",
            Stage::MissingValues => "missing values",
            Stage::TemporalSplit => "temporal split",
            Stage::OutlierRectification => "outlier rectification",
            Stage::DuplicateAudit => "duplicate audit",
            Stage::TextSanitize => "text sanitize",
        }
    }
}

/// A declared column a stage expected but did not find.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedColumn {
    pub column: String,
    pub stage: Stage,
}

/// Cells that fell back to zero during numeric coercion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoercionSummary {
    pub column: String,
    /// Cells whose value could not be parsed and became `0`.
    pub zeroed: usize,
}

/// Missing entries (null or sentinel) detected in one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSummary {
    pub column: String,
    pub count: usize,
    /// Whether the stage rewrote the missing entries to the empty string.
    pub resolved: bool,
}

/// Outcome of splitting the raw timestamp column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemporalSummary {
    pub parsed: usize,
    /// Non-empty values no recognized format matched.
    pub unparsable: usize,
    /// Values that were already missing before the split.
    pub missing: usize,
}

/// Out-of-range values clipped to the column median.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub column: String,
    pub below: usize,
    pub above: usize,
    /// Median substituted for the out-of-range cells, when any existed.
    pub median: Option<i64>,
}

impl OutlierSummary {
    pub fn total(&self) -> usize {
        self.below + self.above
    }
}

/// Rows belonging to a duplicate group for one identity column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateSummary {
    pub column: String,
    /// Rows in groups of size > 1; every member of a group counts.
    pub duplicate_rows: usize,
    /// Up to five of the repeated values, for the summary output.
    pub samples: Vec<String>,
}

/// Values changed by symbol stripping in one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizeSummary {
    pub column: String,
    pub changed: usize,
}

/// Full diagnostics for one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Row count of the dataset the pipeline ran over.
    pub rows: usize,
    pub coercions: Vec<CoercionSummary>,
    pub missing: Vec<MissingSummary>,
    pub temporal: Option<TemporalSummary>,
    pub outliers: Vec<OutlierSummary>,
    pub duplicates: Vec<DuplicateSummary>,
    pub sanitized: Vec<SanitizeSummary>,
    pub skipped: Vec<SkippedColumn>,
}

impl CleaningReport {
    pub fn total_missing(&self) -> usize {
        self.missing.iter().map(|entry| entry.count).sum()
    }

    pub fn total_outliers(&self) -> usize {
        self.outliers.iter().map(OutlierSummary::total).sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.duplicates.iter().map(|entry| entry.duplicate_rows).sum()
    }

    pub fn total_zeroed(&self) -> usize {
        self.coercions.iter().map(|entry| entry.zeroed).sum()
    }

    /// True when any stage counted something worth surfacing.
    pub fn has_diagnostics(&self) -> bool {
        self.total_missing() > 0
            || self.total_outliers() > 0
            || self.total_duplicates() > 0
            || self.total_zeroed() > 0
            || !self.skipped.is_empty()
            || self
                .temporal
                .as_ref()
                .is_some_and(|summary| summary.unparsable > 0)
    }

    /// Record a column a stage had to skip.
    pub fn skip(&mut self, stage: Stage, column: &str) {
        self.skipped.push(SkippedColumn {
            column: column.to_string(),
            stage,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_has_no_diagnostics() {
        let report = CleaningReport::default();
        assert!(!report.has_diagnostics());
    }

    #[test]
    fn skip_records_stage_and_column() {
        let mut report = CleaningReport::default();
        report.skip(Stage::TypeCoercion, "play_count");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].column, "play_count");
        assert_eq!(report.skipped[0].stage, Stage::TypeCoercion);
        assert!(report.has_diagnostics());
    }

    #[test]
    fn unparsable_timestamps_are_diagnostics() {
        let mut report = CleaningReport::default();
        report.temporal = Some(TemporalSummary {
            parsed: 10,
            unparsable: 0,
            missing: 0,
        });
        assert!(!report.has_diagnostics());
        report.temporal = Some(TemporalSummary {
            parsed: 9,
            unparsable: 1,
            missing: 0,
        });
        assert!(report.has_diagnostics());
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = CleaningReport::default();
        report.rows = 2;
        report.outliers.push(OutlierSummary {
            column: "play_count".to_string(),
            below: 1,
            above: 0,
            median: Some(4200),
        });
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"play_count\""));
        assert!(json.contains("\"median\":4200"));
    }
}
