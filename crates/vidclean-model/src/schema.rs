//! Dataset schema for scraped video metadata.
//!
//! The column vocabulary is fixed: engagement metrics are integral, free
//! text may carry the `-` sentinel for missing values, and `publish_time`
//! holds the raw scrape timestamp until the pipeline splits it.

use serde::{Deserialize, Serialize};

/// Timestamp column present in the raw dataset. Rewritten in place to the
/// time-of-day once the pipeline has split it.
pub const TIMESTAMP_COLUMN: &str = "publish_time";

/// Calendar date column derived from [`TIMESTAMP_COLUMN`].
pub const DATE_COLUMN: &str = "publish_date";

/// Weekday label column derived from the parsed publish date.
pub const WEEKDAY_COLUMN: &str = "weekday";

/// Literal placeholder the scraper emits for missing values.
pub const MISSING_SENTINEL: &str = "-";

/// Inclusive range of plausible values for a numeric metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Role a column plays in the dataset, used for the schema listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Metric,
    Text,
    Timestamp,
    Identifier,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Metric => "metric",
            ColumnRole::Text => "text",
            ColumnRole::Timestamp => "timestamp",
            ColumnRole::Identifier => "identifier",
        }
    }
}

/// The declared shape of the scraped dataset.
///
/// Stages look columns up here rather than hard-coding names, so a column
/// missing from a particular export degrades to a skip diagnostic instead
/// of an error.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Columns coerced to non-negative integers.
    pub numeric_columns: Vec<String>,
    /// Free-text columns whose missing markers resolve to the empty string.
    pub text_columns: Vec<String>,
    /// Subset of the text columns that get symbol stripping.
    pub sanitize_columns: Vec<String>,
    /// Record identifier columns (link, author).
    pub identifier_columns: Vec<String>,
    /// Columns whose repeated values mark duplicate records.
    pub identity_columns: Vec<String>,
    /// Raw timestamp column.
    pub timestamp_column: String,
    /// Inclusive valid ranges, keyed by numeric column name.
    pub value_ranges: Vec<(String, ValueRange)>,
}

impl Default for Schema {
    fn default() -> Self {
        let owned = |names: &[&str]| names.iter().map(|name| (*name).to_string()).collect();
        Self {
            numeric_columns: owned(&[
                "play_count",
                "like_count",
                "coin_count",
                "favorite_count",
                "share_count",
                "follower_count",
                "comment_count",
                "danmaku_count",
            ]),
            text_columns: owned(&["title", "description", "tags", "category"]),
            sanitize_columns: owned(&["title", "tags", "category"]),
            identifier_columns: owned(&["video_link", "author_name"]),
            identity_columns: owned(&["video_link", "title"]),
            timestamp_column: TIMESTAMP_COLUMN.to_string(),
            value_ranges: vec![
                ("play_count".to_string(), ValueRange::new(1_000, 100_000_000)),
                ("like_count".to_string(), ValueRange::new(0, 7_000_000)),
                ("coin_count".to_string(), ValueRange::new(0, 7_000_000)),
                ("favorite_count".to_string(), ValueRange::new(0, 4_000_000)),
                ("share_count".to_string(), ValueRange::new(0, 7_000_000)),
            ],
        }
    }
}

impl Schema {
    /// Name of the boolean flag column appended for an identity column.
    pub fn flag_column(identity_column: &str) -> String {
        format!("{identity_column}_duplicate")
    }

    /// Configured range for a numeric column, if any.
    pub fn range_for(&self, column: &str) -> Option<ValueRange> {
        self.value_ranges
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, range)| *range)
    }

    /// Role of a declared column, if the column is part of the schema.
    pub fn role_of(&self, column: &str) -> Option<ColumnRole> {
        if self.numeric_columns.iter().any(|c| c == column) {
            Some(ColumnRole::Metric)
        } else if column == self.timestamp_column {
            Some(ColumnRole::Timestamp)
        } else if self.identifier_columns.iter().any(|c| c == column) {
            Some(ColumnRole::Identifier)
        } else if self.text_columns.iter().any(|c| c == column) {
            Some(ColumnRole::Text)
        } else {
            None
        }
    }

    /// Every declared column in listing order: metrics, text, timestamp,
    /// then identifiers.
    pub fn declared_columns(&self) -> Vec<String> {
        let mut columns = Vec::new();
        for group in [
            &self.numeric_columns,
            &self.text_columns,
            &vec![self.timestamp_column.clone()],
            &self.identifier_columns,
        ] {
            for name in group {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.clone());
                }
            }
        }
        columns
    }
}
