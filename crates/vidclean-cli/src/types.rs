use std::path::PathBuf;

use vidclean_model::CleaningReport;

/// Result of one `clean` invocation.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    /// Written output path; None on a dry run.
    pub output: Option<PathBuf>,
    /// Written JSON report path, when requested.
    pub report_path: Option<PathBuf>,
    /// Column count of the final dataset, derived columns included.
    pub columns: usize,
    pub report: CleaningReport,
}
