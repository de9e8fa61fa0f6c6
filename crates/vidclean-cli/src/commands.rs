use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use vidclean_core::{frame_from_table, frame_to_table, run_stages};
use vidclean_ingest::{read_csv_table, write_csv_table};
use vidclean_model::schema::{DATE_COLUMN, WEEKDAY_COLUMN};
use vidclean_model::{CleaningReport, Schema};

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;
use crate::types::CleanOutcome;

/// Run the cleaning pipeline over one dataset file.
///
/// Reads the source (fatal if unreadable under both encodings), runs every
/// stage, and writes the cleaned dataset plus the optional JSON report.
/// With `--dry-run` nothing is written.
pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let clean_span = info_span!("clean", input = %args.input.display());
    let _clean_guard = clean_span.enter();
    let clean_start = Instant::now();

    let schema = Schema::default();
    let table = read_csv_table(&args.input).context("read input")?;
    let mut df = frame_from_table(&table)
        .with_context(|| format!("build frame from {}", args.input.display()))?;

    let report = run_stages(&mut df, &schema)?;

    let output = if args.dry_run {
        info!(input = %args.input.display(), "output skipped (dry run)");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        let cleaned = frame_to_table(&df);
        write_csv_table(&path, &cleaned).context("write output")?;
        Some(path)
    };

    let report_path = if args.dry_run {
        None
    } else if let Some(path) = &args.report_json {
        write_report_json(path, &report)?;
        Some(path.clone())
    } else {
        None
    };

    info!(
        input = %args.input.display(),
        rows = report.rows,
        duration_ms = clean_start.elapsed().as_millis(),
        "clean complete"
    );

    Ok(CleanOutcome {
        input: args.input.clone(),
        output,
        report_path,
        columns: df.width(),
        report,
    })
}

/// Default output path: `<input stem>_cleaned.csv` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("dataset");
    input.with_file_name(format!("{stem}_cleaned.csv"))
}

/// Persist the diagnostics report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &CleaningReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    std::fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}

/// Print the declared dataset schema.
pub fn run_schema() -> Result<()> {
    let schema = Schema::default();
    let mut table = Table::new();
    table.set_header(vec!["Column", "Role", "Valid range"]);
    apply_table_style(&mut table);
    for column in schema.declared_columns() {
        let role = schema
            .role_of(&column)
            .map(|role| role.as_str())
            .unwrap_or("-");
        let range = schema
            .range_for(&column)
            .map(|range| format!("{}..={}", range.min, range.max))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![column, role.to_string(), range]);
    }
    println!("{table}");
    println!(
        "Derived on clean: {DATE_COLUMN}, {WEEKDAY_COLUMN}, and one \
         <column>_duplicate flag per identity column ({})",
        schema.identity_columns.join(", ")
    );
    Ok(())
}
