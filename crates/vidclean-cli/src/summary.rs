use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vidclean_model::CleaningReport;

use crate::types::CleanOutcome;

/// Per-column aggregate assembled from the stage summaries.
#[derive(Debug, Default)]
struct ColumnDiag {
    missing: Option<usize>,
    zeroed: Option<usize>,
    below: Option<usize>,
    above: Option<usize>,
    median: Option<i64>,
    duplicates: Option<usize>,
    sanitized: Option<usize>,
}

pub fn print_summary(outcome: &CleanOutcome) {
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: skipped (dry run)"),
    }
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }
    println!(
        "Rows: {}  Columns: {}",
        outcome.report.rows, outcome.columns
    );

    let report = &outcome.report;
    let diags = collect_diags(report);
    if !diags.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Column"),
            header_cell("Missing"),
            header_cell("Zeroed"),
            header_cell("Below"),
            header_cell("Above"),
            header_cell("Median"),
            header_cell("Duplicates"),
            header_cell("Sanitized"),
        ]);
        apply_table_style(&mut table);
        for index in 1..8 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for (column, diag) in &diags {
            table.add_row(vec![
                Cell::new(column)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                count_cell(diag.missing, Color::Yellow),
                count_cell(diag.zeroed, Color::Yellow),
                count_cell(diag.below, Color::Red),
                count_cell(diag.above, Color::Red),
                median_cell(diag.median),
                count_cell(diag.duplicates, Color::Red),
                count_cell(diag.sanitized, Color::Yellow),
            ]);
        }
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            count_cell(Some(report.total_missing()), Color::Yellow).add_attribute(Attribute::Bold),
            count_cell(Some(report.total_zeroed()), Color::Yellow).add_attribute(Attribute::Bold),
            count_cell(
                Some(report.outliers.iter().map(|o| o.below).sum()),
                Color::Red,
            )
            .add_attribute(Attribute::Bold),
            count_cell(
                Some(report.outliers.iter().map(|o| o.above).sum()),
                Color::Red,
            )
            .add_attribute(Attribute::Bold),
            dim_cell("-"),
            count_cell(Some(report.total_duplicates()), Color::Red)
                .add_attribute(Attribute::Bold),
            count_cell(
                Some(report.sanitized.iter().map(|s| s.changed).sum()),
                Color::Yellow,
            )
            .add_attribute(Attribute::Bold),
        ]);
        println!("{table}");
    }

    if let Some(temporal) = &report.temporal {
        println!(
            "Timestamps: {} parsed, {} unparsable, {} missing",
            temporal.parsed, temporal.unparsable, temporal.missing
        );
    }

    for entry in &report.duplicates {
        if !entry.samples.is_empty() {
            println!(
                "Duplicate {} values (first {}): {}",
                entry.column,
                entry.samples.len(),
                entry.samples.join(", ")
            );
        }
    }

    if !report.skipped.is_empty() {
        println!("Skipped columns:");
        for skipped in &report.skipped {
            println!("- {} ({})", skipped.column, skipped.stage.as_str());
        }
    }
}

/// Merge the per-stage summaries into one row per column, first-seen order.
fn collect_diags(report: &CleaningReport) -> Vec<(String, ColumnDiag)> {
    let mut diags: Vec<(String, ColumnDiag)> = Vec::new();
    fn entry<'a>(diags: &'a mut Vec<(String, ColumnDiag)>, column: &str) -> &'a mut ColumnDiag {
        let index = match diags.iter().position(|(name, _)| name == column) {
            Some(index) => index,
            None => {
                diags.push((column.to_string(), ColumnDiag::default()));
                diags.len() - 1
            }
        };
        &mut diags[index].1
    }

    for summary in &report.coercions {
        entry(&mut diags, &summary.column).zeroed = Some(summary.zeroed);
    }
    for summary in &report.missing {
        entry(&mut diags, &summary.column).missing = Some(summary.count);
    }
    for summary in &report.outliers {
        let diag = entry(&mut diags, &summary.column);
        diag.below = Some(summary.below);
        diag.above = Some(summary.above);
        diag.median = summary.median;
    }
    for summary in &report.duplicates {
        entry(&mut diags, &summary.column).duplicates = Some(summary.duplicate_rows);
    }
    for summary in &report.sanitized {
        entry(&mut diags, &summary.column).sanitized = Some(summary.changed);
    }
    diags
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn median_cell(median: Option<i64>) -> Cell {
    match median {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
