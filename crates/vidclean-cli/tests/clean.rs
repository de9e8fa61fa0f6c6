//! Integration tests for the `clean` command.

use std::path::PathBuf;

use vidclean_cli::cli::CleanArgs;
use vidclean_cli::commands::run_clean;
use vidclean_ingest::read_csv_table;

const FIXTURE: &str = "\
play_count,like_count,title,description,publish_time,video_link
50,10,[show'],-,2025/03/10 14:30,https://example.com/v/1
2000,20,other,ok,2025/03/12 08:00,https://example.com/v/1
3000,abc,third,ok,bad,https://example.com/v/2
";

fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("videos.csv");
    std::fs::write(&path, FIXTURE).unwrap();
    path
}

fn cell<'a>(table: &'a vidclean_ingest::CsvTable, column: &str, row: usize) -> &'a str {
    let idx = table.column_index(column).unwrap();
    &table.rows[row][idx]
}

#[test]
fn clean_writes_cleaned_csv_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);
    let report_path = dir.path().join("report.json");
    let args = CleanArgs {
        input: input.clone(),
        output: None,
        report_json: Some(report_path.clone()),
        dry_run: false,
    };

    let outcome = run_clean(&args).unwrap();

    let output = outcome.output.clone().unwrap();
    assert_eq!(output, dir.path().join("videos_cleaned.csv"));
    let cleaned = read_csv_table(&output).unwrap();

    // Derived columns are present.
    for column in ["publish_date", "weekday", "video_link_duplicate", "title_duplicate"] {
        assert!(
            cleaned.column_index(column).is_some(),
            "missing column {column}"
        );
    }

    // Out-of-range play count clipped to the median of [50, 2000, 3000].
    assert_eq!(cell(&cleaned, "play_count", 0), "2000");
    // Malformed like count coerced to zero.
    assert_eq!(cell(&cleaned, "like_count", 2), "0");
    // Missing description resolved, title artifacts stripped.
    assert_eq!(cell(&cleaned, "description", 0), "");
    assert_eq!(cell(&cleaned, "title", 0), "show");
    // Timestamp split; the unparsable one failed soft.
    assert_eq!(cell(&cleaned, "publish_date", 0), "2025-03-10");
    assert_eq!(cell(&cleaned, "publish_time", 0), "14:30:00");
    assert_eq!(cell(&cleaned, "weekday", 0), "Monday");
    assert_eq!(cell(&cleaned, "publish_date", 2), "");
    // Both rows sharing the link are flagged; booleans render as 1/0.
    assert_eq!(cell(&cleaned, "video_link_duplicate", 0), "1");
    assert_eq!(cell(&cleaned, "video_link_duplicate", 1), "1");
    assert_eq!(cell(&cleaned, "video_link_duplicate", 2), "0");

    // The JSON report landed next to the output.
    assert_eq!(outcome.report_path.as_deref(), Some(report_path.as_path()));
    let report_json = std::fs::read_to_string(&report_path).unwrap();
    assert!(report_json.contains("\"duplicate_rows\": 2"));

    let duplicates_json =
        serde_json::to_string_pretty(&outcome.report.duplicates).unwrap();
    insta::assert_snapshot!(duplicates_json, @r#"
[
  {
    "column": "video_link",
    "duplicate_rows": 2,
    "samples": [
      "https://example.com/v/1"
    ]
  },
  {
    "column": "title",
    "duplicate_rows": 0,
    "samples": []
  }
]
"#);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);
    let report_path = dir.path().join("report.json");
    let args = CleanArgs {
        input,
        output: None,
        report_json: Some(report_path.clone()),
        dry_run: true,
    };

    let outcome = run_clean(&args).unwrap();

    assert!(outcome.output.is_none());
    assert!(outcome.report_path.is_none());
    assert!(!dir.path().join("videos_cleaned.csv").exists());
    assert!(!report_path.exists());
    // Diagnostics are still collected on a dry run.
    assert_eq!(outcome.report.total_duplicates(), 2);
}

#[test]
fn unreadable_input_aborts_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let args = CleanArgs {
        input: dir.path().join("missing.csv"),
        output: Some(dir.path().join("out.csv")),
        report_json: None,
        dry_run: false,
    };

    let result = run_clean(&args);
    assert!(result.is_err());
    assert!(!dir.path().join("out.csv").exists());
}
