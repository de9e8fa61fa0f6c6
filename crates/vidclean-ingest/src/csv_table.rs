//! CSV loading with encoding fallback.
//!
//! Scraped exports arrive either as UTF-8 (usually with a BOM) or as GBK.
//! The reader decodes the whole file up front, trying UTF-8 first and GBK
//! second; a file that decodes under neither is rejected before any stage
//! runs.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// An in-memory tabular dataset: a header row plus string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Decode raw file bytes, trying UTF-8 first and GBK as the fallback.
fn decode_source(path: &Path, bytes: &[u8]) -> Result<String> {
    // UTF-16 exports are not part of the source data's encoding family.
    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => {
            let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
            if had_errors {
                return Err(IngestError::Undecodable {
                    path: path.to_path_buf(),
                });
            }
            debug!(path = %path.display(), "decoded with GBK fallback");
            Ok(text.into_owned())
        }
    }
}

/// Read a delimited file into a [`CsvTable`].
///
/// The first non-empty row is the header; short data rows are padded with
/// empty cells and long ones truncated to the header width. Fully empty
/// rows are dropped. A file with no header row at all is an error; a
/// header-only file yields a table with zero rows.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let decoded = decode_source(path, &bytes)?;
    let content = decoded.strip_prefix('\u{feff}').unwrap_or(&decoded);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    if raw_rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "csv loaded"
    );
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn reads_utf8_with_bom() {
        let file = create_temp_csv("\u{feff}title,play_count\n视频一,1200\n".as_bytes());
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["title", "play_count"]);
        assert_eq!(table.rows, vec![vec!["视频一", "1200"]]);
    }

    #[test]
    fn falls_back_to_gbk() {
        let (encoded, _, had_errors) = encoding_rs::GBK.encode("title,tags\n美食测评,烹饪\n");
        assert!(!had_errors);
        let file = create_temp_csv(&encoded);
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.rows, vec![vec!["美食测评", "烹饪"]]);
    }

    #[test]
    fn rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, 0x41, 0x00]);
        let result = read_csv_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { encoding: "UTF-16 LE", .. })
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = read_csv_table(Path::new("/nonexistent/videos.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn empty_file_is_fatal() {
        let file = create_temp_csv(b"");
        let result = read_csv_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn short_rows_are_padded() {
        let file = create_temp_csv(b"a,b,c\n1,2\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.rows, vec![vec!["1", "2", ""]]);
    }

    #[test]
    fn header_only_yields_zero_rows() {
        let file = create_temp_csv(b"a,b\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert!(table.rows.is_empty());
    }
}
