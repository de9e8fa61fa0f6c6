//! Cleaned dataset output.
//!
//! Output stays in the source data's encoding family: UTF-8 with a BOM, so
//! spreadsheet tools that expect the scraper's `utf-8-sig` convention open
//! it without mangling the text columns.

use std::io;
use std::path::Path;

use tracing::debug;

use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write a table as a comma-delimited UTF-8 file with a BOM.
///
/// The file is built fully in memory and written in one call, so a failed
/// run never leaves a partial output behind.
pub fn write_csv_table(path: &Path, table: &CsvTable) -> Result<()> {
    let mut buffer = Vec::from(UTF8_BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer
            .write_record(&table.headers)
            .map_err(|e| write_error(path, e))?;
        for row in &table.rows {
            writer.write_record(row).map_err(|e| write_error(path, e))?;
        }
        writer.flush().map_err(|e| IngestError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, buffer).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.headers.len(),
        "csv written"
    );
    Ok(())
}

fn write_error(path: &Path, error: csv::Error) -> IngestError {
    IngestError::FileWrite {
        path: path.to_path_buf(),
        source: io::Error::other(error),
    }
}
