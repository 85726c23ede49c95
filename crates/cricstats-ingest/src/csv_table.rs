use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::{RawTable, TableBuilder};

/// Reads a CSV file whose first non-blank row is the header.
///
/// Blank rows are skipped. Cell text is trimmed but otherwise untouched; all
/// type interpretation happens in the normalizer. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD so one mis-encoded cell never drops the file.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] for a missing path,
/// [`IngestError::CsvParse`] for malformed CSV and [`IngestError::EmptyTable`]
/// when the file has no header row.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut builder = TableBuilder::default();
    let mut lossy_cells = 0usize;
    for record in reader.byte_records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let cells: Vec<String> = record
            .iter()
            .map(|bytes| match std::str::from_utf8(bytes) {
                Ok(text) => text.to_string(),
                Err(_) => {
                    lossy_cells += 1;
                    String::from_utf8_lossy(bytes).into_owned()
                }
            })
            .collect();
        builder.push_row(&cells);
    }

    let blank_rows = builder.blank_rows();
    let table = builder.finish(path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        blank_rows,
        lossy_cells,
        "read csv table"
    );
    Ok(table)
}
