use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::{RawTable, TableBuilder};

/// File extensions read as spreadsheets rather than CSV.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Whether `path` names a spreadsheet by its extension (case-insensitive).
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Cell text as the CSV reader would see it. Whole-number floats print
/// without a fractional part and date cells print as `YYYY-MM-DD`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{value:.0}")
        }
        Data::Float(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value.as_datetime().map_or_else(
            || value.as_f64().to_string(),
            |datetime| datetime.date().format("%Y-%m-%d").to_string(),
        ),
        Data::Error(_) => String::new(),
    }
}

/// Reads the first worksheet of a workbook; its first non-blank row is the header.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] for a missing path,
/// [`IngestError::Workbook`] when the file cannot be opened or read, and
/// [`IngestError::EmptyTable`] when there is no worksheet or no header row.
pub fn read_workbook_table(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let workbook_error = |source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyTable {
            path: path.to_path_buf(),
        })?
        .map_err(workbook_error)?;

    let mut builder = TableBuilder::default();
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        builder.push_row(&cells);
    }

    let blank_rows = builder.blank_rows();
    let table = builder.finish(path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        blank_rows,
        "read workbook table"
    );
    Ok(table)
}
