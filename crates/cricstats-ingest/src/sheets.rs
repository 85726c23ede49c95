//! Schema resolution for the two tabular sources.

use std::path::Path;
use std::time::Instant;

use cricstats_model::{Column, ColumnLayout, MatchColumn, PlayerColumn, SCHEMA_VERSION, Sheet};
use tracing::{info, warn};

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};
use crate::table::RawTable;
use crate::xlsx_table::{is_workbook, read_workbook_table};

/// Reads `path` as a spreadsheet when its extension says so, otherwise as CSV.
///
/// # Errors
///
/// See [`read_csv_table`] and [`read_workbook_table`].
pub fn read_table(path: &Path) -> Result<RawTable> {
    if is_workbook(path) {
        read_workbook_table(path)
    } else {
        read_csv_table(path)
    }
}

/// Reads `path` and resolves its header against the schema of `C`.
///
/// Optional columns the file lacks are reported once as a warning; every
/// record loaded from it will carry that field as unknown.
///
/// # Errors
///
/// Fails when the file cannot be read or a required column is absent.
pub fn load_sheet<C: Column>(path: &Path) -> Result<Sheet<C>> {
    let start = Instant::now();
    let table = read_table(path)?;
    let layout =
        ColumnLayout::<C>::resolve(table.headers.as_slice()).map_err(|source| IngestError::Schema {
            path: path.to_path_buf(),
            source,
        })?;
    for column in layout.missing() {
        warn!(
            path = %path.display(),
            column = column.header(),
            "optional column missing; values will be unknown"
        );
    }
    info!(
        path = %path.display(),
        rows = table.rows.len(),
        schema_version = SCHEMA_VERSION,
        duration_ms = start.elapsed().as_millis(),
        "loaded sheet"
    );
    Ok(Sheet::new(path, layout, table.rows))
}

/// Loads the batting statistics sheet.
///
/// # Errors
///
/// See [`load_sheet`].
pub fn load_player_sheet(path: &Path) -> Result<Sheet<PlayerColumn>> {
    load_sheet(path)
}

/// Loads the tournament results table.
///
/// # Errors
///
/// See [`load_sheet`].
pub fn load_match_sheet(path: &Path) -> Result<Sheet<MatchColumn>> {
    load_sheet(path)
}
