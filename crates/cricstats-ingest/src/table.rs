//! Source-independent raw table shape shared by the CSV and workbook readers.

use std::path::Path;

use crate::error::{IngestError, Result};

/// A source as header row plus data rows of trimmed cell text.
///
/// Every data row has exactly `headers.len()` cells: short rows are padded
/// with empty strings and surplus cells are dropped.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Collects rows in source order: blank rows are skipped and the first
/// non-blank row becomes the header.
#[derive(Debug, Default)]
pub(crate) struct TableBuilder {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    blank_rows: usize,
}

impl TableBuilder {
    pub(crate) fn push_row(&mut self, cells: &[String]) {
        if cells.iter().all(|value| value.trim().is_empty()) {
            self.blank_rows += 1;
            return;
        }
        match &self.headers {
            None => {
                self.headers = Some(cells.iter().map(|cell| normalize_header(cell)).collect());
            }
            Some(header_row) => {
                let row = (0..header_row.len())
                    .map(|idx| cells.get(idx).map(|cell| normalize_cell(cell)).unwrap_or_default())
                    .collect();
                self.rows.push(row);
            }
        }
    }

    pub(crate) fn blank_rows(&self) -> usize {
        self.blank_rows
    }

    /// # Errors
    ///
    /// Returns [`IngestError::EmptyTable`] when no header row was seen.
    pub(crate) fn finish(self, path: &Path) -> Result<RawTable> {
        let Some(headers) = self.headers else {
            return Err(IngestError::EmptyTable {
                path: path.to_path_buf(),
            });
        };
        Ok(RawTable {
            headers,
            rows: self.rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn header_whitespace_is_collapsed() {
        assert_eq!(normalize_header("\u{feff} Player  of the\tMatch "), "Player of the Match");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn cells_are_trimmed() {
        assert_eq!(normalize_cell("  12,345 "), "12,345");
    }

    #[test]
    fn builder_skips_blank_rows_and_pads() {
        let mut builder = TableBuilder::default();
        builder.push_row(&cells(&["", " "]));
        builder.push_row(&cells(&["A", "B"]));
        builder.push_row(&cells(&["1"]));
        builder.push_row(&cells(&["2", "x", "extra"]));
        assert_eq!(builder.blank_rows(), 1);
        let table = builder.finish(Path::new("t.csv")).expect("table");
        assert_eq!(table.headers, ["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1", ""], vec!["2", "x"]]);
    }

    #[test]
    fn builder_without_header_is_empty() {
        let builder = TableBuilder::default();
        assert!(matches!(
            builder.finish(Path::new("t.csv")),
            Err(IngestError::EmptyTable { .. })
        ));
    }
}
