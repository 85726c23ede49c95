//! Fixed column schema for the two tabular sources.
//!
//! Headers are resolved to positions once, when a sheet is loaded. Query code
//! never looks columns up by name; it reads typed records built from
//! [`RawRow`] accessors.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::error::SchemaError;
use crate::lookup::HeaderIndex;

/// Version of the column layout below. Bump when a column is added or renamed.
pub const SCHEMA_VERSION: u32 = 1;

/// A known column of a tabular source.
pub trait Column: Copy + Ord + Debug + 'static {
    /// Every column of the schema, in canonical order.
    const ALL: &'static [Self];

    /// Canonical header text.
    fn header(self) -> &'static str;

    /// Alternative header spellings accepted on load.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Whether loading fails when the column is absent.
    fn required(self) -> bool;
}

/// Columns of the batting statistics sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerColumn {
    Player,
    Matches,
    Innings,
    NotOuts,
    Runs,
    HighestScore,
    Average,
    Centuries,
    HalfCenturies,
    Ducks,
    Span,
}

impl Column for PlayerColumn {
    const ALL: &'static [Self] = &[
        Self::Player,
        Self::Matches,
        Self::Innings,
        Self::NotOuts,
        Self::Runs,
        Self::HighestScore,
        Self::Average,
        Self::Centuries,
        Self::HalfCenturies,
        Self::Ducks,
        Self::Span,
    ];

    fn header(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Matches => "Mat",
            Self::Innings => "Inn",
            Self::NotOuts => "NO",
            Self::Runs => "Runs",
            Self::HighestScore => "HS",
            Self::Average => "Avg",
            Self::Centuries => "100",
            Self::HalfCenturies => "50",
            Self::Ducks => "0",
            Self::Span => "Span",
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::Player)
    }
}

/// Columns of the tournament results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchColumn {
    Winner,
    PlayerOfMatch,
    Toss,
    Date,
}

impl Column for MatchColumn {
    const ALL: &'static [Self] = &[Self::Winner, Self::PlayerOfMatch, Self::Toss, Self::Date];

    fn header(self) -> &'static str {
        match self {
            Self::Winner => "Winner",
            Self::PlayerOfMatch => "Player of the Match",
            Self::Toss => "Toss",
            Self::Date => "Date",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::PlayerOfMatch => &["POTM", "Player Of Match"],
            Self::Date => &["Match Date"],
            _ => &[],
        }
    }

    fn required(self) -> bool {
        matches!(self, Self::Winner)
    }
}

/// Resolved position of each schema column within a source's header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout<C: Column> {
    positions: BTreeMap<C, usize>,
}

impl<C: Column> ColumnLayout<C> {
    /// Resolves every schema column against `headers`.
    ///
    /// The canonical header is tried before aliases. A column matched by more
    /// than one header is rejected rather than silently picking one.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingColumn`] when a required column is absent
    /// and [`SchemaError::DuplicateColumn`] when a column header repeats.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, SchemaError> {
        let index = HeaderIndex::new(headers.iter().map(AsRef::as_ref));
        let mut positions = BTreeMap::new();
        for &column in C::ALL {
            let names = std::iter::once(column.header()).chain(column.aliases().iter().copied());
            let mut found = None;
            for name in names {
                match index.positions(name) {
                    [] => continue,
                    [idx] => {
                        found = Some(*idx);
                        break;
                    }
                    _ => {
                        return Err(SchemaError::DuplicateColumn {
                            column: column.header(),
                        });
                    }
                }
            }
            match found {
                Some(idx) => {
                    positions.insert(column, idx);
                }
                None if column.required() => {
                    return Err(SchemaError::MissingColumn {
                        column: column.header(),
                    });
                }
                None => {}
            }
        }
        Ok(Self { positions })
    }

    pub fn position(&self, column: C) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// Optional columns the source does not carry.
    pub fn missing(&self) -> Vec<C> {
        C::ALL
            .iter()
            .copied()
            .filter(|column| !self.positions.contains_key(column))
            .collect()
    }
}

/// A loaded source: resolved layout plus the raw cell text of every data row.
#[derive(Debug, Clone)]
pub struct Sheet<C: Column> {
    pub path: PathBuf,
    pub layout: ColumnLayout<C>,
    pub rows: Vec<Vec<String>>,
}

impl<C: Column> Sheet<C> {
    pub fn new(path: impl AsRef<Path>, layout: ColumnLayout<C>, rows: Vec<Vec<String>>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data rows in source order.
    pub fn raw_rows(&self) -> impl Iterator<Item = RawRow<'_, C>> {
        self.rows.iter().map(|cells| RawRow {
            layout: &self.layout,
            cells,
        })
    }
}

/// One data row viewed through a [`ColumnLayout`].
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a, C: Column> {
    layout: &'a ColumnLayout<C>,
    cells: &'a [String],
}

impl<'a, C: Column> RawRow<'a, C> {
    pub fn new(layout: &'a ColumnLayout<C>, cells: &'a [String]) -> Self {
        Self { layout, cells }
    }

    /// Raw cell text, or `None` when the column is absent or the row is short.
    pub fn get(&self, column: C) -> Option<&'a str> {
        let idx = self.layout.position(column)?;
        self.cells.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_player_headers() {
        let headers = ["Player", "Span", "Mat", "Inn", "Runs"];
        let layout = ColumnLayout::<PlayerColumn>::resolve(&headers).expect("layout");
        assert_eq!(layout.position(PlayerColumn::Player), Some(0));
        assert_eq!(layout.position(PlayerColumn::Span), Some(1));
        assert_eq!(layout.position(PlayerColumn::Average), None);
        assert!(layout.missing().contains(&PlayerColumn::Ducks));
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = ColumnLayout::<MatchColumn>::resolve(&["Toss", "Date"]).unwrap_err();
        assert_eq!(err, SchemaError::MissingColumn { column: "Winner" });
    }

    #[test]
    fn aliases_resolve_after_canonical_name() {
        let layout =
            ColumnLayout::<MatchColumn>::resolve(&["winner", "Match Date", "POTM"]).expect("layout");
        assert_eq!(layout.position(MatchColumn::Date), Some(1));
        assert_eq!(layout.position(MatchColumn::PlayerOfMatch), Some(2));
    }

    #[test]
    fn repeated_header_is_rejected() {
        let err = ColumnLayout::<PlayerColumn>::resolve(&["Player", "Runs", "runs"]).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateColumn { column: "Runs" });
    }

    #[test]
    fn short_row_reads_as_absent() {
        let layout = ColumnLayout::<MatchColumn>::resolve(&["Winner", "Toss"]).expect("layout");
        let cells = vec!["India".to_string()];
        let row = RawRow::new(&layout, &cells);
        assert_eq!(row.get(MatchColumn::Winner), Some("India"));
        assert_eq!(row.get(MatchColumn::Toss), None);
        assert_eq!(row.get(MatchColumn::Date), None);
    }
}
