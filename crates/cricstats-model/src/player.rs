//! Career batting line for one player.

use serde::{Deserialize, Serialize};

use crate::ids::PlayerKey;

/// One batter's career line as normalized from a spreadsheet row.
///
/// Every statistic is optional: `None` means the source value was blank or
/// could not be parsed, and is never the same as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// 0-based position of the row in its source.
    pub row_index: usize,
    /// Name as written in the source, trimmed.
    pub name: String,
    pub key: PlayerKey,
    pub matches: Option<u32>,
    pub innings: Option<u32>,
    pub not_outs: Option<u32>,
    pub runs: Option<u32>,
    pub highest_score: Option<u32>,
    /// The highest score carried the not-out marker (`248*`).
    pub highest_not_out: bool,
    pub average: Option<f64>,
    pub centuries: Option<u32>,
    pub half_centuries: Option<u32>,
    pub ducks: Option<u32>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    /// Derived: `end_year - start_year`.
    pub career_length: Option<i32>,
    /// Derived: `centuries / innings`.
    pub century_rate: Option<f64>,
}

impl PlayerRecord {
    /// A record carrying only identity; every statistic unknown.
    pub fn new(row_index: usize, name: impl Into<String>, key: PlayerKey) -> Self {
        Self {
            row_index,
            name: name.into(),
            key,
            matches: None,
            innings: None,
            not_outs: None,
            runs: None,
            highest_score: None,
            highest_not_out: false,
            average: None,
            centuries: None,
            half_centuries: None,
            ducks: None,
            start_year: None,
            end_year: None,
            career_length: None,
            century_rate: None,
        }
    }

    /// Whether the career span covers `year` (both ends inclusive).
    ///
    /// A record with either end of its span unknown is never active.
    pub fn active_in(&self, year: i32) -> bool {
        match (self.start_year, self.end_year) {
            (Some(start), Some(end)) => start <= year && year <= end,
            _ => false,
        }
    }

    /// `"START-END"`, or `"N/A"` when either year is unknown.
    pub fn span_label(&self) -> String {
        match (self.start_year, self.end_year) {
            (Some(start), Some(end)) => format!("{start}-{end}"),
            _ => "N/A".to_string(),
        }
    }

    /// Highest score as printed on a scorecard, `"248*"` for not out.
    pub fn highest_score_label(&self) -> Option<String> {
        self.highest_score.map(|score| {
            if self.highest_not_out {
                format!("{score}*")
            } else {
                score.to_string()
            }
        })
    }
}
