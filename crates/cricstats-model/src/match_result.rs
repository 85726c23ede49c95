//! One tournament match result.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Decision taken by the toss winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Field,
    /// The toss text was absent or did not follow the "elected to ... first" pattern.
    #[default]
    Unknown,
}

impl TossDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            TossDecision::Bat => "bat",
            TossDecision::Field => "field",
            TossDecision::Unknown => "unknown",
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, TossDecision::Unknown)
    }
}

impl fmt::Display for TossDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0-based position of the row in its source.
    pub row_index: usize,
    /// Trimmed winner; `None` when blank.
    pub winner: Option<String>,
    /// Trimmed award winner; `None` when blank or the column is absent.
    pub player_of_match: Option<String>,
    pub toss_decision: TossDecision,
    pub date: Option<NaiveDate>,
    /// Calendar year of `date`, or of a bare year when only that is given.
    pub year: Option<i32>,
}

impl MatchResult {
    pub fn new(row_index: usize) -> Self {
        Self {
            row_index,
            winner: None,
            player_of_match: None,
            toss_decision: TossDecision::Unknown,
            date: None,
            year: None,
        }
    }
}
