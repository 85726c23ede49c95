//! Tunable parameters for analytical queries.

use serde::{Deserialize, Serialize};

/// Default number of entries in a ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// Default innings threshold; qualification is strictly greater than this.
pub const DEFAULT_MIN_INNINGS: u32 = 20;

pub const DEFAULT_AVERAGE_BINS: usize = 20;

pub const DEFAULT_CENTURY_BIN_WIDTH: u32 = 10;

/// Options shared by every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Entries returned by rankings.
    pub top_n: usize,
    /// Records need `innings > min_innings` to enter qualified rankings.
    pub min_innings: u32,
    /// Bin count for the batting average histogram.
    pub average_bins: usize,
    /// Bin width for the centuries histogram.
    pub century_bin_width: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_innings: DEFAULT_MIN_INNINGS,
            average_bins: DEFAULT_AVERAGE_BINS,
            century_bin_width: DEFAULT_CENTURY_BIN_WIDTH,
        }
    }
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_min_innings(mut self, min_innings: u32) -> Self {
        self.min_innings = min_innings;
        self
    }

    /// Whether a record with `innings` passes the qualification filter.
    pub fn qualifies(&self, innings: Option<u32>) -> bool {
        innings.is_some_and(|value| value > self.min_innings)
    }
}
