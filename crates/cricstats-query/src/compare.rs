//! Side-by-side comparison of two players.

use std::cmp::Ordering;

use cricstats_model::{PlayerRecord, PlayerStat};
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::{QueryError, Result};

/// Fields shown in a comparison, in display order.
pub const COMPARISON_STATS: [PlayerStat; 6] = [
    PlayerStat::Runs,
    PlayerStat::Innings,
    PlayerStat::Centuries,
    PlayerStat::HalfCenturies,
    PlayerStat::Average,
    PlayerStat::Matches,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub stat: PlayerStat,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl ComparisonRow {
    /// `Less` when the right player is ahead; `None` when either side is unknown.
    pub fn leader(&self) -> Option<Ordering> {
        Some(self.left?.total_cmp(&self.right?))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison<'a> {
    pub left: &'a PlayerRecord,
    pub right: &'a PlayerRecord,
    pub rows: Vec<ComparisonRow>,
}

impl Comparison<'_> {
    pub fn spans(&self) -> (String, String) {
        (self.left.span_label(), self.right.span_label())
    }
}

/// Compares two distinct players found by name.
///
/// # Errors
///
/// Returns [`QueryError::PlayerNotFound`] for an unknown name and
/// [`QueryError::SamePlayer`] when both names resolve to the same record.
pub fn compare_players<'a>(
    dataset: &'a Dataset,
    left: &str,
    right: &str,
) -> Result<Comparison<'a>> {
    let left = dataset.find_player(left)?;
    let right = dataset.find_player(right)?;
    if left.key == right.key {
        return Err(QueryError::SamePlayer {
            name: left.name.clone(),
        });
    }
    let rows = COMPARISON_STATS
        .iter()
        .map(|&stat| ComparisonRow {
            stat,
            left: stat.value(left),
            right: stat.value(right),
        })
        .collect();
    Ok(Comparison { left, right, rows })
}
