//! Tournament aggregates over match results.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::grouping::{GroupCount, GroupShare, grouped_count, percentages};

/// Matches played in one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Wins per team; results without a winner are excluded.
pub fn wins_by_team(dataset: &Dataset) -> Vec<GroupCount> {
    grouped_count(dataset.matches().iter().map(|result| result.winner.as_deref()))
}

/// Each team's share of all matches, plus an unknown bucket for matches with
/// no recorded winner.
///
/// # Errors
///
/// Never fails for counts taken from the same dataset; see [`percentages`].
pub fn win_shares(dataset: &Dataset) -> Result<Vec<GroupShare>> {
    percentages(&wins_by_team(dataset), dataset.match_count())
}

/// The `n` most frequent player-of-the-match winners.
pub fn top_awards(dataset: &Dataset, n: usize) -> Vec<GroupCount> {
    let mut awards = grouped_count(
        dataset
            .matches()
            .iter()
            .map(|result| result.player_of_match.as_deref()),
    );
    awards.truncate(n);
    awards
}

/// Count of each known toss decision.
pub fn toss_counts(dataset: &Dataset) -> Vec<GroupCount> {
    grouped_count(dataset.matches().iter().map(|result| {
        let decision = result.toss_decision;
        decision.is_known().then(|| decision.as_str())
    }))
}

/// Toss decision shares over all matches. Matches whose decision is
/// [`cricstats_model::TossDecision::Unknown`] form the unknown bucket.
///
/// # Errors
///
/// Never fails for counts taken from the same dataset; see [`percentages`].
pub fn toss_shares(dataset: &Dataset) -> Result<Vec<GroupShare>> {
    percentages(&toss_counts(dataset), dataset.match_count())
}

/// Matches per known year, ascending by year.
pub fn matches_by_year(dataset: &Dataset) -> Vec<YearCount> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for year in dataset.matches().iter().filter_map(|result| result.year) {
        *years.entry(year).or_default() += 1;
    }
    years
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}
