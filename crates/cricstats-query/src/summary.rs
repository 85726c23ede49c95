//! Headline figures for the whole dataset.

use cricstats_model::{PlayerStat, QueryOptions};
use serde::Serialize;

use crate::dataset::Dataset;
use crate::ranking::{RankedPlayer, top_n, top_n_qualified};

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary<'a> {
    pub total_players: usize,
    pub total_matches: usize,
    pub most_runs: Option<RankedPlayer<'a>>,
    /// Best average among qualified players.
    pub best_average: Option<RankedPlayer<'a>>,
    pub most_centuries: Option<RankedPlayer<'a>>,
    pub min_innings: u32,
}

impl<'a> DatasetSummary<'a> {
    pub fn compute(dataset: &'a Dataset, options: &QueryOptions) -> Self {
        let leader = |stat| top_n(dataset, stat, 1).into_iter().next();
        Self {
            total_players: dataset.player_count(),
            total_matches: dataset.match_count(),
            most_runs: leader(PlayerStat::Runs),
            best_average: top_n_qualified(dataset, PlayerStat::Average, 1, options.min_innings)
                .into_iter()
                .next(),
            most_centuries: leader(PlayerStat::Centuries),
            min_innings: options.min_innings,
        }
    }
}
