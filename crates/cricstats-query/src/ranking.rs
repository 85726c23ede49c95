//! Top-N rankings over player records.

use std::collections::BTreeSet;

use cricstats_model::{PlayerRecord, PlayerStat, QueryOptions};
use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;

/// One entry of a ranking. `rank` starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPlayer<'a> {
    pub rank: usize,
    pub player: &'a PlayerRecord,
    pub value: f64,
}

/// Share of one ranked player in the ranking's total value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingShare {
    pub name: String,
    pub value: f64,
    pub percent: f64,
}

/// Ranks `records` by `stat`, highest first, and keeps the first `n`.
///
/// Records whose value is unknown are excluded. Ties keep source row order.
pub fn rank_by<'a, I>(records: I, stat: PlayerStat, n: usize) -> Vec<RankedPlayer<'a>>
where
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    let mut scored: Vec<(&'a PlayerRecord, f64)> = records
        .into_iter()
        .filter_map(|record| stat.value(record).map(|value| (record, value)))
        .collect();
    scored.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| a.0.row_index.cmp(&b.0.row_index))
    });
    scored
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(idx, (player, value))| RankedPlayer {
            rank: idx + 1,
            player,
            value,
        })
        .collect()
}

/// The `n` records with the highest known `stat`.
pub fn top_n(dataset: &Dataset, stat: PlayerStat, n: usize) -> Vec<RankedPlayer<'_>> {
    let ranked = rank_by(dataset.players(), stat, n);
    debug!(stat = %stat, n, returned = ranked.len(), "top-n ranking");
    ranked
}

/// Like [`top_n`], restricted to records with `innings > min_innings`.
///
/// The filter is applied before ranking, so an unqualified record never takes
/// a slot.
pub fn top_n_qualified(
    dataset: &Dataset,
    stat: PlayerStat,
    n: usize,
    min_innings: u32,
) -> Vec<RankedPlayer<'_>> {
    let options = QueryOptions::new().with_min_innings(min_innings);
    let qualified = dataset
        .players()
        .iter()
        .filter(|record| options.qualifies(record.innings));
    let ranked = rank_by(qualified, stat, n);
    debug!(stat = %stat, n, min_innings, returned = ranked.len(), "qualified ranking");
    ranked
}

/// Ranks by `stat` with `options.top_n` entries, qualifying first when the
/// stat is a ratio that small samples distort.
pub fn top_by_stat<'a>(
    dataset: &'a Dataset,
    stat: PlayerStat,
    options: &QueryOptions,
) -> Vec<RankedPlayer<'a>> {
    if stat.needs_qualification() {
        top_n_qualified(dataset, stat, options.top_n, options.min_innings)
    } else {
        top_n(dataset, stat, options.top_n)
    }
}

/// Top run scorers among players whose career span covers `year`.
///
/// Career totals are ranked, not runs scored in that year.
pub fn top_scorers_in_year(dataset: &Dataset, year: i32, n: usize) -> Vec<RankedPlayer<'_>> {
    let active = dataset
        .players()
        .iter()
        .filter(|record| record.active_in(year));
    rank_by(active, PlayerStat::Runs, n)
}

/// Distinct known career start years, ascending.
pub fn available_years(dataset: &Dataset) -> Vec<i32> {
    dataset
        .players()
        .iter()
        .filter_map(|record| record.start_year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Each entry's share of the summed ranking values.
///
/// Empty when the ranking is empty or its values sum to zero or less.
pub fn ranking_shares(ranked: &[RankedPlayer<'_>]) -> Vec<RankingShare> {
    let total: f64 = ranked.iter().map(|entry| entry.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    ranked
        .iter()
        .map(|entry| RankingShare {
            name: entry.player.name.clone(),
            value: entry.value,
            percent: entry.value * 100.0 / total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricstats_transform::player_key;

    fn player(row: usize, name: &str) -> PlayerRecord {
        PlayerRecord::new(row, name, player_key(name))
    }

    #[test]
    fn ties_keep_source_order() {
        let mut a = player(0, "A");
        a.runs = Some(500);
        let mut b = player(1, "B");
        b.runs = Some(500);
        let mut c = player(2, "C");
        c.runs = Some(700);
        let records = [a, b, c];
        let names: Vec<&str> = rank_by(&records, PlayerStat::Runs, 3)
            .iter()
            .map(|entry| entry.player.name.as_str())
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn shares_skip_zero_totals() {
        let mut a = player(0, "A");
        a.centuries = Some(0);
        let records = [a];
        let ranked = rank_by(&records, PlayerStat::Centuries, 5);
        assert_eq!(ranked.len(), 1);
        assert!(ranking_shares(&ranked).is_empty());
    }
}
