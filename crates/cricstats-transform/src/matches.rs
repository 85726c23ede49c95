//! Match sheet rows to [`MatchResult`]s.

use cricstats_model::{MatchColumn, MatchResult, RawRow, Sheet, TossDecision};
use tracing::debug;

use crate::normalization::{clean_text, parse_match_date, parse_toss_decision};

/// Normalizes one raw row. Never fails; blank or unparseable fields stay unknown.
pub fn normalize_match(row: &RawRow<'_, MatchColumn>, row_index: usize) -> MatchResult {
    let mut result = MatchResult::new(row_index);
    result.winner = clean_text(row.get(MatchColumn::Winner));
    result.player_of_match = clean_text(row.get(MatchColumn::PlayerOfMatch));
    result.toss_decision = row
        .get(MatchColumn::Toss)
        .map_or(TossDecision::Unknown, parse_toss_decision);
    if let Some(parsed) = row.get(MatchColumn::Date).map(parse_match_date) {
        result.date = parsed.date;
        result.year = parsed.year;
    }
    result
}

/// Builds every result of the sheet in source order.
pub fn build_matches(sheet: &Sheet<MatchColumn>) -> Vec<MatchResult> {
    let results: Vec<MatchResult> = sheet
        .raw_rows()
        .enumerate()
        .map(|(idx, row)| normalize_match(&row, idx))
        .collect();
    let undated = results.iter().filter(|result| result.year.is_none()).count();
    debug!(
        path = %sheet.path.display(),
        matches = results.len(),
        undated,
        "built match results"
    );
    results
}
