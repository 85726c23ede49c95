//! Player sheet rows to [`PlayerRecord`]s.

use cricstats_model::{PlayerColumn, PlayerRecord, RawRow, Sheet};
use tracing::{debug, trace, warn};

use crate::derive::derive_player_fields;
use crate::normalization::{
    parse_count, parse_decimal, parse_highest_score, parse_span, player_key,
};

/// Normalizes one raw row. Never fails; unparseable fields stay unknown.
///
/// Returns `None` only for rows without a player name.
pub fn normalize_player(row: &RawRow<'_, PlayerColumn>, row_index: usize) -> Option<PlayerRecord> {
    let name = row.get(PlayerColumn::Player)?.trim();
    if name.is_empty() {
        return None;
    }
    let count = |column| row.get(column).and_then(parse_count);

    let mut record = PlayerRecord::new(row_index, name, player_key(name));
    record.matches = count(PlayerColumn::Matches);
    record.innings = count(PlayerColumn::Innings);
    record.not_outs = count(PlayerColumn::NotOuts);
    record.runs = count(PlayerColumn::Runs);
    record.centuries = count(PlayerColumn::Centuries);
    record.half_centuries = count(PlayerColumn::HalfCenturies);
    record.ducks = count(PlayerColumn::Ducks);
    record.average = row.get(PlayerColumn::Average).and_then(parse_decimal);
    if let Some((score, not_out)) = row.get(PlayerColumn::HighestScore).and_then(parse_highest_score)
    {
        record.highest_score = Some(score);
        record.highest_not_out = not_out;
    }
    if let Some(span) = row.get(PlayerColumn::Span).map(parse_span) {
        record.start_year = span.start;
        record.end_year = span.end;
    }
    trace!(row = row_index, name = %record.name, runs = ?record.runs, "normalized player row");
    Some(record)
}

/// Builds every record of the sheet: normalization pass, then derived fields.
///
/// Source order is preserved. Nameless rows are dropped.
pub fn build_players(sheet: &Sheet<PlayerColumn>) -> Vec<PlayerRecord> {
    let mut records: Vec<PlayerRecord> = sheet
        .raw_rows()
        .enumerate()
        .filter_map(|(idx, row)| normalize_player(&row, idx))
        .collect();
    let dropped = sheet.len() - records.len();
    if dropped > 0 {
        warn!(
            path = %sheet.path.display(),
            dropped,
            "skipped rows without a player name"
        );
    }

    for record in &mut records {
        derive_player_fields(record);
    }
    debug!(path = %sheet.path.display(), players = records.len(), "built player records");
    records
}
