//! Columnar view of normalized records.
//!
//! Unknown fields become nulls, so downstream consumers (CSV export, ad hoc
//! analysis) see the same absent-value semantics as the record types.

use cricstats_model::{MatchResult, PlayerRecord};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

/// One row per player, in source order.
///
/// # Errors
///
/// Propagates Polars frame construction errors.
pub fn players_frame(players: &[PlayerRecord]) -> PolarsResult<DataFrame> {
    let counts = |get: fn(&PlayerRecord) -> Option<u32>| -> Vec<Option<u32>> {
        players.iter().map(get).collect()
    };
    let years = |get: fn(&PlayerRecord) -> Option<i32>| -> Vec<Option<i32>> {
        players.iter().map(get).collect()
    };
    let names: Vec<String> = players.iter().map(|p| p.name.clone()).collect();
    let keys: Vec<String> = players.iter().map(|p| p.key.to_string()).collect();
    let not_out: Vec<bool> = players.iter().map(|p| p.highest_not_out).collect();
    let average: Vec<Option<f64>> = players.iter().map(|p| p.average).collect();
    let century_rate: Vec<Option<f64>> = players.iter().map(|p| p.century_rate).collect();

    DataFrame::new(vec![
        Series::new("player".into(), names).into_column(),
        Series::new("key".into(), keys).into_column(),
        Series::new("matches".into(), counts(|p| p.matches)).into_column(),
        Series::new("innings".into(), counts(|p| p.innings)).into_column(),
        Series::new("not_outs".into(), counts(|p| p.not_outs)).into_column(),
        Series::new("runs".into(), counts(|p| p.runs)).into_column(),
        Series::new("highest_score".into(), counts(|p| p.highest_score)).into_column(),
        Series::new("highest_not_out".into(), not_out).into_column(),
        Series::new("average".into(), average).into_column(),
        Series::new("centuries".into(), counts(|p| p.centuries)).into_column(),
        Series::new("half_centuries".into(), counts(|p| p.half_centuries)).into_column(),
        Series::new("ducks".into(), counts(|p| p.ducks)).into_column(),
        Series::new("start_year".into(), years(|p| p.start_year)).into_column(),
        Series::new("end_year".into(), years(|p| p.end_year)).into_column(),
        Series::new("career_length".into(), years(|p| p.career_length)).into_column(),
        Series::new("century_rate".into(), century_rate).into_column(),
    ])
}

/// One row per match, in source order. Dates are ISO 8601 text.
///
/// # Errors
///
/// Propagates Polars frame construction errors.
pub fn matches_frame(matches: &[MatchResult]) -> PolarsResult<DataFrame> {
    let winners: Vec<Option<String>> = matches.iter().map(|m| m.winner.clone()).collect();
    let awards: Vec<Option<String>> = matches.iter().map(|m| m.player_of_match.clone()).collect();
    let toss: Vec<Option<String>> = matches
        .iter()
        .map(|m| {
            m.toss_decision
                .is_known()
                .then(|| m.toss_decision.to_string())
        })
        .collect();
    let dates: Vec<Option<String>> = matches
        .iter()
        .map(|m| m.date.map(|d| d.format("%Y-%m-%d").to_string()))
        .collect();
    let years: Vec<Option<i32>> = matches.iter().map(|m| m.year).collect();

    DataFrame::new(vec![
        Series::new("winner".into(), winners).into_column(),
        Series::new("player_of_match".into(), awards).into_column(),
        Series::new("toss_decision".into(), toss).into_column(),
        Series::new("date".into(), dates).into_column(),
        Series::new("year".into(), years).into_column(),
    ])
}

#[cfg(test)]
mod tests {
    use cricstats_model::{PlayerKey, TossDecision};

    use super::*;

    #[test]
    fn unknown_fields_are_null() {
        let mut a = PlayerRecord::new(0, "A", PlayerKey::from_normalized("a"));
        a.runs = Some(10_000);
        let b = PlayerRecord::new(1, "B", PlayerKey::from_normalized("b"));
        let df = players_frame(&[a, b]).expect("frame");
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 16);
        let runs = df.column("runs").expect("runs column");
        assert_eq!(runs.null_count(), 1);
    }

    #[test]
    fn matches_frame_nulls_unknown_toss() {
        let mut first = MatchResult::new(0);
        first.toss_decision = TossDecision::Bat;
        let second = MatchResult::new(1);
        let df = matches_frame(&[first, second]).expect("frame");
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("toss_decision").expect("toss").null_count(), 1);
    }
}
