//! Integration tests for record normalization.

use cricstats_model::{ColumnLayout, MatchColumn, PlayerColumn, Sheet, TossDecision};
use cricstats_transform::normalization::{normalize_name, parse_count, parse_span};
use cricstats_transform::{build_matches, build_players};
use proptest::prelude::*;

fn sheet<C: cricstats_model::Column>(headers: &[&str], rows: &[&[&str]]) -> Sheet<C> {
    let layout = ColumnLayout::<C>::resolve(headers).expect("layout");
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
        .collect();
    Sheet::new("test.csv", layout, rows)
}

const PLAYER_HEADERS: &[&str] = &[
    "Player", "Span", "Mat", "Inn", "NO", "Runs", "HS", "Avg", "100", "50", "0",
];

#[test]
fn builds_player_records_with_derived_fields() {
    let sheet = sheet::<PlayerColumn>(
        PLAYER_HEADERS,
        &[
            &["SR Tendulkar (INDIA)", "1989-2013", "200", "329", "33", "15,921", "248*", "53.78", "51", "68", "14"],
            &["New Kid*", "2024-", "2", "0", "0", "", "-", "-", "0", "0", "0"],
        ],
    );
    let players = build_players(&sheet);
    assert_eq!(players.len(), 2);

    let sachin = &players[0];
    assert_eq!(sachin.row_index, 0);
    assert_eq!(sachin.key.as_str(), "sr tendulkar (india)");
    assert_eq!(sachin.runs, Some(15_921));
    assert_eq!(sachin.highest_score, Some(248));
    assert!(sachin.highest_not_out);
    assert_eq!(sachin.average, Some(53.78));
    assert_eq!(sachin.career_length, Some(24));
    assert_eq!(sachin.century_rate, Some(51.0 / 329.0));

    let kid = &players[1];
    assert_eq!(kid.key.as_str(), "new kid");
    assert_eq!(kid.runs, None);
    assert_eq!(kid.average, None);
    assert_eq!(kid.highest_score, None);
    assert_eq!(kid.start_year, Some(2024));
    assert_eq!(kid.end_year, None);
    assert_eq!(kid.career_length, None);
    // Zero innings: no rate rather than a division by zero.
    assert_eq!(kid.century_rate, None);
}

#[test]
fn missing_columns_leave_fields_unknown() {
    let sheet = sheet::<PlayerColumn>(&["Player", "Runs"], &[&["A", "10,000"]]);
    let players = build_players(&sheet);
    assert_eq!(players[0].runs, Some(10_000));
    assert_eq!(players[0].innings, None);
    assert_eq!(players[0].start_year, None);
    assert_eq!(players[0].century_rate, None);
}

#[test]
fn nameless_rows_are_dropped_but_indices_follow_the_source() {
    let sheet = sheet::<PlayerColumn>(
        &["Player", "Runs"],
        &[&["A", "1"], &["  ", "2"], &["B", "3"]],
    );
    let players = build_players(&sheet);
    let indices: Vec<usize> = players.iter().map(|p| p.row_index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn builds_match_results() {
    let sheet = sheet::<MatchColumn>(
        &["Winner", "Toss", "Date", "Player of the Match"],
        &[
            &[" India ", "India elected to bat first", "2013-06-23", " RA Jadeja "],
            &["", "no toss (rain)", "not a date", ""],
        ],
    );
    let matches = build_matches(&sheet);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].winner.as_deref(), Some("India"));
    assert_eq!(matches[0].player_of_match.as_deref(), Some("RA Jadeja"));
    assert_eq!(matches[0].toss_decision, TossDecision::Bat);
    assert_eq!(matches[0].year, Some(2013));

    assert_eq!(matches[1].winner, None);
    assert_eq!(matches[1].player_of_match, None);
    assert_eq!(matches[1].toss_decision, TossDecision::Unknown);
    assert_eq!(matches[1].date, None);
    assert_eq!(matches[1].year, None);
}

fn with_separators(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

proptest! {
    #[test]
    fn separated_counts_parse_to_their_value(value in any::<u32>()) {
        prop_assert_eq!(parse_count(&with_separators(value)), Some(value));
    }

    #[test]
    fn alphabetic_text_is_unknown(text in "[a-zA-Z ]{1,12}") {
        prop_assert_eq!(parse_count(&text), None);
    }

    #[test]
    fn span_length_is_end_minus_start(start in 1877i32..2030, len in 0i32..40) {
        let end = start + len;
        let span = parse_span(&format!("{start}-{end}"));
        prop_assert_eq!(span.start, Some(start));
        prop_assert_eq!(span.end, Some(end));
        prop_assert_eq!(
            cricstats_transform::career_length(span.start, span.end),
            Some(len)
        );
    }

    #[test]
    fn name_normalization_is_idempotent(name in "[A-Za-z *\u{a0}]{0,24}") {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once.clone());
        prop_assert!(!once.contains('*'));
        prop_assert!(!once.contains('\u{a0}'), "normalized name contains U+00A0: {:?}", once);
    }
}
