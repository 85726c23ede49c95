//! Match date parsing.
//!
//! Results tables carry dates in whatever format the scraper that built them
//! used. Slash dates are read month-first and fall back to day-first when the
//! first field cannot be a month.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Date formats tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d-%b-%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parsed match date. `year` may be known without a full `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchDate {
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
}

impl MatchDate {
    fn from_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            year: Some(date.year()),
        }
    }
}

/// Parses a match date; unrecognised text yields an all-unknown result.
pub fn parse_match_date(value: &str) -> MatchDate {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return MatchDate::default();
    }
    if let Some(date) = try_parse_date(trimmed) {
        return MatchDate::from_date(date);
    }
    if let Some(datetime) = try_parse_datetime(trimmed) {
        return MatchDate::from_date(datetime.date());
    }
    if trimmed.len() == 4 && trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return MatchDate {
            date: None,
            year: trimmed.parse().ok(),
        };
    }
    MatchDate::default()
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
