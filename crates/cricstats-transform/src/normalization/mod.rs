//! Field parsers for raw spreadsheet text.
//!
//! Every function here is total: malformed input maps to `None` (or
//! [`TossDecision::Unknown`](cricstats_model::TossDecision::Unknown)) and
//! nothing panics or returns an error.
//!
//! - **numeric**: counts and decimals with thousands separators
//! - **name**: player lookup keys
//! - **span**: `START-END` career spans
//! - **toss**: toss decision extraction from free text
//! - **datetime**: match dates in the formats seen in results tables

pub mod datetime;
pub mod name;
pub mod numeric;
pub mod span;
pub mod toss;

pub use datetime::{MatchDate, parse_match_date};
pub use name::{clean_text, normalize_name, player_key};
pub use numeric::{parse_count, parse_decimal, parse_highest_score, strip_thousands};
pub use span::{CareerSpan, parse_span};
pub use toss::parse_toss_decision;
