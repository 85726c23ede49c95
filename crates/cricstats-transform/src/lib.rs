//! Record normalization for cricstats.
//!
//! - **normalization**: field parsers that never fail (unparseable input is `None`)
//! - **players** / **matches**: raw row to typed record builders
//! - **derive**: second-pass derived fields (career length, century rate)
//! - **frame**: Polars view of normalized records for export

pub mod derive;
pub mod frame;
pub mod matches;
pub mod normalization;
pub mod players;

pub use derive::{career_length, century_rate, derive_player_fields};
pub use frame::{matches_frame, players_frame};
pub use matches::{build_matches, normalize_match};
pub use normalization::{normalize_name, player_key};
pub use players::{build_players, normalize_player};
