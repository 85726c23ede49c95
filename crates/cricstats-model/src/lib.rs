//! Typed records, column schema and options shared by the cricstats crates.

pub mod error;
pub mod ids;
pub mod live;
pub mod lookup;
pub mod match_result;
pub mod options;
pub mod player;
pub mod schema;
pub mod stat;

pub use error::{Result, SchemaError};
pub use ids::PlayerKey;
pub use live::{InningScore, LiveFeed, LiveMatch, TeamInfo};
pub use lookup::HeaderIndex;
pub use match_result::{MatchResult, TossDecision};
pub use options::QueryOptions;
pub use player::PlayerRecord;
pub use schema::{Column, ColumnLayout, MatchColumn, PlayerColumn, RawRow, SCHEMA_VERSION, Sheet};
pub use stat::PlayerStat;
