//! Live-score provider document.
//!
//! Mirrors the JSON returned by the current-matches endpoint of the score
//! provider. Only deserialization lives here; fetching is left to callers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveFeed {
    #[serde(default)]
    pub data: Vec<LiveMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "unknown_match_type")]
    pub match_type: String,
    #[serde(default = "unknown_status")]
    pub status: String,
    #[serde(default)]
    pub team_info: Vec<TeamInfo>,
    #[serde(default)]
    pub score: Vec<InningScore>,
}

impl LiveMatch {
    /// Display name of the team at `idx` in `teamInfo`.
    pub fn team(&self, idx: usize) -> Option<&str> {
        self.team_info.get(idx).map(|team| team.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub name: String,
    #[serde(default)]
    pub shortname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InningScore {
    #[serde(default)]
    pub inning: String,
    /// Runs.
    #[serde(default)]
    pub r: u32,
    /// Wickets.
    #[serde(default)]
    pub w: u32,
    /// Overs, e.g. `19.4`.
    #[serde(default)]
    pub o: f64,
}

fn unknown_match_type() -> String {
    "Unknown".to_string()
}

fn unknown_status() -> String {
    "N/A".to_string()
}
