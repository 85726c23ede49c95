//! Rankable numeric fields of a [`PlayerRecord`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::player::PlayerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerStat {
    Matches,
    Innings,
    NotOuts,
    Runs,
    HighestScore,
    Average,
    Centuries,
    HalfCenturies,
    Ducks,
    CareerLength,
    CenturyRate,
}

impl PlayerStat {
    pub const ALL: [PlayerStat; 11] = [
        PlayerStat::Matches,
        PlayerStat::Innings,
        PlayerStat::NotOuts,
        PlayerStat::Runs,
        PlayerStat::HighestScore,
        PlayerStat::Average,
        PlayerStat::Centuries,
        PlayerStat::HalfCenturies,
        PlayerStat::Ducks,
        PlayerStat::CareerLength,
        PlayerStat::CenturyRate,
    ];

    /// Field value as `f64`, or `None` when unknown.
    pub fn value(self, record: &PlayerRecord) -> Option<f64> {
        match self {
            PlayerStat::Matches => record.matches.map(f64::from),
            PlayerStat::Innings => record.innings.map(f64::from),
            PlayerStat::NotOuts => record.not_outs.map(f64::from),
            PlayerStat::Runs => record.runs.map(f64::from),
            PlayerStat::HighestScore => record.highest_score.map(f64::from),
            PlayerStat::Average => record.average,
            PlayerStat::Centuries => record.centuries.map(f64::from),
            PlayerStat::HalfCenturies => record.half_centuries.map(f64::from),
            PlayerStat::Ducks => record.ducks.map(f64::from),
            PlayerStat::CareerLength => record.career_length.map(f64::from),
            PlayerStat::CenturyRate => record.century_rate,
        }
    }

    /// Whether rankings on this field only make sense for qualified records.
    pub fn needs_qualification(self) -> bool {
        matches!(self, PlayerStat::Average | PlayerStat::CenturyRate)
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerStat::Matches => "Matches",
            PlayerStat::Innings => "Innings",
            PlayerStat::NotOuts => "Not Outs",
            PlayerStat::Runs => "Runs",
            PlayerStat::HighestScore => "Highest Score",
            PlayerStat::Average => "Average",
            PlayerStat::Centuries => "100s",
            PlayerStat::HalfCenturies => "50s",
            PlayerStat::Ducks => "Ducks",
            PlayerStat::CareerLength => "Career Length",
            PlayerStat::CenturyRate => "Century Rate",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerStat::Matches => "matches",
            PlayerStat::Innings => "innings",
            PlayerStat::NotOuts => "not-outs",
            PlayerStat::Runs => "runs",
            PlayerStat::HighestScore => "highest-score",
            PlayerStat::Average => "average",
            PlayerStat::Centuries => "centuries",
            PlayerStat::HalfCenturies => "half-centuries",
            PlayerStat::Ducks => "ducks",
            PlayerStat::CareerLength => "career-length",
            PlayerStat::CenturyRate => "century-rate",
        }
    }
}

impl fmt::Display for PlayerStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerStat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PlayerStat::ALL
            .iter()
            .copied()
            .find(|stat| stat.as_str() == wanted)
            .ok_or_else(|| format!("unknown player stat: {s}"))
    }
}
