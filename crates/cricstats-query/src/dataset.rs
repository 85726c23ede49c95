//! Load-once, read-only collections of normalized records.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use cricstats_ingest::{IngestError, load_match_sheet, load_player_sheet};
use cricstats_model::{MatchResult, PlayerKey, PlayerRecord};
use cricstats_transform::{build_matches, build_players, player_key};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{QueryError, Result};

/// A lookup key carried by more than one player row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateKey {
    pub key: PlayerKey,
    /// Source row indices sharing the key, in source order.
    pub rows: Vec<usize>,
}

/// Normalized player and match records, fixed after construction.
///
/// Lookups by name resolve to the first record (in source order) whose key
/// matches. Later records sharing the key stay in [`Dataset::players`] and
/// still take part in rankings and aggregates.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    players: Vec<PlayerRecord>,
    matches: Vec<MatchResult>,
    by_key: HashMap<PlayerKey, usize>,
    duplicates: Vec<DuplicateKey>,
}

impl Dataset {
    pub fn new(players: Vec<PlayerRecord>, matches: Vec<MatchResult>) -> Self {
        let mut by_key: HashMap<PlayerKey, usize> = HashMap::new();
        let mut seen: HashMap<&PlayerKey, Vec<usize>> = HashMap::new();
        for (pos, record) in players.iter().enumerate() {
            seen.entry(&record.key).or_default().push(record.row_index);
            by_key.entry(record.key.clone()).or_insert(pos);
        }

        let mut duplicates: Vec<DuplicateKey> = seen
            .into_iter()
            .filter(|(_, rows)| rows.len() > 1)
            .map(|(key, rows)| DuplicateKey {
                key: key.clone(),
                rows,
            })
            .collect();
        duplicates.sort_by(|a, b| a.rows[0].cmp(&b.rows[0]));
        for duplicate in &duplicates {
            warn!(
                key = %duplicate.key,
                rows = ?duplicate.rows,
                "player key appears more than once; lookups use the first row"
            );
        }

        Self {
            players,
            matches,
            by_key,
            duplicates,
        }
    }

    /// Reads, normalizes and derives both sources.
    ///
    /// Without a match source the dataset has no match results and the
    /// tournament aggregates are empty.
    ///
    /// # Errors
    ///
    /// Returns the first [`IngestError`] raised while reading either source.
    pub fn load(
        players_path: &Path,
        matches_path: Option<&Path>,
    ) -> std::result::Result<Self, IngestError> {
        let start = Instant::now();
        let player_sheet = load_player_sheet(players_path)?;
        let players = build_players(&player_sheet);
        let matches = match matches_path {
            Some(path) => build_matches(&load_match_sheet(path)?),
            None => Vec::new(),
        };
        let dataset = Self::new(players, matches);
        info!(
            players = dataset.player_count(),
            matches = dataset.match_count(),
            duration_ms = start.elapsed().as_millis(),
            "dataset ready"
        );
        Ok(dataset)
    }

    /// Player records in source order.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Match results in source order.
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Finds a player by name. The query is normalized the same way source
    /// names are, so `"SR Tendulkar*"` and `"sr tendulkar"` both match.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::PlayerNotFound`] when no record carries the key.
    pub fn find_player(&self, name: &str) -> Result<&PlayerRecord> {
        let key = player_key(name);
        if key.is_empty() {
            return Err(QueryError::PlayerNotFound {
                name: name.trim().to_string(),
            });
        }
        self.by_key
            .get(&key)
            .and_then(|&pos| self.players.get(pos))
            .ok_or_else(|| QueryError::PlayerNotFound {
                name: name.trim().to_string(),
            })
    }

    /// Keys carried by more than one record, ordered by first occurrence.
    pub fn duplicate_keys(&self) -> &[DuplicateKey] {
        &self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row: usize, name: &str, runs: u32) -> PlayerRecord {
        let mut record = PlayerRecord::new(row, name, player_key(name));
        record.runs = Some(runs);
        record
    }

    #[test]
    fn lookup_normalizes_the_query() {
        let dataset = Dataset::new(vec![record(0, "SR Tendulkar*", 15_921)], Vec::new());
        let found = dataset.find_player("  sr TENDULKAR ").expect("player");
        assert_eq!(found.runs, Some(15_921));
    }

    #[test]
    fn first_record_wins_lookup() {
        let dataset = Dataset::new(
            vec![record(0, "A Smith", 100), record(1, "a smith*", 200)],
            Vec::new(),
        );
        assert_eq!(dataset.find_player("A Smith").expect("player").runs, Some(100));
        assert_eq!(dataset.player_count(), 2);
        assert_eq!(dataset.duplicate_keys().len(), 1);
        assert_eq!(dataset.duplicate_keys()[0].rows, vec![0, 1]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let dataset = Dataset::new(vec![record(0, "A", 1)], Vec::new());
        assert_eq!(
            dataset.find_player("Z").unwrap_err(),
            QueryError::PlayerNotFound {
                name: "Z".to_string()
            }
        );
        assert!(dataset.find_player("   ").is_err());
    }
}
