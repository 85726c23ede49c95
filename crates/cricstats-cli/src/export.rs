//! CSV export of the normalized dataset through Polars.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use cricstats_query::Dataset;
use cricstats_transform::{matches_frame, players_frame};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

/// Writes the normalized player records to `path`. Returns the row count.
pub fn export_players(dataset: &Dataset, path: &Path) -> Result<usize> {
    let mut frame = players_frame(dataset.players()).context("build player frame")?;
    write_csv(&mut frame, path)?;
    info!(path = %path.display(), rows = frame.height(), "exported players");
    Ok(frame.height())
}

/// Writes the normalized match results to `path`. Returns the row count.
pub fn export_matches(dataset: &Dataset, path: &Path) -> Result<usize> {
    let mut frame = matches_frame(dataset.matches()).context("build match frame")?;
    write_csv(&mut frame, path)?;
    info!(path = %path.display(), rows = frame.height(), "exported matches");
    Ok(frame.height())
}

fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(frame)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
