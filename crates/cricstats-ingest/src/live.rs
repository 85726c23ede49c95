use std::path::Path;

use cricstats_model::LiveFeed;
use tracing::info;

use crate::error::{IngestError, Result};

/// Reads a saved live-score provider response.
///
/// # Errors
///
/// Fails when the file is missing, unreadable, or not a feed document.
pub fn read_live_feed(path: &Path) -> Result<LiveFeed> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let feed: LiveFeed = serde_json::from_str(&contents).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), matches = feed.data.len(), "loaded live-score document");
    Ok(feed)
}
