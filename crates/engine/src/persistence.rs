//! Flat-file persistence shared by both stores
//!
//! Every mutation is followed by a whole-file rewrite of the record list
//! as indented JSON. There is no partial update and no journal; a crash
//! between mutation and write loses at most that one mutation.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by loading or saving a data file
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file could not be read or written
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    /// The data file exists but does not parse. Surfaced to the caller,
    /// who decides whether to abort or start over with an empty store.
    #[error("data file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load an ordered record list from `path`.
///
/// A missing or empty file is treated as zero records; malformed content
/// is a hard error.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&contents)?)
}

/// Rewrite `path` with the full record list as indented JSON
pub fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), count = records.len(), "data file rewritten");
    Ok(())
}
