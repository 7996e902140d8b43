//! Reading scraped corpus files.
//!
//! The JSON files are produced by external scrapers, so the loader is
//! forgiving: unreadable files and malformed documents become empty corpora,
//! and individual records that do not fit are skipped.

use super::types::{CorpusKind, CorpusRecord, RawRecord};
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, warn};

/// Errors that can occur while reading a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corpus file must contain a JSON array")]
    NotAnArray,

    #[error("{records} records but {embeddings} embeddings")]
    Misaligned { records: usize, embeddings: usize },
}

pub type Result<T> = std::result::Result<T, CorpusError>;

/// Parses a corpus document into records that have usable content.
pub fn parse_records(json: &str) -> Result<Vec<CorpusRecord>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(entries) = value else {
        return Err(CorpusError::NotAnArray);
    };

    let total = entries.len();
    let records: Vec<CorpusRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<RawRecord>(entry) {
            Ok(raw) => raw.into_record(),
            Err(e) => {
                debug!(index = i, error = %e, "Skipping malformed corpus entry");
                None
            }
        })
        .collect();

    if records.len() < total {
        debug!(
            skipped = total - records.len(),
            total,
            "Entries without usable content were excluded"
        );
    }
    Ok(records)
}

/// Reads and parses a corpus file.
pub async fn read_records(path: &Path) -> Result<Vec<CorpusRecord>> {
    let contents = fs::read_to_string(path).await?;
    parse_records(&contents)
}

/// Reads a corpus file, degrading to an empty corpus on any error.
pub async fn load_records(path: &Path, kind: CorpusKind) -> Vec<CorpusRecord> {
    match read_records(path).await {
        Ok(records) => {
            info!(corpus = %kind, path = %path.display(), count = records.len(), "Loaded corpus records");
            records
        }
        Err(e) => {
            warn!(
                corpus = %kind,
                path = %path.display(),
                error = %e,
                "Could not load corpus; it will be empty"
            );
            Vec::new()
        }
    }
}
