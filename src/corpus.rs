use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One processed disclosure: its detail URL and the concatenated text of
/// the main page and all attachments. This is the persisted record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub url: String,
    pub content: String,
}

/// The record shape produced by the downstream summarization stage. The
/// core never constructs these; the type pins the contract between the
/// extraction pipeline and any consumer of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub url: String,
    pub summary: String,
}

/// Writes the corpus as a pretty-printed JSON array of records.
pub fn save_corpus(path: &Path, corpus: &[DocumentRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(corpus)?;
    fs::write(path, json)?;
    log::info!("saved {} records to {}", corpus.len(), path.display());
    Ok(())
}

/// Reads a corpus back. Any shape mismatch is fatal.
pub fn load_corpus(path: &Path) -> Result<Vec<DocumentRecord>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
