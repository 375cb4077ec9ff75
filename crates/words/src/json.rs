//! JSON word-list parsing.
//!
//! The on-disk format is a JSON array of `{ "word", "meaning", "level" }`
//! objects; a top-level `{ "words": [...] }` wrapper is also accepted, since
//! both shapes exist in the wild.

use serde::Deserialize;
use std::path::Path;

use quiz_core::model::VocabularyEntry;

use crate::provider::{ProviderError, WordProvider};

#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    Bare(Vec<VocabularyEntry>),
    Wrapped { words: Vec<VocabularyEntry> },
}

/// Parses a word list from JSON and validates every entry.
///
/// # Errors
///
/// Returns `ProviderError::Malformed` on a JSON shape mismatch and
/// `ProviderError::InvalidEntry` for the first entry failing validation.
pub fn parse_words(json: &str) -> Result<Vec<VocabularyEntry>, ProviderError> {
    let entries = match serde_json::from_str::<WordFile>(json)? {
        WordFile::Bare(entries) | WordFile::Wrapped { words: entries } => entries,
    };

    for (index, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|source| ProviderError::InvalidEntry { index, source })?;
    }

    Ok(entries)
}

/// Provider backed by a JSON word-list file, loaded once at construction.
///
/// No caching beyond the initial load, no reload: to pick up a changed
/// file, the caller builds a new provider.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    entries: Vec<VocabularyEntry>,
}

impl JsonFileProvider {
    /// Reads and validates the word list at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Io` if the file cannot be read, or the
    /// parse/validation errors of [`parse_words`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self {
            entries: parse_words(&json)?,
        })
    }

    /// Total number of loaded entries across all levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordProvider for JsonFileProvider {
    fn words_for_level(&self, level: u32) -> Result<Vec<VocabularyEntry>, ProviderError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.level() == level)
            .cloned()
            .collect())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
