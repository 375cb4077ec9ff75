use thiserror::Error;

use quiz_core::model::{EntryError, VocabularyEntry};

/// Errors surfaced by word providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed word list: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: EntryError,
    },
}

/// Supplier of level-filtered vocabulary pools.
///
/// Implementations own loading and lifecycle; the engine only consumes the
/// returned pool. Every returned entry is valid (non-empty term and
/// definition) and tagged with the requested level. An empty result is legal
/// here; the engine decides whether that is an error for its caller.
pub trait WordProvider: Send + Sync {
    /// Returns the entries tagged with `level`, in load order.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the backing source cannot be read or
    /// contains invalid entries.
    fn words_for_level(&self, level: u32) -> Result<Vec<VocabularyEntry>, ProviderError>;
}

/// Provider over a fixed in-memory list, for tests and embedded pools.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    entries: Vec<VocabularyEntry>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }
}

impl WordProvider for InMemoryProvider {
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
