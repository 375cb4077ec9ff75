use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("term cannot be empty")]
    EmptyTerm,

    #[error("definition cannot be empty")]
    EmptyDefinition,

    #[error("level must be >= 1, got {0}")]
    InvalidLevel(u32),
}

//
// ─── VOCABULARY ENTRY ──────────────────────────────────────────────────────────
//

/// One term/definition/level triple the quiz draws from.
///
/// Immutable once constructed. The serde field names match the on-disk
/// word-list format (`word` / `meaning` / `level`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(rename = "word")]
    term: String,
    #[serde(rename = "meaning")]
    definition: String,
    level: u32,
}

impl VocabularyEntry {
    /// Creates a validated entry.
    ///
    /// Both strings are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `EntryError` if the term or definition is empty after
    /// trimming, or the level is zero.
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        level: u32,
    ) -> Result<Self, EntryError> {
        let term = term.into().trim().to_string();
        if term.is_empty() {
            return Err(EntryError::EmptyTerm);
        }

        let definition = definition.into().trim().to_string();
        if definition.is_empty() {
            return Err(EntryError::EmptyDefinition);
        }

        if level == 0 {
            return Err(EntryError::InvalidLevel(level));
        }

        Ok(Self {
            term,
            definition,
            level,
        })
    }

    /// Re-checks the entry invariants.
    ///
    /// Deserialized entries bypass [`VocabularyEntry::new`], so boundary
    /// code runs this before admitting them into a pool.
    ///
    /// # Errors
    ///
    /// Returns the same `EntryError` values as the constructor.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.term.trim().is_empty() {
            return Err(EntryError::EmptyTerm);
        }
        if self.definition.trim().is_empty() {
            return Err(EntryError::EmptyDefinition);
        }
        if self.level == 0 {
            return Err(EntryError::InvalidLevel(self.level));
        }
        Ok(())
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
