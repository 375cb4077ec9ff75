//! Shared error type for the engine crate.

use thiserror::Error;

use words::ProviderError;

/// Errors emitted by the session engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("no words available for level {level}")]
    EmptyPool { level: u32 },

    #[error("no active session")]
    NoActiveSession,

    #[error("level must be >= 1, got {level}")]
    InvalidLevel { level: u32 },

    #[error("entry '{term}' is tagged level {found}, expected level {expected}")]
    ForeignEntry {
        term: String,
        expected: u32,
        found: u32,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
