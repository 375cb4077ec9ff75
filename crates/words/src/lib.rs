#![forbid(unsafe_code)]

pub mod json;
pub mod provider;

pub use json::{parse_words, JsonFileProvider};
pub use provider::{InMemoryProvider, ProviderError, WordProvider};
