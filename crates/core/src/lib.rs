#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod model;

pub use error::Error;
pub use generator::NO_OPTION_PLACEHOLDER;
