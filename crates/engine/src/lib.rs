#![forbid(unsafe_code)]

pub mod error;
pub mod flow;
pub mod game;
pub mod session;

pub use error::EngineError;
pub use flow::{GameFlow, Screen};
pub use game::Game;
pub use session::{AnswerOutcome, SessionEnd, SessionState, STARTING_LIVES, WIN_SCORE};
