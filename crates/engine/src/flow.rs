use quiz_core::model::VocabularyEntry;

use crate::error::EngineError;
use crate::game::Game;
use crate::session::{AnswerOutcome, SessionEnd};

/// The four screens of the game shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
    StageClear,
    GameOver,
}

/// Screen flow over a [`Game`]: `Home → Quiz → {StageClear | GameOver} → Home`.
///
/// Transitions are total: stray calls leave the flow where it is instead of
/// panicking, and both post-game actions route back through `Home`.
#[derive(Debug)]
pub struct GameFlow {
    game: Game,
    screen: Screen,
}

impl GameFlow {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            screen: Screen::Home,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Starts a session at `level` and moves to the quiz screen.
    ///
    /// # Errors
    ///
    /// Propagates [`Game::start`] errors; on failure the flow stays on the
    /// current screen so the caller can surface the message and re-prompt.
    pub fn select_level(&mut self, level: u32) -> Result<(), EngineError> {
        self.game.start(level)?;
        self.screen = Screen::Quiz;
        Ok(())
    }

    /// Submits an answer and advances the screen when the session ends.
    ///
    /// # Errors
    ///
    /// Propagates [`Game::submit_answer`] errors without moving screens.
    pub fn answer(&mut self, selected: usize) -> Result<AnswerOutcome, EngineError> {
        let outcome = self.game.submit_answer(selected)?;
        match outcome.ended {
            Some(SessionEnd::Win) => self.screen = Screen::StageClear,
            Some(SessionEnd::Loss) => self.screen = Screen::GameOver,
            None => {}
        }
        Ok(outcome)
    }

    /// "Retry" from a post-game screen: resets and lands on `Home`.
    pub fn retry(&mut self) {
        self.go_home();
    }

    /// Resets the session and returns to `Home` from anywhere.
    pub fn go_home(&mut self) {
        self.game.reset();
        self.screen = Screen::Home;
    }

    /// Missed entries of the current (or just-ended) session, for the
    /// game-over recap.
    #[must_use]
    pub fn missed_recap(&self) -> &[VocabularyEntry] {
        self.game
            .state()
            .map_or(&[], |state| state.missed_entries())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
