use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;

use quiz_core::generator;
use quiz_core::model::{CharacterId, Question, VocabularyEntry};
use words::WordProvider;

use crate::error::EngineError;
use crate::session::{AnswerOutcome, SessionEnd, SessionState};

/// One running (or just-finished) session.
struct ActiveSession {
    state: SessionState,
    pool: Vec<VocabularyEntry>,
    /// `None` once the session has ended; Win/Loss are absorbing until reset.
    question: Option<Question>,
    ended: Option<SessionEnd>,
}

/// Session engine: owns the word provider, the RNG, and at most one
/// session at a time.
///
/// The state machine is `Idle → Active → {Win | Loss} → Idle`. `Active` is
/// entered only via [`Game::start`]; the terminal states keep the final
/// [`SessionState`] readable until [`Game::reset`].
pub struct Game {
    provider: Arc<dyn WordProvider>,
    rng: StdRng,
    session: Option<ActiveSession>,
}

impl Game {
    /// Creates an engine with an entropy-seeded RNG.
    #[must_use]
    pub fn new(provider: Arc<dyn WordProvider>) -> Self {
        Self {
            provider,
            rng: StdRng::from_os_rng(),
            session: None,
        }
    }

    /// Creates an engine with a seeded RNG for reproducible runs.
    #[must_use]
    pub fn with_seed(provider: Arc<dyn WordProvider>, seed: u64) -> Self {
        Self {
            provider,
            rng: StdRng::seed_from_u64(seed),
            session: None,
        }
    }

    /// Starts a session at `level`, replacing any previous one.
    ///
    /// Draws the level's pool from the provider, validates it, picks the
    /// session character, and generates the first question.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidLevel` for level 0,
    /// `EngineError::EmptyPool` when the provider has no words for the
    /// level, `EngineError::ForeignEntry` when a pool entry is tagged with
    /// a different level, and propagates provider failures. On error no
    /// session is started and any previous session is left untouched.
    pub fn start(&mut self, level: u32) -> Result<Question, EngineError> {
        if level == 0 {
            return Err(EngineError::InvalidLevel { level });
        }

        let pool = self.provider.words_for_level(level)?;
        if pool.is_empty() {
            return Err(EngineError::EmptyPool { level });
        }
        for entry in &pool {
            if entry.level() != level {
                return Err(EngineError::ForeignEntry {
                    term: entry.term().to_owned(),
                    expected: level,
                    found: entry.level(),
                });
            }
        }

        let character = CharacterId::random(level, &mut self.rng);
        let state = SessionState::new(level, character);
        let question = draw_question(&pool, &mut self.rng);

        self.session = Some(ActiveSession {
            state,
            pool,
            question: Some(question.clone()),
            ended: None,
        });
        Ok(question)
    }

    /// Evaluates the selected option against the current question.
    ///
    /// On a live session this applies the full transition (score/life/stage
    /// update plus, unless the session ended, the next question) before
    /// returning; a failed call mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoActiveSession` when no session is active or
    /// the session has already ended.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerOutcome, EngineError> {
        let Self { session, rng, .. } = self;
        let Some(active) = session.as_mut() else {
            return Err(EngineError::NoActiveSession);
        };
        let Some(question) = active.question.as_ref() else {
            return Err(EngineError::NoActiveSession);
        };

        let correct = question.is_correct(selected);
        let target = question.target().clone();
        let ended = active.state.apply_answer(correct, &target);

        if let Some(end) = ended {
            active.ended = Some(end);
            active.question = None;
            return Ok(AnswerOutcome {
                correct,
                ended,
                next_question: None,
            });
        }

        let next = draw_question(&active.pool, rng);
        active.question = Some(next.clone());
        Ok(AnswerOutcome {
            correct,
            ended: None,
            next_question: Some(next),
        })
    }

    /// Discards any session state. Idempotent; safe to call from `Idle`.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Snapshot of the session state, also readable after a win or loss.
    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        self.session.as_ref().map(|active| &active.state)
    }

    /// The question awaiting an answer, if the session is live.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().and_then(|active| active.question.as_ref())
    }

    /// Terminal result, once the session has ended.
    #[must_use]
    pub fn ended(&self) -> Option<SessionEnd> {
        self.session.as_ref().and_then(|active| active.ended)
    }

    /// Returns true when no session exists at all.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state())
            .field("ended", &self.ended())
            .finish_non_exhaustive()
    }
}

/// Draws a uniform target from the pool and builds its question.
fn draw_question(pool: &[VocabularyEntry], rng: &mut StdRng) -> Question {
    let target = &pool[rng.random_range(0..pool.len())];
    generator::generate(target, pool, rng)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
