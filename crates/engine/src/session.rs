use quiz_core::model::{CharacterId, Question, Stage, VocabularyEntry};

/// Correct answers needed to clear a level.
pub const WIN_SCORE: u32 = 10;

/// Lives a session starts with.
pub const STARTING_LIVES: u32 = 3;

//
// ─── SESSION END ───────────────────────────────────────────────────────────────
//

/// Terminal result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Reached [`WIN_SCORE`] correct answers.
    Win,
    /// Ran out of lives.
    Loss,
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// In-memory state of one play-through of a level.
///
/// Created by the engine at session start, mutated only by the
/// answer-evaluation transition, and discarded on reset. Consumers read it
/// through the accessors; there is no way to mutate it from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    level: u32,
    questions_answered: u32,
    correct_count: u32,
    life: u32,
    character: CharacterId,
    stage: Stage,
    missed_entries: Vec<VocabularyEntry>,
}

impl SessionState {
    pub(crate) fn new(level: u32, character: CharacterId) -> Self {
        Self {
            level,
            questions_answered: 0,
            correct_count: 0,
            life: STARTING_LIVES,
            character,
            stage: Stage::default(),
            missed_entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Answers evaluated so far, terminal one included. A perfect run
    /// finishes at 10/10, never 10/9.
    #[must_use]
    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Remaining lives, 0-3.
    #[must_use]
    pub fn life(&self) -> u32 {
        self.life
    }

    /// Character drawn at session start; stable for the session's lifetime.
    #[must_use]
    pub fn character(&self) -> CharacterId {
        self.character
    }

    /// Visual progression, advanced once per correct answer, capped at 3.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Entries answered wrong, in miss order.
    #[must_use]
    pub fn missed_entries(&self) -> &[VocabularyEntry] {
        &self.missed_entries
    }

    /// Applies one evaluated answer and reports whether it ended the
    /// session.
    ///
    /// The caller guarantees the session is still live (life > 0, score
    /// below [`WIN_SCORE`]) when this runs.
    pub(crate) fn apply_answer(
        &mut self,
        correct: bool,
        target: &VocabularyEntry,
    ) -> Option<SessionEnd> {
        self.questions_answered += 1;

        if correct {
            self.correct_count += 1;
            self.stage.advance();
            if self.correct_count == WIN_SCORE {
                return Some(SessionEnd::Win);
            }
        } else {
            self.life = self.life.saturating_sub(1);
            self.missed_entries.push(target.clone());
            if self.life == 0 {
                return Some(SessionEnd::Loss);
            }
        }

        None
    }
}

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the selected option was the correct one.
    pub correct: bool,
    /// Set when this answer ended the session.
    pub ended: Option<SessionEnd>,
    /// Follow-up question, present exactly when the session continues.
    pub next_question: Option<Question>,
}

impl AnswerOutcome {
    /// Returns true when this answer ended the session.
    #[must_use]
    pub fn session_over(&self) -> bool {
        self.ended.is_some()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_entry(term: &str) -> VocabularyEntry {
        VocabularyEntry::new(term, format!("def-{term}"), 1).unwrap()
    }

    fn build_state() -> SessionState {
        SessionState::new(1, CharacterId::new(0))
    }

    #[test]
    fn starts_with_initial_values() {
        let state = build_state();
        assert_eq!(state.level(), 1);
        assert_eq!(state.questions_answered(), 0);
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.life(), STARTING_LIVES);
        assert_eq!(state.stage().value(), 0);
        assert!(state.missed_entries().is_empty());
    }

    #[test]
    fn tenth_correct_answer_wins() {
        let mut state = build_state();
        let entry = build_entry("dog");

        for expected in 1..WIN_SCORE {
            assert_eq!(state.apply_answer(true, &entry), None);
            assert_eq!(state.correct_count(), expected);
        }
        assert_eq!(state.apply_answer(true, &entry), Some(SessionEnd::Win));
        assert_eq!(state.correct_count(), WIN_SCORE);
        assert_eq!(state.questions_answered(), WIN_SCORE);
        assert_eq!(state.life(), STARTING_LIVES);
    }

    #[test]
    fn third_miss_loses_and_records_misses_in_order() {
        let mut state = build_state();
        let first = build_entry("dog");
        let second = build_entry("cat");
        let third = build_entry("bird");

        assert_eq!(state.apply_answer(false, &first), None);
        assert_eq!(state.life(), 2);
        assert_eq!(state.apply_answer(false, &second), None);
        assert_eq!(state.life(), 1);
        assert_eq!(state.apply_answer(false, &third), Some(SessionEnd::Loss));
        assert_eq!(state.life(), 0);

        let missed: Vec<&str> = state.missed_entries().iter().map(|e| e.term()).collect();
        assert_eq!(missed, ["dog", "cat", "bird"]);
    }

    #[test]
    fn stage_advances_per_correct_answer_and_caps() {
        let mut state = build_state();
        let entry = build_entry("dog");

        let mut previous = state.stage().value();
        for _ in 0..5 {
            state.apply_answer(true, &entry);
            let current = state.stage().value();
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(state.stage().value(), 3);

        // misses never move the stage
        state.apply_answer(false, &entry);
        assert_eq!(state.stage().value(), 3);
    }

    #[test]
    fn correct_count_never_exceeds_questions_answered() {
        let mut state = build_state();
        let entry = build_entry("dog");

        for i in 0..6 {
            state.apply_answer(i % 2 == 0, &entry);
            assert!(state.correct_count() <= state.questions_answered());
        }
        assert_eq!(state.questions_answered(), 6);
        assert_eq!(state.correct_count(), 3);
    }
}
