use thiserror::Error;

use crate::model::entry::VocabularyEntry;

/// Number of options every question presents.
pub const OPTION_COUNT: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("expected {OPTION_COUNT} options, got {0}")]
    WrongOptionCount(usize),

    #[error("correct option index {0} out of range")]
    IndexOutOfRange(usize),

    #[error("option at the correct index does not match the target definition")]
    CorrectOptionMismatch,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice question: a target entry, three option texts, and the
/// position of the correct one.
///
/// Created per turn and discarded once answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    target: VocabularyEntry,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Creates a question, validating option count, index range, and that
    /// the option at `correct_index` carries the target's definition.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if any of the three checks fails.
    pub fn new(
        target: VocabularyEntry,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount(options.len()));
        }
        if correct_index >= OPTION_COUNT {
            return Err(QuestionError::IndexOutOfRange(correct_index));
        }
        if options[correct_index] != target.definition() {
            return Err(QuestionError::CorrectOptionMismatch);
        }

        Ok(Self {
            target,
            options,
            correct_index,
        })
    }

    /// Constructor for the generator, which upholds the invariants itself.
    pub(crate) fn from_parts(
        target: VocabularyEntry,
        options: Vec<String>,
        correct_index: usize,
    ) -> Self {
        debug_assert_eq!(options.len(), OPTION_COUNT);
        debug_assert_eq!(options[correct_index], target.definition());
        Self {
            target,
            options,
            correct_index,
        }
    }

    #[must_use]
    pub fn target(&self) -> &VocabularyEntry {
        &self.target
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Returns true when `selected` picks the correct option.
    ///
    /// Out-of-range indices are simply wrong, not an error.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
