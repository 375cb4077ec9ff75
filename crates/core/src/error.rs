use thiserror::Error;

use crate::model::{EntryError, QuestionError, StageError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Stage(#[from] StageError),
}
