mod character;
mod entry;
mod question;

pub use character::{CharacterId, Stage, StageError, CHARACTERS_PER_LEVEL, MAX_STAGE};
pub use entry::{EntryError, VocabularyEntry};
pub use question::{Question, QuestionError, OPTION_COUNT};
