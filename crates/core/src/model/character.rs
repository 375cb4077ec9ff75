use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Number of character slots in each level band.
pub const CHARACTERS_PER_LEVEL: u32 = 3;

/// Highest stage a character reaches within a session.
pub const MAX_STAGE: u8 = 3;

/// Fixed roster, three names per level band for levels 1-5.
const ROSTER: [&str; 15] = [
    "Alice", "Bella", "Chloe", // level 1
    "Diana", "Emma", "Fiona", // level 2
    "Grace", "Hannah", "Iris", // level 3
    "Julia", "Karen", "Luna", // level 4
    "Mia", "Nina", "Olivia", // level 5
];

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StageError {
    #[error("invalid stage value: {0}")]
    InvalidStage(u8),
}

//
// ─── CHARACTER ID ──────────────────────────────────────────────────────────────
//

/// Flat identifier for a character: `(level - 1) * 3 + slot`.
///
/// The id is drawn once at session start and stays stable for the
/// session's lifetime; visual progression is the separate [`Stage`] axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId(u32);

impl CharacterId {
    /// Creates a `CharacterId` from its flat index.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Picks one of the level's three character slots uniformly at random.
    #[must_use]
    pub fn random(level: u32, rng: &mut impl Rng) -> Self {
        let slot = rng.random_range(0..CHARACTERS_PER_LEVEL);
        Self((level.saturating_sub(1)) * CHARACTERS_PER_LEVEL + slot)
    }

    /// Returns the underlying flat index.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Level band this character belongs to.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.0 / CHARACTERS_PER_LEVEL + 1
    }

    /// Slot within the level band (0-2).
    #[must_use]
    pub fn slot(&self) -> u32 {
        self.0 % CHARACTERS_PER_LEVEL
    }

    /// Character name, for the shipped bands (levels 1-5).
    ///
    /// Returns `None` for ids outside the roster.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        ROSTER.get(self.0 as usize).copied()
    }

    /// File stem + extension for the character's image at the given stage,
    /// e.g. `level1_char2_state1_5.jpg`.
    ///
    /// Pure name mapping; where the file lives is the caller's concern.
    #[must_use]
    pub fn image_file_name(&self, stage: Stage) -> String {
        let ext = if stage.value() == 0 { "png" } else { "jpg" };
        format!(
            "level{}_char{}_{}.{}",
            self.level(),
            self.slot(),
            stage.asset_key(),
            ext
        )
    }
}

impl fmt::Debug for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharacterId({})", self.0)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── STAGE ─────────────────────────────────────────────────────────────────────
//

/// Visual progression indicator, 0-3, advanced on each correct answer.
///
/// Monotonically non-decreasing within a session and capped at
/// [`MAX_STAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Stage(u8);

impl Stage {
    /// Converts a numeric stage (0-3) to a `Stage`.
    ///
    /// # Errors
    ///
    /// Returns `StageError::InvalidStage` if the value exceeds [`MAX_STAGE`].
    pub fn from_u8(value: u8) -> Result<Self, StageError> {
        if value > MAX_STAGE {
            return Err(StageError::InvalidStage(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric stage value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Advances by one, saturating at [`MAX_STAGE`].
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1).min(MAX_STAGE);
    }

    /// Asset key this stage maps to.
    #[must_use]
    pub fn asset_key(&self) -> &'static str {
        match self.0 {
            0 => "state0",
            1 => "state1",
            2 => "state1_5",
            _ => "state2",
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
