// src/models.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Memorable,
    Random,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Memorable => write!(f, "memorable"),
            GenerationMode::Random => write!(f, "random"),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub mode: GenerationMode,
    pub word_count: usize,
    pub char_length: usize,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_digits: bool,
    pub use_special: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Memorable,
            word_count: 5,
            char_length: 16,
            use_lowercase: true,
            use_uppercase: true,
            use_digits: true,
            use_special: true,
        }
    }
}

impl GenerationConfig {
    pub const MIN_WORDS: usize = 3;
    pub const MAX_WORDS: usize = 8;
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 32;

    /// Longest dictionary word the memorable strategy will use.
    pub const MAX_WORD_LEN: usize = 8;
}
