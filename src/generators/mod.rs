// src/generators/mod.rs
mod memorable;
mod random;

pub use memorable::generate_memorable;
pub use random::generate_random;

use rand::{thread_rng, Rng};
use thiserror::Error;

use crate::models::{GenerationConfig, GenerationMode};
use crate::words::{BuiltinWords, WordSource, WordsError};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(
        "Word count must be between {min} and {max}, got {got}",
        min = GenerationConfig::MIN_WORDS,
        max = GenerationConfig::MAX_WORDS
    )]
    WordCountOutOfRange { got: usize },

    #[error(
        "Password length must be between {min} and {max}, got {got}",
        min = GenerationConfig::MIN_LENGTH,
        max = GenerationConfig::MAX_LENGTH
    )]
    LengthOutOfRange { got: usize },

    #[error("At least one character type must be included")]
    EmptyAlphabet,

    #[error("Word list error: {0}")]
    Words(#[from] WordsError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Dispatches generation to the strategy selected in the config.
pub struct Generator {
    words: Box<dyn WordSource>,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            words: Box::new(BuiltinWords),
        }
    }

    pub fn with_source(words: Box<dyn WordSource>) -> Self {
        Self { words }
    }

    pub fn generate(&self, config: &GenerationConfig) -> Result<String> {
        self.generate_with(config, &mut thread_rng())
    }

    pub fn generate_with<R: Rng>(&self, config: &GenerationConfig, rng: &mut R) -> Result<String> {
        match config.mode {
            GenerationMode::Memorable => generate_memorable(config, rng, self.words.as_ref()),
            GenerationMode::Random => generate_random(config, rng),
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
