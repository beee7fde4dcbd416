// src/generators/random.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::{GenerateError, Result};
use crate::models::GenerationConfig;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+";

/// Draws `char_length` characters uniformly from the enabled classes.
pub fn generate_random<R: Rng>(config: &GenerationConfig, rng: &mut R) -> Result<String> {
    let length = config.char_length;
    if !(GenerationConfig::MIN_LENGTH..=GenerationConfig::MAX_LENGTH).contains(&length) {
        return Err(GenerateError::LengthOutOfRange { got: length });
    }

    // Class order is fixed so the same seed always yields the same password.
    let mut chars: Vec<u8> = Vec::new();
    if config.use_lowercase {
        chars.extend(LOWERCASE);
    }
    if config.use_uppercase {
        chars.extend(UPPERCASE);
    }
    if config.use_digits {
        chars.extend(DIGITS);
    }
    if config.use_special {
        chars.extend(SPECIAL);
    }

    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let dist = Uniform::from(0..chars.len());
    Ok((0..length).map(|_| chars[dist.sample(rng)] as char).collect())
}
