// src/generators/memorable.rs
use rand::Rng;

use super::{GenerateError, Result};
use crate::models::GenerationConfig;
use crate::words::WordSource;

/// Builds a `Word0-Word1-...` password from `word_count` dictionary words.
///
/// Each word is capitalized and suffixed with a random digit before joining.
pub fn generate_memorable<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
    words: &dyn WordSource,
) -> Result<String> {
    let count = config.word_count;
    if !(GenerationConfig::MIN_WORDS..=GenerationConfig::MAX_WORDS).contains(&count) {
        return Err(GenerateError::WordCountOutOfRange { got: count });
    }

    let picked = words.next_words(rng, count, GenerationConfig::MAX_WORD_LEN)?;

    let mut segments = Vec::with_capacity(count);
    for word in picked {
        let mut segment = capitalize(&word);
        segment.push(rng.gen_range(b'0'..=b'9') as char);
        segments.push(segment);
    }

    Ok(segments.join("-"))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
