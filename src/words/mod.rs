// src/words/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::RngCore;
use thiserror::Error;

static BUILTIN_LIST: &str = include_str!("wordlist.txt");

lazy_static! {
    static ref BUILTIN_WORDS: Vec<&'static str> = BUILTIN_LIST
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
}

#[derive(Error, Debug)]
pub enum WordsError {
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("Word list {} contains no words", .path.display())]
    EmptyList { path: PathBuf },

    #[error("Word list entry '{word}' is not a lowercase word")]
    InvalidWord { word: String },

    #[error("No words of {max_len} characters or fewer in the word list")]
    NoWordsWithinLimit { max_len: usize },
}

pub type Result<T> = std::result::Result<T, WordsError>;

/// Supplies dictionary words for memorable passwords.
///
/// Words are sampled with replacement, so a password may repeat a word.
pub trait WordSource {
    /// Returns `count` words, each at most `max_len` characters long.
    fn next_words(
        &self,
        rng: &mut dyn RngCore,
        count: usize,
        max_len: usize,
    ) -> Result<Vec<String>>;
}

fn sample_pool<S: AsRef<str>>(
    pool: &[S],
    rng: &mut dyn RngCore,
    count: usize,
    max_len: usize,
) -> Result<Vec<String>> {
    let candidates: Vec<&str> = pool
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| word.len() <= max_len)
        .collect();

    if candidates.is_empty() {
        return Err(WordsError::NoWordsWithinLimit { max_len });
    }

    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        let word = candidates
            .choose(rng)
            .expect("candidate pool is not empty");
        words.push((*word).to_string());
    }
    Ok(words)
}

/// Word list embedded in the binary.
pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn next_words(
        &self,
        rng: &mut dyn RngCore,
        count: usize,
        max_len: usize,
    ) -> Result<Vec<String>> {
        sample_pool(&BUILTIN_WORDS, rng, count, max_len)
    }
}

/// Word list loaded from a user-supplied file, one word per line.
pub struct FileWords {
    words: Vec<String>,
}

impl FileWords {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let mut words = Vec::new();
        for line in contents.lines() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(WordsError::InvalidWord {
                    word: word.to_string(),
                });
            }
            words.push(word.to_string());
        }

        if words.is_empty() {
            return Err(WordsError::EmptyList {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { words })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl WordSource for FileWords {
    fn next_words(
        &self,
        rng: &mut dyn RngCore,
        count: usize,
        max_len: usize,
    ) -> Result<Vec<String>> {
        sample_pool(&self.words, rng, count, max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::thread_rng;

    #[test]
    fn builtin_list_is_well_formed() {
        assert!(BUILTIN_WORDS.len() > 100);
        for word in BUILTIN_WORDS.iter() {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected entry: {word}"
            );
        }
    }

    #[test]
    fn builtin_respects_count_and_max_len() {
        let mut rng = thread_rng();
        let words = BuiltinWords.next_words(&mut rng, 6, 8).unwrap();
        assert_eq!(words.len(), 6);
        for word in &words {
            assert!(word.len() <= 8, "'{word}' is too long");
            assert!(BUILTIN_WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn builtin_filters_to_short_words() {
        let mut rng = thread_rng();
        let words = BuiltinWords.next_words(&mut rng, 20, 3).unwrap();
        for word in &words {
            assert!(word.len() <= 3, "'{word}' is too long");
        }
    }

    #[test]
    fn builtin_errors_when_no_word_fits() {
        let mut rng = thread_rng();
        let result = BuiltinWords.next_words(&mut rng, 3, 2);
        assert!(matches!(
            result,
            Err(WordsError::NoWordsWithinLimit { max_len: 2 })
        ));
    }

    #[test]
    fn sample_pool_skips_long_words() {
        let pool = ["apple", "tangerine", "fig"];
        let mut rng = StepRng::new(0, 0);
        let words = sample_pool(&pool, &mut rng, 2, 8).unwrap();
        assert_eq!(words, vec!["apple".to_string(), "apple".to_string()]);
    }

    #[test]
    fn file_words_load_trims_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "apple\n  tiger  \n\ncloud\n").unwrap();

        let source = FileWords::load(&path).unwrap();
        assert_eq!(source.word_count(), 3);

        let mut rng = thread_rng();
        let words = source.next_words(&mut rng, 4, 8).unwrap();
        for word in &words {
            assert!(["apple", "tiger", "cloud"].contains(&word.as_str()));
        }
    }

    #[test]
    fn file_words_load_rejects_non_lowercase_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "apple\nTiger\n").unwrap();

        let result = FileWords::load(&path);
        assert!(matches!(result, Err(WordsError::InvalidWord { word }) if word == "Tiger"));
    }

    #[test]
    fn file_words_load_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "\n  \n").unwrap();

        let result = FileWords::load(&path);
        assert!(matches!(result, Err(WordsError::EmptyList { .. })));
    }

    #[test]
    fn file_words_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let result = FileWords::load(&path);
        assert!(matches!(result, Err(WordsError::Io(_))));
    }
}
