// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::models::{GenerationConfig, GenerationMode};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Generation defaults
    pub default_mode: GenerationMode,
    pub default_word_count: usize,
    pub default_char_length: usize,
    pub default_use_lowercase: bool,
    pub default_use_uppercase: bool,
    pub default_use_digits: bool,
    pub default_use_special: bool,

    // Word list
    pub wordlist_path: Option<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let generation = GenerationConfig::default();
        Self {
            // Generation defaults
            default_mode: generation.mode,
            default_word_count: generation.word_count,
            default_char_length: generation.char_length,
            default_use_lowercase: generation.use_lowercase,
            default_use_uppercase: generation.use_uppercase,
            default_use_digits: generation.use_digits,
            default_use_special: generation.use_special,

            // Word list
            wordlist_path: None,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Generation defaults
        if let Ok(mode) = env::var("PASSFORGE_MODE") {
            match mode.to_lowercase().as_str() {
                "memorable" => config.default_mode = GenerationMode::Memorable,
                "random" => config.default_mode = GenerationMode::Random,
                _ => log::warn!("Unknown generation mode '{}', using memorable", mode),
            }
        }

        if let Ok(val) = env::var("PASSFORGE_WORDS") {
            if let Ok(count) = val.parse::<usize>() {
                if (GenerationConfig::MIN_WORDS..=GenerationConfig::MAX_WORDS).contains(&count) {
                    config.default_word_count = count;
                } else {
                    log::warn!(
                        "PASSFORGE_WORDS={} is out of range, keeping {}",
                        count,
                        config.default_word_count
                    );
                }
            }
        }

        if let Ok(val) = env::var("PASSFORGE_LENGTH") {
            if let Ok(length) = val.parse::<usize>() {
                if (GenerationConfig::MIN_LENGTH..=GenerationConfig::MAX_LENGTH).contains(&length)
                {
                    config.default_char_length = length;
                } else {
                    log::warn!(
                        "PASSFORGE_LENGTH={} is out of range, keeping {}",
                        length,
                        config.default_char_length
                    );
                }
            }
        }

        if let Ok(val) = env::var("PASSFORGE_LOWERCASE") {
            if let Ok(enabled) = val.parse() {
                config.default_use_lowercase = enabled;
            }
        }

        if let Ok(val) = env::var("PASSFORGE_UPPERCASE") {
            if let Ok(enabled) = val.parse() {
                config.default_use_uppercase = enabled;
            }
        }

        if let Ok(val) = env::var("PASSFORGE_DIGITS") {
            if let Ok(enabled) = val.parse() {
                config.default_use_digits = enabled;
            }
        }

        if let Ok(val) = env::var("PASSFORGE_SPECIAL") {
            if let Ok(enabled) = val.parse() {
                config.default_use_special = enabled;
            }
        }

        // Word list
        if let Ok(path) = env::var("PASSFORGE_WORDLIST") {
            config.wordlist_path = Some(PathBuf::from(path));
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    // Starting point for a generation session
    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig {
            mode: self.default_mode,
            word_count: self.default_word_count,
            char_length: self.default_char_length,
            use_lowercase: self.default_use_lowercase,
            use_uppercase: self.default_use_uppercase,
            use_digits: self.default_use_digits,
            use_special: self.default_use_special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "PASSFORGE_MODE",
        "PASSFORGE_WORDS",
        "PASSFORGE_LENGTH",
        "PASSFORGE_LOWERCASE",
        "PASSFORGE_UPPERCASE",
        "PASSFORGE_DIGITS",
        "PASSFORGE_SPECIAL",
        "PASSFORGE_WORDLIST",
        "LOG_LEVEL",
        "LOG_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_environment() {
        clear_env();
        let config = Config::load();
        assert_eq!(config.default_mode, GenerationMode::Memorable);
        assert_eq!(config.default_word_count, 5);
        assert_eq!(config.default_char_length, 16);
        assert!(config.default_use_lowercase);
        assert!(config.default_use_special);
        assert!(config.wordlist_path.is_none());
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn reads_generation_settings_from_environment() {
        clear_env();
        env::set_var("PASSFORGE_MODE", "random");
        env::set_var("PASSFORGE_LENGTH", "24");
        env::set_var("PASSFORGE_SPECIAL", "false");
        let config = Config::load();
        clear_env();

        assert_eq!(config.default_mode, GenerationMode::Random);
        assert_eq!(config.default_char_length, 24);
        assert!(!config.default_use_special);
        assert!(config.default_use_lowercase);
    }

    #[test]
    #[serial]
    fn out_of_range_values_keep_defaults() {
        clear_env();
        env::set_var("PASSFORGE_WORDS", "99");
        env::set_var("PASSFORGE_LENGTH", "4");
        let config = Config::load();
        clear_env();

        assert_eq!(config.default_word_count, 5);
        assert_eq!(config.default_char_length, 16);
    }

    #[test]
    #[serial]
    fn unknown_mode_keeps_default() {
        clear_env();
        env::set_var("PASSFORGE_MODE", "passphrase");
        let config = Config::load();
        clear_env();

        assert_eq!(config.default_mode, GenerationMode::Memorable);
    }

    #[test]
    #[serial]
    fn wordlist_and_logging_settings() {
        clear_env();
        env::set_var("PASSFORGE_WORDLIST", "/tmp/words.txt");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("LOG_FILE", "/tmp/passforge.log");
        let config = Config::load();
        clear_env();

        assert_eq!(config.wordlist_path, Some(PathBuf::from("/tmp/words.txt")));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passforge.log")));
    }

    #[test]
    #[serial]
    fn generation_defaults_mirror_config() {
        clear_env();
        env::set_var("PASSFORGE_MODE", "random");
        env::set_var("PASSFORGE_WORDS", "6");
        let config = Config::load();
        clear_env();

        let defaults = config.generation_defaults();
        assert_eq!(defaults.mode, GenerationMode::Random);
        assert_eq!(defaults.word_count, 6);
        assert_eq!(defaults.char_length, 16);
        assert!(defaults.use_digits);
    }
}
