// src/cli/handlers.rs
use serde::Serialize;

use crate::cli::clipboard;
use crate::cli::commands::CliCommand;
use crate::core::config::Config;
use crate::generators::Generator;
use crate::models::{GenerationConfig, GenerationMode};

#[derive(Serialize)]
struct GenerationResponse {
    /// Whether generation succeeded
    success: bool,
    /// The generated password (only present on success)
    password: Option<String>,
    /// Error message (only present on failure)
    error: Option<String>,
}

// Handler for one-shot CLI commands
pub fn run_command(
    command: CliCommand,
    copy: bool,
    json: bool,
    config: &Config,
    generator: &Generator,
) -> anyhow::Result<()> {
    let options = command_options(&command, config.generation_defaults());
    log::debug!("Generating with options: {:?}", options);

    match generator.generate(&options) {
        Ok(password) => {
            if copy {
                match clipboard::copy(&password) {
                    Ok(()) => eprintln!("📋 Copied to clipboard"),
                    Err(e) => eprintln!("❌ Clipboard unavailable: {}", e),
                }
            }
            if json {
                let response = GenerationResponse {
                    success: true,
                    password: Some(password),
                    error: None,
                };
                println!("{}", serde_json::to_string(&response)?);
            } else {
                println!("{}", password);
            }
            Ok(())
        }
        Err(e) => {
            if json {
                let response = GenerationResponse {
                    success: false,
                    password: None,
                    error: Some(e.to_string()),
                };
                println!("{}", serde_json::to_string(&response)?);
            }
            Err(e.into())
        }
    }
}

// Command line flags layer on top of the configured defaults
fn command_options(command: &CliCommand, mut options: GenerationConfig) -> GenerationConfig {
    match command {
        CliCommand::Memorable { words } => {
            options.mode = GenerationMode::Memorable;
            if let Some(words) = words {
                options.word_count = *words;
            }
        }
        CliCommand::Random {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_special,
        } => {
            options.mode = GenerationMode::Random;
            if let Some(length) = length {
                options.char_length = *length;
            }
            if *no_lowercase {
                options.use_lowercase = false;
            }
            if *no_uppercase {
                options.use_uppercase = false;
            }
            if *no_digits {
                options.use_digits = false;
            }
            if *no_special {
                options.use_special = false;
            }
        }
    }
    options
}
