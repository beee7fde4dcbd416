// src/cli/menu.rs
use console::style;
use inquire::{InquireError, MultiSelect, Select, Text};

use crate::cli::clipboard;
use crate::core::config::Config;
use crate::generators::Generator;
use crate::models::{GenerationConfig, GenerationMode};

// State of an interactive generation session
struct SessionState {
    options: GenerationConfig,
    password: String,
    copied: bool,
}

impl SessionState {
    fn new(options: GenerationConfig, generator: &Generator) -> anyhow::Result<Self> {
        let password = generator.generate(&options)?;
        Ok(Self {
            options,
            password,
            copied: false,
        })
    }

    fn regenerate(&mut self, generator: &Generator) {
        match generator.generate(&self.options) {
            Ok(password) => {
                self.password = password;
                self.copied = false;
            }
            Err(e) => println!("❌ Failed to generate password: {}", e),
        }
    }

    // Every settings change regenerates the password; invalid changes are rolled back
    fn apply<F>(&mut self, generator: &Generator, change: F)
    where
        F: FnOnce(&mut GenerationConfig),
    {
        let previous = self.options.clone();
        change(&mut self.options);
        match generator.generate(&self.options) {
            Ok(password) => {
                self.password = password;
                self.copied = false;
            }
            Err(e) => {
                println!("❌ {}", e);
                self.options = previous;
            }
        }
    }
}

pub fn run_menu(config: &Config, generator: &Generator) -> anyhow::Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║            🔐 PASSFORGE              ║");
    println!("╚══════════════════════════════════════╝");

    let mut state = SessionState::new(config.generation_defaults(), generator)?;

    loop {
        print_password(&state);

        let toggle_label = match state.options.mode {
            GenerationMode::Memorable => "🎲  Switch to random characters",
            GenerationMode::Random => "🧠  Switch to memorable words",
        };
        let size_label = match state.options.mode {
            GenerationMode::Memorable => "🔢  Set word count",
            GenerationMode::Random => "🔢  Set password length",
        };

        let mut options = vec![
            "🔁  Regenerate",
            "📋  Copy to clipboard",
            toggle_label,
            size_label,
        ];
        if state.options.mode == GenerationMode::Random {
            options.push("🔡  Choose character classes");
        }
        options.push("❌  Exit");

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable()
        {
            Ok(selection) => selection,
            Err(InquireError::OperationInterrupted) => None,
            Err(e) => return Err(e.into()),
        };

        match selection {
            Some("🔁  Regenerate") => state.regenerate(generator),
            Some("📋  Copy to clipboard") => match clipboard::copy(&state.password) {
                Ok(()) => {
                    state.copied = true;
                    println!("📋 Password copied to clipboard");
                }
                Err(e) => println!("❌ Clipboard unavailable: {}", e),
            },
            Some(label) if label == toggle_label => {
                state.apply(generator, |options| {
                    options.mode = match options.mode {
                        GenerationMode::Memorable => GenerationMode::Random,
                        GenerationMode::Random => GenerationMode::Memorable,
                    };
                });
            }
            Some(label) if label == size_label => prompt_size(&mut state, generator)?,
            Some("🔡  Choose character classes") => prompt_classes(&mut state, generator)?,
            Some("❌  Exit") | None => {
                println!("👋 Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}

fn print_password(state: &SessionState) {
    println!();
    print!("🔑 {}", style(&state.password).bold().cyan());
    if state.copied {
        print!("  {}", style("📋 copied").dim());
    }
    println!();
    println!("{}", style(describe(&state.options)).dim());
}

fn describe(options: &GenerationConfig) -> String {
    match options.mode {
        GenerationMode::Memorable => {
            format!("mode: memorable | words: {}", options.word_count)
        }
        GenerationMode::Random => {
            let mut classes = Vec::new();
            if options.use_lowercase {
                classes.push("lowercase");
            }
            if options.use_uppercase {
                classes.push("uppercase");
            }
            if options.use_digits {
                classes.push("digits");
            }
            if options.use_special {
                classes.push("special");
            }
            format!(
                "mode: random | length: {} | classes: {}",
                options.char_length,
                classes.join(", ")
            )
        }
    }
}

fn prompt_size(state: &mut SessionState, generator: &Generator) -> anyhow::Result<()> {
    let (label, current) = match state.options.mode {
        GenerationMode::Memorable => ("Number of words (3-8):", state.options.word_count),
        GenerationMode::Random => ("Password length (8-32):", state.options.char_length),
    };

    let input = Text::new(label)
        .with_default(&current.to_string())
        .prompt_skippable()?;

    let input = match input {
        Some(input) => input,
        None => return Ok(()),
    };

    match input.trim().parse::<usize>() {
        Ok(value) => state.apply(generator, |options| match options.mode {
            GenerationMode::Memorable => options.word_count = value,
            GenerationMode::Random => options.char_length = value,
        }),
        Err(_) => println!("❌ Not a number: {}", input),
    }

    Ok(())
}

fn prompt_classes(state: &mut SessionState, generator: &Generator) -> anyhow::Result<()> {
    let classes = vec![
        "Lowercase letters",
        "Uppercase letters",
        "Digits",
        "Special characters",
    ];

    let mut defaults = Vec::new();
    if state.options.use_lowercase {
        defaults.push(0);
    }
    if state.options.use_uppercase {
        defaults.push(1);
    }
    if state.options.use_digits {
        defaults.push(2);
    }
    if state.options.use_special {
        defaults.push(3);
    }

    let selected = MultiSelect::new("Character classes to include:", classes)
        .with_default(&defaults)
        .prompt_skippable()?;

    let selected = match selected {
        Some(selected) => selected,
        None => return Ok(()),
    };

    state.apply(generator, |options| {
        options.use_lowercase = selected.contains(&"Lowercase letters");
        options.use_uppercase = selected.contains(&"Uppercase letters");
        options.use_digits = selected.contains(&"Digits");
        options.use_special = selected.contains(&"Special characters");
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_regenerates_and_clears_copied_flag() {
        let generator = Generator::new();
        let mut state = SessionState::new(GenerationConfig::default(), &generator).unwrap();
        state.copied = true;

        state.apply(&generator, |options| options.mode = GenerationMode::Random);

        assert!(!state.copied);
        assert_eq!(state.options.mode, GenerationMode::Random);
        assert_eq!(state.password.chars().count(), 16);
    }

    #[test]
    fn apply_rolls_back_invalid_change() {
        let generator = Generator::new();
        let mut state = SessionState::new(GenerationConfig::default(), &generator).unwrap();
        let before = state.password.clone();

        state.apply(&generator, |options| options.word_count = 99);

        assert_eq!(state.options.word_count, 5);
        assert_eq!(state.password, before);
    }

    #[test]
    fn regenerate_replaces_password_and_clears_copied_flag() {
        let generator = Generator::new();
        let mut state = SessionState::new(GenerationConfig::default(), &generator).unwrap();
        state.copied = true;

        state.regenerate(&generator);

        assert!(!state.copied);
        assert_eq!(state.password.split('-').count(), 5);
    }

    #[test]
    fn describe_lists_active_settings() {
        let memorable = GenerationConfig::default();
        assert_eq!(describe(&memorable), "mode: memorable | words: 5");

        let random = GenerationConfig {
            mode: GenerationMode::Random,
            use_uppercase: false,
            use_special: false,
            ..GenerationConfig::default()
        };
        assert_eq!(
            describe(&random),
            "mode: random | length: 16 | classes: lowercase, digits"
        );
    }
}
