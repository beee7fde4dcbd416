// src/main.rs
use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod words;

use crate::cli::Args;
use crate::core::config::Config;
use crate::generators::Generator;
use crate::words::FileWords;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config).context("failed to initialize logging")?;

    log::info!("🔐 Starting PassForge - password generator");
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let generator = match args.wordlist.as_ref().or(config.wordlist_path.as_ref()) {
        Some(path) => {
            let source = FileWords::load(path)
                .with_context(|| format!("failed to load word list {}", path.display()))?;
            log::info!(
                "📚 Loaded {} words from {}",
                source.word_count(),
                path.display()
            );
            Generator::with_source(Box::new(source))
        }
        None => Generator::new(),
    };

    match args.command {
        Some(command) => {
            cli::handlers::run_command(command, args.copy, args.json, &config, &generator)
        }
        None => cli::menu::run_menu(&config, &generator),
    }
}
