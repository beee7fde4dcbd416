// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod clipboard;
pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print the result as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Copy the generated password to the clipboard
    #[arg(long, short = 'c', global = true)]
    pub copy: bool,

    /// Word list file for memorable passwords, one lowercase word per line
    #[arg(long, env = "PASSFORGE_WORDLIST", global = true)]
    pub wordlist: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
