// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a memorable word-based password
    Memorable {
        /// Number of words (3-8)
        #[arg(long, short = 'w')]
        words: Option<usize>,
    },

    /// Generate a random character password
    Random {
        /// Password length (8-32)
        #[arg(long, short = 'l')]
        length: Option<usize>,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,
    },
}
