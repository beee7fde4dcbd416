// src/logging/mod.rs
use std::fs::File;
use std::io;

use env_logger::{Builder, Target};

use crate::core::config::Config;

// Logs go to stderr unless LOG_FILE redirects them to a file.
// RUST_LOG overrides the configured level when set.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .parse_default_env();

    if let Some(path) = &config.log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }

    builder.init();
    Ok(())
}
