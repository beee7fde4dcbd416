// src/cli/clipboard.rs
use anyhow::Result;
use arboard::Clipboard;

pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
