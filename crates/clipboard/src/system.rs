use crate::ClipboardProvider;
use anyhow::{Context, Result};
use arboard::Clipboard;

pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("System clipboard unavailable")?;
        clipboard
            .set_text(text)
            .context("Failed to write clipboard text")?;
        tracing::debug!("Wrote {} chars to the system clipboard", text.len());
        Ok(())
    }
}

