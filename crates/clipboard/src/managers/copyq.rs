use crate::process;
use crate::ClipboardManager;
use anyhow::{Context, Result};

const BIN: &str = "copyq";

// Prints every item of the current tab followed by a NUL byte.
const HISTORY_SCRIPT: &str = r"for (var i = 0; i < size(); ++i) { print(str(read(i))); print('\0'); }";

pub struct CopyQ;

impl ClipboardManager for CopyQ {
    fn name(&self) -> &'static str {
        "CopyQ"
    }

    fn can_start(&self) -> bool {
        process::is_installed(BIN)
    }

    fn is_enabled(&self) -> bool {
        process::output(BIN, &["monitoring"])
            .map(|out| out.trim() == "true")
            .unwrap_or(false)
    }

    fn is_running(&self) -> bool {
        process::process_running(BIN, false)
    }

    fn get_history(&self) -> Result<Vec<String>> {
        let raw = process::output(BIN, &["eval", "--", HISTORY_SCRIPT])
            .context("Failed to read CopyQ history")?;
        Ok(process::split_nul(&raw))
    }

    fn supports_add(&self) -> bool {
        true
    }

    fn add(&self, text: &str) -> Result<()> {
        // `--` stops CopyQ from expanding escape sequences in the text.
        process::output(BIN, &["add", "--", text])?;
        process::output(BIN, &["select", "0"])?;
        Ok(())
    }

    fn enable(&self) -> Result<()> {
        process::output(BIN, &["enable"])?;
        Ok(())
    }

    fn start(&self) -> Result<()> {
        process::spawn_detached(BIN, &["--start-server"])?;
        Ok(())
    }
}
