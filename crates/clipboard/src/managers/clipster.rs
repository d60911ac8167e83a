use crate::process;
use crate::ClipboardManager;
use anyhow::{Context, Result};

const BIN: &str = "clipster";

pub struct Clipster;

impl ClipboardManager for Clipster {
    fn name(&self) -> &'static str {
        "Clipster"
    }

    fn can_start(&self) -> bool {
        process::is_installed(BIN)
    }

    // Clipster has no off switch.
    fn is_enabled(&self) -> bool {
        true
    }

    fn is_running(&self) -> bool {
        process::process_running("clipster -d", true)
    }

    fn get_history(&self) -> Result<Vec<String>> {
        // -n 0: every entry, -0: NUL-delimited
        let raw = process::output(BIN, &["-o", "-n", "0", "-0"])
            .context("Failed to read Clipster history")?;
        Ok(process::split_nul(&raw))
    }

    fn supports_add(&self) -> bool {
        true
    }

    fn add(&self, text: &str) -> Result<()> {
        process::output_with_stdin(BIN, &["-c"], text)?;
        Ok(())
    }

    fn start(&self) -> Result<()> {
        process::spawn_detached(BIN, &["-d"])?;
        Ok(())
    }
}
