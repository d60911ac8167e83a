use crate::process;
use crate::ClipboardManager;
use anyhow::{Context, Result};

const BIN: &str = "gpaste-client";
const DAEMON: &str = "gpaste-daemon";
const SCHEMA: &str = "org.gnome.GPaste";

pub struct GPaste;

impl ClipboardManager for GPaste {
    fn name(&self) -> &'static str {
        "GPaste"
    }

    fn can_start(&self) -> bool {
        process::is_installed(BIN)
    }

    fn is_enabled(&self) -> bool {
        process::output("gsettings", &["get", SCHEMA, "track-changes"])
            .map(|out| out.trim() == "true")
            .unwrap_or(false)
    }

    fn is_running(&self) -> bool {
        process::process_running(DAEMON, false)
    }

    fn get_history(&self) -> Result<Vec<String>> {
        let raw = process::output(BIN, &["history", "--raw", "--zero"])
            .context("Failed to read GPaste history")?;
        Ok(process::split_nul(&raw))
    }

    fn supports_add(&self) -> bool {
        true
    }

    fn add(&self, text: &str) -> Result<()> {
        process::output(BIN, &["add", text])?;
        Ok(())
    }

    fn enable(&self) -> Result<()> {
        process::output("gsettings", &["set", SCHEMA, "track-changes", "true"])?;
        Ok(())
    }

    fn start(&self) -> Result<()> {
        process::spawn_detached(BIN, &["start"])?;
        Ok(())
    }
}
