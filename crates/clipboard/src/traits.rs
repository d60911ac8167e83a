use anyhow::{bail, Result};

/// A clipboard manager that owns a clipboard history.
pub trait ClipboardManager: Send + Sync {
    /// Name used to pin this manager in the preferences.
    fn name(&self) -> &'static str;

    /// The manager's program is installed. Never fails, only reports false.
    fn can_start(&self) -> bool;
    fn is_enabled(&self) -> bool;
    fn is_running(&self) -> bool;

    /// History entries, most recent first.
    fn get_history(&self) -> Result<Vec<String>>;

    /// Whether `add` writes into the manager's own history.
    fn supports_add(&self) -> bool {
        false
    }

    fn add(&self, _text: &str) -> Result<()> {
        bail!("{} has no add command", self.name())
    }

    /// Turns clipboard tracking on.
    fn enable(&self) -> Result<()> {
        Ok(())
    }

    /// Launches the manager's daemon without waiting for it.
    fn start(&self) -> Result<()> {
        Ok(())
    }
}

/// Generic access to the system clipboard, used when a manager has no `add`.
pub trait ClipboardProvider {
    fn set_text(&self, text: &str) -> Result<()>;
}
