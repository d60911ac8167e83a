use clipdeck_clipboard::{process, ClipboardManager, ClipboardProvider};
use clipdeck_core::{ClipdeckError, CommitMethod};

/// Puts `text` back on the clipboard and fires the copy hook.
///
/// The manager's own add command is preferred so it can reorder its history;
/// otherwise the system clipboard is written directly. Write failures are
/// returned. The hook is never waited on and its failures are only logged.
pub fn commit(
    text: &str,
    manager: &dyn ClipboardManager,
    hook: Option<&str>,
    writer: &dyn ClipboardProvider,
) -> Result<CommitMethod, ClipdeckError> {
    let method = if manager.supports_add() {
        tracing::info!("Adding to clipboard using {}'s add command", manager.name());
        manager
            .add(text)
            .map_err(|e| ClipdeckError::Clipboard(format!("{:#}", e)))?;
        CommitMethod::Manager
    } else {
        tracing::info!("Adding to clipboard using fallback method");
        writer
            .set_text(text)
            .map_err(|e| ClipdeckError::Clipboard(format!("{:#}", e)))?;
        CommitMethod::Fallback
    };

    if let Some(hook) = hook.map(str::trim).filter(|hook| !hook.is_empty()) {
        run_hook(hook);
    }

    Ok(method)
}

fn run_hook(hook: &str) {
    tracing::info!("Running copy hook: {}", hook);
    if let Err(e) = process::spawn_detached("sh", &["-c", hook]) {
        tracing::error!("Copy hook failed: {}", e);
    }
}
