use clipdeck_clipboard::ClipboardManager;
use clipdeck_core::{ClipdeckError, AUTO_MANAGER};
use serde::Serialize;
use std::thread;
use std::time::Duration;

/// Ranking used by Auto selection. Being enabled outweighs being running.
pub fn score(manager: &dyn ClipboardManager) -> u8 {
    2 * u8::from(manager.is_enabled()) + u8::from(manager.is_running())
}

/// Picks the manager for this query.
///
/// "Auto" takes the best-scoring manager that can start; on a tie the one
/// declared later wins. Any other name must match a manager exactly.
pub fn select<'a>(
    requested: &str,
    managers: &'a [Box<dyn ClipboardManager>],
) -> Result<&'a dyn ClipboardManager, ClipdeckError> {
    if requested == AUTO_MANAGER {
        return managers
            .iter()
            .map(|m| &**m)
            .filter(|m| m.can_start())
            .max_by_key(|m| score(*m))
            .ok_or(ClipdeckError::NoBackendAvailable);
    }

    managers
        .iter()
        .map(|m| &**m)
        .find(|m| m.name() == requested)
        .ok_or_else(|| ClipdeckError::UnknownBackend(requested.to_string()))
}

/// How long to wait for a manager's daemon after asking it to start.
#[derive(Debug, Clone, Copy)]
pub struct StartupPoll {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for StartupPoll {
    fn default() -> Self {
        Self {
            attempts: 10,
            interval: Duration::from_millis(100),
        }
    }
}

/// Makes sure `manager` is usable: installed, tracking the clipboard, and running.
/// Tries to enable and start it when it is not.
pub fn ensure_status(manager: &dyn ClipboardManager, poll: StartupPoll) -> bool {
    if !manager.can_start() {
        tracing::warn!("{} is not installed", manager.name());
        return false;
    }

    if !manager.is_enabled() {
        tracing::info!("Enabling {}", manager.name());
        if let Err(e) = manager.enable() {
            tracing::warn!("Failed to enable {}: {:#}", manager.name(), e);
        }
    }

    if !manager.is_running() {
        tracing::info!("Starting {}", manager.name());
        if let Err(e) = manager.start() {
            tracing::warn!("Failed to start {}: {:#}", manager.name(), e);
        }
        for _ in 0..poll.attempts {
            if manager.is_running() {
                break;
            }
            thread::sleep(poll.interval);
        }
    }

    manager.is_enabled() && manager.is_running()
}

/// Probe results for one manager, as shown by `clipdeck managers`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ManagerStatus {
    pub name: &'static str,
    pub can_start: bool,
    pub enabled: bool,
    pub running: bool,
    pub auto_choice: bool,
}

pub fn probe_all(managers: &[Box<dyn ClipboardManager>]) -> Vec<ManagerStatus> {
    let auto = select(AUTO_MANAGER, managers).ok().map(|m| m.name());
    managers
        .iter()
        .map(|m| ManagerStatus {
            name: m.name(),
            can_start: m.can_start(),
            enabled: m.is_enabled(),
            running: m.is_running(),
            auto_choice: auto == Some(m.name()),
        })
        .collect()
}
