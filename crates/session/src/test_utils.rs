//! Scriptable managers and clipboard writers for session tests.

use anyhow::{anyhow, Result};
use clipdeck_clipboard::{ClipboardManager, ClipboardProvider};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct FakeManager {
    pub name: &'static str,
    pub can_start: bool,
    pub enabled: AtomicBool,
    pub running: AtomicBool,
    /// Whether `start()` actually brings the fake up
    pub starts: bool,
    pub history: std::result::Result<Vec<String>, String>,
    pub native_add: bool,
    pub added: Arc<Mutex<Vec<String>>>,
    pub history_reads: Arc<AtomicUsize>,
}

impl FakeManager {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            can_start: true,
            enabled: AtomicBool::new(true),
            running: AtomicBool::new(true),
            starts: true,
            history: Ok(Vec::new()),
            native_add: false,
            added: Arc::new(Mutex::new(Vec::new())),
            history_reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn probes(mut self, can_start: bool, enabled: bool, running: bool) -> Self {
        self.can_start = can_start;
        self.enabled = AtomicBool::new(enabled);
        self.running = AtomicBool::new(running);
        self
    }

    pub fn with_history(mut self, items: &[&str]) -> Self {
        self.history = Ok(items.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn failing_history(mut self, reason: &str) -> Self {
        self.history = Err(reason.to_string());
        self
    }

    pub fn with_add(mut self) -> Self {
        self.native_add = true;
        self
    }

    pub fn never_starts(mut self) -> Self {
        self.starts = false;
        self
    }

    pub fn boxed(self) -> Box<dyn ClipboardManager> {
        Box::new(self)
    }
}

impl ClipboardManager for FakeManager {
    fn name(&self) -> &'static str {
        self.name
    }

    fn can_start(&self) -> bool {
        self.can_start
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn get_history(&self) -> Result<Vec<String>> {
        self.history_reads.fetch_add(1, Ordering::SeqCst);
        self.history.clone().map_err(|reason| anyhow!(reason))
    }

    fn supports_add(&self) -> bool {
        self.native_add
    }

    fn add(&self, text: &str) -> Result<()> {
        if !self.native_add {
            return Err(anyhow!("{} has no add command", self.name));
        }
        self.added.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn enable(&self) -> Result<()> {
        self.enabled.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn start(&self) -> Result<()> {
        if self.starts {
            self.running.store(true, Ordering::SeqCst);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    pub written: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ClipboardProvider for FakeClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(anyhow!("no display"));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
