use crate::commit::commit;
use crate::filter::{budget, matching_entries};
use crate::selector::{ensure_status, select, StartupPoll};
use clipdeck_clipboard::{ClipboardManager, ClipboardProvider};
use clipdeck_core::{ClipdeckError, CommitMethod, Preferences, ResultItem};

pub const HISTORY_EMPTY: &str = "Clipboard history is empty";
pub const NO_MATCHES: &str = "No matches in clipboard history";
pub const LOAD_FAILED: &str = "Could not load clipboard history";

fn start_failed(name: &str) -> String {
    format!(
        "Could not start {}. Please make sure you have it on your system and that it is not disabled.",
        name
    )
}

/// Everything one query evaluation needs. Built per query and then dropped.
pub struct QueryContext<'a> {
    pub query: String,
    pub max_lines: usize,
    pub manager: &'a dyn ClipboardManager,
}

/// Answers host queries against whichever manager the preferences point at.
///
/// The only state kept between queries is the fixed manager list; the active
/// manager is chosen again for every query and every selection.
pub struct ClipboardSession {
    managers: Vec<Box<dyn ClipboardManager>>,
    preferences: Preferences,
    writer: Box<dyn ClipboardProvider>,
    startup_poll: StartupPoll,
}

impl ClipboardSession {
    pub fn new(
        managers: Vec<Box<dyn ClipboardManager>>,
        preferences: Preferences,
        writer: Box<dyn ClipboardProvider>,
    ) -> Self {
        Self {
            managers,
            preferences,
            writer,
            startup_poll: StartupPoll::default(),
        }
    }

    pub fn with_startup_poll(mut self, poll: StartupPoll) -> Self {
        self.startup_poll = poll;
        self
    }

    pub fn managers(&self) -> &[Box<dyn ClipboardManager>] {
        &self.managers
    }

    /// Selects and readies the manager for one query. The error is the status
    /// message to show.
    fn context(&self, query: String) -> Result<QueryContext<'_>, String> {
        let requested = self.preferences.manager.as_str();
        let manager = select(requested, &self.managers).map_err(|e| {
            tracing::error!("{}", e);
            match e {
                ClipdeckError::NoBackendAvailable => start_failed("a clipboard manager"),
                _ => start_failed(requested),
            }
        })?;

        if !ensure_status(manager, self.startup_poll) {
            return Err(start_failed(manager.name()));
        }

        Ok(QueryContext {
            query,
            max_lines: self.preferences.max_lines,
            manager,
        })
    }

    /// Results for the text typed so far. Either a list of entries or a single
    /// status row, never both.
    pub fn on_query(&self, argument: Option<&str>) -> Vec<ResultItem> {
        let query = argument.unwrap_or_default().to_lowercase();

        let context = match self.context(query) {
            Ok(context) => context,
            Err(message) => return vec![ResultItem::status(message)],
        };
        tracing::debug!(
            "Query {:?} against {} (max_lines={})",
            context.query,
            context.manager.name(),
            context.max_lines
        );

        let history = match context.manager.get_history() {
            Ok(history) => history,
            Err(e) => {
                let err = ClipdeckError::Retrieval {
                    manager: context.manager.name().to_string(),
                    reason: format!("{:#}", e),
                };
                tracing::error!("{}", err);
                return vec![ResultItem::status(LOAD_FAILED)];
            }
        };

        let matches = matching_entries(&history, &context.query, context.max_lines);
        if matches.is_empty() {
            let message = if context.query.is_empty() { HISTORY_EMPTY } else { NO_MATCHES };
            return vec![ResultItem::status(message)];
        }

        budget(&matches, &context.query, context.max_lines)
            .into_iter()
            .map(|result| ResultItem::entry(result.label, result.payload, context.manager.name()))
            .collect()
    }

    /// Commits a selected entry.
    ///
    /// `source` is the manager named on the result row, i.e. the one whose
    /// history the entry was shown from; it is resolved by exact name with no
    /// probing. Without it the preferences decide, as for a query.
    pub fn on_enter(&self, text: &str, source: Option<&str>) -> Result<CommitMethod, ClipdeckError> {
        let requested = source.unwrap_or(self.preferences.manager.as_str());
        let manager = select(requested, &self.managers)?;
        commit(text, manager, self.preferences.hook(), self.writer.as_ref())
    }
}
