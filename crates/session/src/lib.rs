pub mod commit;
pub mod filter;
pub mod format;
pub mod handler;
pub mod selector;

#[cfg(test)]
pub(crate) mod test_utils;

pub use commit::commit;
pub use filter::{budget, filter, line_cost, matching_entries};
pub use format::{format_entry, DisplayResult};
pub use handler::{ClipboardSession, QueryContext};
pub use selector::{ensure_status, probe_all, select, ManagerStatus, StartupPoll};
