use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipdeckError {
    #[error("no clipboard manager could be started")]
    NoBackendAvailable,

    #[error("unknown clipboard manager: {0}")]
    UnknownBackend(String),

    #[error("failed to read {manager} history: {reason}")]
    Retrieval { manager: String, reason: String },

    #[error("`{command}` failed: {reason}")]
    Process { command: String, reason: String },

    #[error("failed to write to the clipboard: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed protocol frame: {0}")]
    Json(#[from] serde_json::Error),
}
