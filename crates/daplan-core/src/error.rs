use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DaplanError {
    #[error("page source '{backend}' failed: {reason}")]
    Source { backend: String, reason: String },

    #[error("failed to load gazetteer file {}: {reason}", path.display())]
    Gazetteer { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
