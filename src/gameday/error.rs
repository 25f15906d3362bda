//! Gameday document errors.

use std::path::PathBuf;

/// Errors raised while reading or structurally parsing gameday documents.
#[derive(Debug, thiserror::Error)]
pub enum GamedayError {
    #[error("Document not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML in {document}: {message}")]
    Xml { document: String, message: String },

    #[error("Document {document} has no root element")]
    EmptyDocument { document: String },

    #[error("Missing <{element}> in {document}")]
    MissingElement { document: String, element: String },

    #[error("Invalid game directory name: {0}")]
    InvalidGameId(String),
}

impl GamedayError {
    /// True when the document simply does not exist (e.g. a postponed game).
    pub fn is_not_found(&self) -> bool {
        matches!(self, GamedayError::NotFound { .. })
    }
}
