//! Document loading errors.

use thiserror::Error;

/// A required data document could not be fetched, decoded or validated.
///
/// Every variant carries the relative path that was requested.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load `{path}`")]
    Fetch {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load `{path}`: status {status}")]
    Status { path: String, status: u16 },

    #[error("failed to decode `{path}`")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record in `{path}`: {reason}")]
    Invalid { path: String, reason: String },
}

impl LoadError {
    /// The document path this error is about.
    pub fn path(&self) -> &str {
        match self {
            Self::Fetch { path, .. }
            | Self::Status { path, .. }
            | Self::Decode { path, .. }
            | Self::Invalid { path, .. } => path,
        }
    }
}
