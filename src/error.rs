//! Error types for a verification run.
//!
//! Every variant is fatal. The run stops at the first one and the process
//! exits non-zero.

/// Verification errors.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// Connection refused, DNS failure, timeout.
    #[error("{context} request failed: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with something other than the expected status.
    #[error("{context} failed: {status} {body}")]
    UnexpectedStatus {
        context: String,
        status: u16,
        body: String,
    },

    /// Body was not the expected JSON shape, or a required field was absent.
    #[error("{context}: invalid response: {message}")]
    InvalidResponse { context: String, message: String },

    /// A list came back without the identifier just created.
    #[error("{message}")]
    MissingIdentifier {
        message: String,
        id: i64,
        /// Full list response, kept for the diagnostic dump.
        response: Option<serde_json::Value>,
    },

    /// A list that must contain the created entity was empty.
    #[error("No {what} found!")]
    EmptyList { what: &'static str },

    /// Local settings are unusable.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl VerifyError {
    /// Exit code for the CLI. Every failure is reported the same way.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }

    /// HTTP status for status failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
