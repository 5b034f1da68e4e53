//! Error types for rendering.
//!
//! Running out of things to render is never an error: those outcomes are
//! reported through [`RenderOutcome`](crate::RenderOutcome). Only failures of
//! the collaborators (the output sink and URL decoration) surface here.

use thiserror::Error;

/// Errors that abort a render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the underlying output failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A resource URI could not be turned into a URL.
    #[error("malformed uri '{uri}': {reason}")]
    MalformedUri {
        /// The offending URI.
        uri: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A legacy conditional comment expression would break out of its
    /// comment.
    #[error("malformed conditional comment expression '{0}'")]
    MalformedCondition(String),

    /// A sink-specific failure.
    #[error("sink error: {0}")]
    Sink(String),
}

impl RenderError {
    /// Creates a [`MalformedUri`](Self::MalformedUri).
    pub fn malformed_uri(uri: impl Into<String>, reason: impl core::fmt::Display) -> Self {
        Self::MalformedUri {
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a [`Sink`](Self::Sink).
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
