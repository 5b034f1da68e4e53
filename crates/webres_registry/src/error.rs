//! Error types for the resource registry.

use thiserror::Error;

/// Error parsing a resource attribute from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Not `ltr` or `rtl`.
    #[error("invalid direction '{0}': expected 'ltr' or 'rtl'")]
    InvalidDirection(String),

    /// Not one of the known script positions.
    #[error("invalid script position '{0}': expected head-start, head-end, body-start or body-end")]
    InvalidPosition(String),

    /// Not a valid `crossorigin` attribute value.
    #[error("invalid crossorigin '{0}': expected 'anonymous' or 'use-credentials'")]
    InvalidCrossOrigin(String),
}

/// Lowercases and maps `_` to `-` so `HEAD_END`, `head-end` and `Head_End`
/// all parse the same way.
pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase().replace('_', "-")
}
