//! Error types for Maven coordinate parsing.

use thiserror::Error;

/// Errors that can occur while decoding a Maven coordinate request path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// The path does not match the expected coordinate grammar.
    #[error("malformed coordinate path '{segment}': {reason}")]
    MalformedPath {
        /// The path segment that failed to parse.
        segment: String,
        /// Why the segment was rejected.
        reason: String,
    },
}

impl CoordinateError {
    /// Creates a `MalformedPath` error for the given segment.
    pub(crate) fn malformed(segment: &str, reason: &str) -> Self {
        Self::MalformedPath {
            segment: segment.to_string(),
            reason: reason.to_string(),
        }
    }
}
