//! Error types for the CurseForge metadata collaborator.

use thiserror::Error;

/// Errors that can occur while querying CurseForge metadata.
///
/// None of these ever reach an HTTP client directly; the server collapses
/// them to an empty 404 and logs the detail instead.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Network-level error (DNS resolution, connection refused, TLS, timeout).
    #[error("network error querying {url}: {source}")]
    Network {
        /// The metadata URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status other than 404.
    #[error("upstream HTTP {status} querying {url}")]
    UpstreamStatus {
        /// The metadata URL that failed.
        url: String,
        /// The HTTP status code returned upstream.
        status: u16,
    },

    /// Upstream payload could not be decoded into file records.
    #[error("malformed upstream payload from {url}: {reason}")]
    Payload {
        /// The metadata URL that produced the payload.
        url: String,
        /// Why decoding failed.
        reason: String,
    },
}
