//! External CurseForge metadata collaborator.
//!
//! The resolution core never talks to CurseForge directly; it consumes the
//! [`CurseMetadata`] trait, which answers "what download does project X, file
//! Y identify?" with a [`FileRecord`] or `None`. Production uses the
//! reqwest-backed [`CurseForgeClient`]; tests inject canned implementations.
//!
//! # Example
//!
//! ```no_run
//! use curse_maven::metadata::{CurseForgeClient, CurseMetadata};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CurseForgeClient::new();
//! if let Some(record) = client.resolve_file(238222, 2_724_420).await? {
//!     println!("primary file: {}", record.primary.file_name);
//! }
//! # Ok(())
//! # }
//! ```

mod curseforge;
mod error;

pub use curseforge::{CurseForgeClient, DEFAULT_API_BASE};
pub use error::MetadataError;

use std::collections::HashMap;

use async_trait::async_trait;

/// One concrete downloadable file: the primary artifact or a classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadEntry {
    /// Numeric CurseForge file id.
    pub id: u64,
    /// Download file name as hosted on the CDN.
    pub file_name: String,
    /// Whether this file must be streamed through the local rewrite proxy
    /// instead of redirected to. Sourced from upstream metadata; the
    /// location builder treats it as opaque.
    pub requires_proxy: bool,
}

/// Metadata for one resolvable project file, valid for a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// The primary artifact identified by the queried file id.
    pub primary: DownloadEntry,
    /// Classifier name to download entry (e.g. `api`, `sources-dev`).
    pub classifiers: HashMap<String, DownloadEntry>,
}

/// Read-only CurseForge metadata source.
///
/// Object-safe so handlers can hold `Arc<dyn CurseMetadata>` and tests can
/// swap in fakes.
#[async_trait]
pub trait CurseMetadata: Send + Sync {
    /// Resolves the file identified by `project_id`/`file_id`.
    ///
    /// Returns `Ok(None)` when the project or file does not exist upstream.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] when the upstream query fails at the
    /// transport or payload level.
    async fn resolve_file(
        &self,
        project_id: u64,
        file_id: u64,
    ) -> Result<Option<FileRecord>, MetadataError>;
}
