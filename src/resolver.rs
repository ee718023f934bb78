//! Coordinate-to-file resolution against the metadata collaborator.
//!
//! Exactly one metadata query per request. A missing primary artifact
//! invalidates any classifier request on it, and a classifier absent from an
//! otherwise-existing record resolves to nothing.

use tracing::{debug, instrument};

use crate::metadata::{CurseMetadata, DownloadEntry, MetadataError};

/// Resolves a project/file pair (plus optional classifier) to a concrete
/// download entry.
///
/// Returns `Ok(None)` when the base file does not exist, or when a requested
/// classifier is absent from the base file's record.
///
/// # Errors
///
/// Propagates [`MetadataError`] from the collaborator; callers decide how to
/// surface it (the HTTP layer collapses it to 404).
#[instrument(skip(metadata))]
pub async fn resolve_download(
    metadata: &dyn CurseMetadata,
    project_id: u64,
    file_id: u64,
    classifier: Option<&str>,
) -> Result<Option<DownloadEntry>, MetadataError> {
    let Some(record) = metadata.resolve_file(project_id, file_id).await? else {
        debug!(project_id, file_id, "base file not found");
        return Ok(None);
    };

    match classifier {
        None => Ok(Some(record.primary)),
        Some(name) => match record.classifiers.get(name) {
            Some(entry) => Ok(Some(entry.clone())),
            None => {
                debug!(project_id, file_id, classifier = name, "classifier not present on record");
                Ok(None)
            }
        },
    }
}
