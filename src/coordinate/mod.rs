//! Maven coordinate parsing for `/curse/maven/...` request paths.
//!
//! A request path has the shape
//! `/curse/maven/{slug}-{projectId}/{fileId}/{slug}-{projectId}-{fileId}[-{classifier}]{.jar|.pom}`.
//! The slug may itself contain hyphens (`better-foliage`), so the split
//! between slug and numeric project id is the *last* hyphen before the
//! trailing digit run. The filename segment must repeat the descriptor and
//! file id exactly; any disagreement is rejected as a malformed path.

mod error;

pub use error::CoordinateError;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Regex for the `{slug}-{projectId}` descriptor segment.
/// The greedy slug group pushes the split to the last hyphen before the
/// trailing digit run, so hyphenated slugs parse correctly.
#[allow(clippy::expect_used)]
static DESCRIPTOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<slug>.+)-(?P<project>\d+)$").expect("descriptor regex is valid")
    // Static pattern, safe to panic
});

/// Requested artifact kind, derived from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// A `.jar` request: resolves to a redirect or proxy target.
    Jar,
    /// A `.pom` request: resolves to a synthesized project descriptor.
    Pom,
}

impl Extension {
    /// The literal filename suffix for this extension.
    #[must_use]
    pub fn as_suffix(self) -> &'static str {
        match self {
            Self::Jar => ".jar",
            Self::Pom => ".pom",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_suffix())
    }
}

/// A fully parsed Maven coordinate request.
///
/// Created fresh per request, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenRequest {
    /// Artifact slug (may contain hyphens, e.g. `better-foliage`).
    pub slug: String,
    /// Numeric CurseForge project id.
    pub project_id: u64,
    /// Numeric CurseForge file id.
    pub file_id: u64,
    /// Optional classifier (itself possibly hyphenated, e.g. `sources-dev`).
    pub classifier: Option<String>,
    /// Requested artifact kind.
    pub extension: Extension,
}

impl MavenRequest {
    /// The Maven artifact id for this request (`{slug}-{projectId}`).
    #[must_use]
    pub fn artifact_id(&self) -> String {
        format!("{}-{}", self.slug, self.project_id)
    }
}

/// Parses the three path segments of a Maven coordinate request.
///
/// # Arguments
///
/// * `descriptor` - The `{slug}-{projectId}` segment
/// * `file_id` - The `{fileId}` segment
/// * `file_name` - The `{slug}-{projectId}-{fileId}[-{classifier}]{.jar|.pom}` segment
///
/// # Errors
///
/// Returns [`CoordinateError::MalformedPath`] when any segment violates the
/// coordinate grammar, when the filename's embedded descriptor disagrees with
/// the descriptor segment, or when the embedded file id disagrees with the
/// file-id segment.
pub fn parse_coordinate(
    descriptor: &str,
    file_id: &str,
    file_name: &str,
) -> Result<MavenRequest, CoordinateError> {
    let captures = DESCRIPTOR_PATTERN.captures(descriptor).ok_or_else(|| {
        CoordinateError::malformed(descriptor, "descriptor must be '{slug}-{projectId}'")
    })?;

    // Capture groups are guaranteed by the pattern.
    let slug = &captures["slug"];
    let project_id: u64 = captures["project"]
        .parse()
        .map_err(|_| CoordinateError::malformed(descriptor, "project id out of range"))?;

    if file_id.is_empty() || !file_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordinateError::malformed(
            file_id,
            "file id must be numeric",
        ));
    }
    let file_id_num: u64 = file_id
        .parse()
        .map_err(|_| CoordinateError::malformed(file_id, "file id out of range"))?;

    // The filename must restate the descriptor and file id exactly.
    let prefix = format!("{descriptor}-{file_id}");
    let suffix = file_name.strip_prefix(&prefix).ok_or_else(|| {
        CoordinateError::malformed(
            file_name,
            "filename does not restate the coordinate segments",
        )
    })?;

    let (classifier, extension) = parse_suffix(file_name, suffix)?;
    trace!(slug, project_id, file_id = file_id_num, ?classifier, %extension, "parsed coordinate");

    Ok(MavenRequest {
        slug: slug.to_string(),
        project_id,
        file_id: file_id_num,
        classifier,
        extension,
    })
}

/// Decomposes the filename remainder into an optional `-{classifier}` and a
/// mandatory `.jar`/`.pom` extension.
fn parse_suffix(
    file_name: &str,
    suffix: &str,
) -> Result<(Option<String>, Extension), CoordinateError> {
    let (stem, extension) = if let Some(stem) = suffix.strip_suffix(".jar") {
        (stem, Extension::Jar)
    } else if let Some(stem) = suffix.strip_suffix(".pom") {
        (stem, Extension::Pom)
    } else {
        return Err(CoordinateError::malformed(
            file_name,
            "filename must end in .jar or .pom",
        ));
    };

    if stem.is_empty() {
        return Ok((None, extension));
    }
    let Some(classifier) = stem.strip_prefix('-') else {
        return Err(CoordinateError::malformed(
            file_name,
            "embedded file id does not match the path's file-id segment",
        ));
    };
    if classifier.is_empty() {
        return Err(CoordinateError::malformed(
            file_name,
            "classifier segment is empty",
        ));
    }
    Ok((Some(classifier.to_string()), extension))
}
