//! reqwest-backed [`CurseMetadata`] implementation against the CurseForge
//! files API.
//!
//! One request resolves everything the core needs: the project's file listing
//! is fetched once, the queried file id is located, and classifier variants
//! are recognized by their filenames extending the primary filename's stem
//! (`CTM-MC1.12.2-1.0.0.29.jar` → `CTM-MC1.12.2-1.0.0.29-api.jar`).

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use super::error::MetadataError;
use super::{CurseMetadata, DownloadEntry, FileRecord};
use crate::user_agent;

/// Default CurseForge files API base URL.
pub const DEFAULT_API_BASE: &str = "https://addons-ecs.forgesvc.net";

/// HTTP connect timeout for metadata queries (seconds).
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP read timeout for metadata queries (seconds).
const READ_TIMEOUT_SECS: u64 = 30;

/// CDN hosts whose URLs are safe to hand out as redirect targets.
const REDIRECTABLE_CDN_HOSTS: [&str; 2] = ["edge.forgecdn.net", "media.forgecdn.net"];

/// One file entry as reported by the CurseForge files API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectFile {
    id: u64,
    file_name: String,
    #[serde(default)]
    download_url: Option<String>,
}

/// CurseForge metadata client.
///
/// Designed to be created once and shared; the underlying reqwest client
/// pools connections across queries.
#[derive(Debug, Clone)]
pub struct CurseForgeClient {
    client: Client,
    api_base: String,
}

impl Default for CurseForgeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CurseForgeClient {
    /// Creates a client against the default CurseForge API.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Creates a client against an explicit API base URL.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CurseMetadata for CurseForgeClient {
    #[instrument(skip(self))]
    async fn resolve_file(
        &self,
        project_id: u64,
        file_id: u64,
    ) -> Result<Option<FileRecord>, MetadataError> {
        let url = format!("{}/api/v2/addon/{project_id}/files", self.api_base);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| MetadataError::Network {
                url: url.clone(),
                source,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(project_id, "project not found upstream");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(MetadataError::UpstreamStatus {
                url,
                status: response.status().as_u16(),
            });
        }

        let files: Vec<ProjectFile> =
            response
                .json()
                .await
                .map_err(|source| MetadataError::Payload {
                    url,
                    reason: source.to_string(),
                })?;

        Ok(build_record(&files, file_id))
    }
}

/// Locates the queried file id in a project's file listing and collects its
/// classifier variants.
fn build_record(files: &[ProjectFile], file_id: u64) -> Option<FileRecord> {
    let base = files.iter().find(|file| file.id == file_id)?;
    let stem = base
        .file_name
        .strip_suffix(".jar")
        .unwrap_or(&base.file_name);

    let mut classifiers = HashMap::new();
    for candidate in files {
        if candidate.id == base.id {
            continue;
        }
        let Some(rest) = candidate.file_name.strip_prefix(stem) else {
            continue;
        };
        if let Some(name) = rest.strip_prefix('-').and_then(|r| r.strip_suffix(".jar")) {
            if !name.is_empty() {
                classifiers.insert(name.to_string(), to_entry(candidate));
            }
        }
    }

    Some(FileRecord {
        primary: to_entry(base),
        classifiers,
    })
}

fn to_entry(file: &ProjectFile) -> DownloadEntry {
    DownloadEntry {
        id: file.id,
        file_name: file.file_name.clone(),
        requires_proxy: requires_proxy(file),
    }
}

/// Decides whether a file must be streamed through the local rewrite proxy.
///
/// A file is not safely link-redirectable when its name changes under
/// percent-encoding (the encoded redirect would not round-trip) or when
/// upstream reports a download host outside the canonical CDN.
fn requires_proxy(file: &ProjectFile) -> bool {
    if urlencoding::encode(&file.file_name) != file.file_name {
        return true;
    }
    match file
        .download_url
        .as_deref()
        .and_then(|raw| Url::parse(raw).ok())
    {
        Some(parsed) => !parsed
            .host_str()
            .is_some_and(|host| REDIRECTABLE_CDN_HOSTS.contains(&host)),
        None => false,
    }
}
