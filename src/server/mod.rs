//! HTTP surface: router construction and shared request state.
//!
//! ## Router Structure
//!
//! ```text
//! /
//! ├── /curse/maven/{descriptor}/{fileId}/{fileName} - coordinate resolution
//! ├── /download-binary/{segA}/{segB}/{fileName}     - binary rewrite proxy
//! └── /                                             - service banner
//! ```
//!
//! Every request is handled independently: one metadata lookup and, for
//! proxy paths, one upstream byte fetch. No state is shared beyond the
//! metadata client and the pooled CDN HTTP client.

mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use reqwest::{Client, ClientBuilder};

use crate::metadata::CurseMetadata;
use crate::user_agent;

/// HTTP connect timeout for proxied CDN fetches (seconds).
const CDN_CONNECT_TIMEOUT_SECS: u64 = 30;

/// HTTP read timeout for proxied CDN fetches (5 minutes for large files).
const CDN_READ_TIMEOUT_SECS: u64 = 300;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// External CurseForge metadata collaborator.
    pub metadata: Arc<dyn CurseMetadata>,
    /// Pooled HTTP client for proxied CDN fetches.
    pub cdn: Client,
    /// CDN base URL for redirect targets and proxied fetches.
    pub cdn_base: Arc<str>,
}

impl AppState {
    /// Creates the request state around a metadata collaborator.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static
    /// configuration. This should never happen in practice.
    #[allow(clippy::expect_used)]
    pub fn new(metadata: Arc<dyn CurseMetadata>, cdn_base: &str) -> Self {
        let cdn = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(CDN_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(CDN_READ_TIMEOUT_SECS))
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            metadata,
            cdn,
            cdn_base: Arc::from(cdn_base.trim_end_matches('/')),
        }
    }
}

/// Builds the complete router over the given state.
///
/// `get` routes also answer `HEAD`; hyper elides the body, which is what
/// Gradle's existence probes rely on.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/curse/maven/{descriptor}/{file_id}/{file_name}",
            get(handlers::maven_artifact),
        )
        .route(
            "/download-binary/{seg_a}/{seg_b}/{file_name}",
            get(handlers::download_binary),
        )
        .with_state(state)
}
