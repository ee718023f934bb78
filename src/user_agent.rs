//! Shared User-Agent string for metadata and CDN HTTP clients.
//!
//! Single source for project URL and UA format so metadata queries and
//! proxied CDN fetches stay consistent and easy to update.

/// Project URL for User-Agent identification.
const PROJECT_UA_URL: &str = "https://github.com/fierce/curse-maven";

/// Default User-Agent for outbound requests (identifies the service).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("curse-maven/{version} (synthetic-maven-repository; +{PROJECT_UA_URL})")
}
