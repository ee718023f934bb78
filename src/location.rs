//! CDN location building: numeric file id to redirect or proxy target.
//!
//! A CurseForge file id decomposes into two CDN path segments: the first four
//! digits, then the remaining digits with leading zeros stripped
//! (`2724420` → `2724`/`420`, `3335093` → `3335`/`93`). Whether the result is
//! handed out as a redirect or rewritten to the local `/download-binary/`
//! proxy path is decided purely by the entry's metadata flag.

use crate::metadata::DownloadEntry;

/// Default CDN base URL for redirects and proxied fetches.
pub const DEFAULT_CDN_BASE: &str = "https://edge.forgecdn.net/files";

/// Where a resolved download actually lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLocation {
    /// Absolute CDN URL to redirect the client to.
    Redirect(String),
    /// Relative `/download-binary/...` path served by the rewrite proxy.
    Proxy(String),
    /// The id has no CDN decomposition; yields a bodyless 404.
    NotFound,
}

/// Splits a numeric file id into its two CDN path segments.
///
/// Returns `None` for ids under five digits, which have no defined
/// decomposition upstream.
#[must_use]
pub fn cdn_segments(file_id: u64) -> Option<(String, String)> {
    let digits = file_id.to_string();
    if digits.len() < 5 {
        return None;
    }
    let (head, tail) = digits.split_at(4);
    // Parsing strips the leading zeros: "084" -> 84.
    let tail: u64 = tail.parse().ok()?;
    Some((head.to_string(), tail.to_string()))
}

/// Percent-encodes a filename for embedding in a proxy path.
///
/// The name is encoded once for transport, then the percent signs themselves
/// are re-encoded (`%` → `%25`) so that the proxy hop's own decode recovers
/// the original name losslessly: `a+b.jar` → `a%2Bb.jar` → `a%252Bb.jar`.
#[must_use]
pub fn proxy_encode_filename(file_name: &str) -> String {
    urlencoding::encode(file_name).replace('%', "%25")
}

/// Builds the concrete target for a resolved download entry.
#[must_use]
pub fn build_location(entry: &DownloadEntry, cdn_base: &str) -> ResolvedLocation {
    let Some((seg_a, seg_b)) = cdn_segments(entry.id) else {
        return ResolvedLocation::NotFound;
    };
    if entry.requires_proxy {
        ResolvedLocation::Proxy(format!(
            "/download-binary/{seg_a}/{seg_b}/{}",
            proxy_encode_filename(&entry.file_name)
        ))
    } else {
        ResolvedLocation::Redirect(format!("{cdn_base}/{seg_a}/{seg_b}/{}", entry.file_name))
    }
}

/// Builds the upstream fetch URL used by the rewrite proxy, encoding the
/// decoded filename exactly once.
#[must_use]
pub fn cdn_fetch_url(cdn_base: &str, seg_a: &str, seg_b: &str, file_name: &str) -> String {
    format!("{cdn_base}/{seg_a}/{seg_b}/{}", urlencoding::encode(file_name))
}
