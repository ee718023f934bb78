//! Request handlers: coordinate resolution and the binary rewrite proxy.
//!
//! Every failure mode the spec names (malformed path, missing file or
//! classifier, upstream transport failure) collapses to an empty 404 toward
//! the client; the detail goes to the log instead.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{debug, info, warn};

use crate::coordinate::{self, Extension, MavenRequest};
use crate::location::{self, ResolvedLocation};
use crate::pom;
use crate::resolver::resolve_download;

use super::AppState;

/// Service banner for probes hitting the root path.
pub(super) async fn index() -> &'static str {
    concat!("curse-maven ", env!("CARGO_PKG_VERSION"), " - synthetic Maven repository for CurseForge")
}

/// `GET /curse/maven/{descriptor}/{file_id}/{file_name}`
///
/// Parses the coordinate, resolves it against metadata, and answers with a
/// 302 redirect (`.jar`), a synthesized POM (`.pom`), or an empty 404.
pub(super) async fn maven_artifact(
    State(state): State<AppState>,
    Path((descriptor, file_id, file_name)): Path<(String, String, String)>,
) -> Response {
    let request = match coordinate::parse_coordinate(&descriptor, &file_id, &file_name) {
        Ok(request) => request,
        Err(error) => {
            debug!(%descriptor, %file_id, %file_name, %error, "rejecting malformed coordinate path");
            return not_found();
        }
    };

    match request.extension {
        Extension::Jar => jar_response(&state, &request).await,
        Extension::Pom => pom_response(&state, &request).await,
    }
}

async fn jar_response(state: &AppState, request: &MavenRequest) -> Response {
    let resolved = resolve_download(
        state.metadata.as_ref(),
        request.project_id,
        request.file_id,
        request.classifier.as_deref(),
    )
    .await;

    let entry = match resolved {
        Ok(Some(entry)) => entry,
        Ok(None) => return not_found(),
        Err(error) => {
            // Upstream failure degrades silently; no transport detail leaks.
            warn!(%error, project_id = request.project_id, file_id = request.file_id,
                "metadata lookup failed, answering 404");
            return not_found();
        }
    };

    match location::build_location(&entry, &state.cdn_base) {
        ResolvedLocation::Redirect(url) => {
            info!(file_id = entry.id, location = %url, "redirecting to CDN");
            redirect(url)
        }
        ResolvedLocation::Proxy(path) => {
            info!(file_id = entry.id, location = %path, "rewriting to local proxy path");
            redirect(path)
        }
        ResolvedLocation::NotFound => not_found(),
    }
}

/// POM requests validate base-file existence (classifier ignored) and never
/// redirect.
async fn pom_response(state: &AppState, request: &MavenRequest) -> Response {
    let resolved = resolve_download(
        state.metadata.as_ref(),
        request.project_id,
        request.file_id,
        None,
    )
    .await;

    match resolved {
        Ok(Some(_)) => {
            let body = pom::synthesize(&request.slug, request.project_id, request.file_id);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/xml")],
                body,
            )
                .into_response()
        }
        Ok(None) => not_found(),
        Err(error) => {
            warn!(%error, project_id = request.project_id, file_id = request.file_id,
                "metadata lookup failed, answering 404");
            not_found()
        }
    }
}

/// `GET|HEAD /download-binary/{seg_a}/{seg_b}/{file_name}`
///
/// Pass-through proxy for files that are not safely link-redirectable. The
/// routing layer has already percent-decoded the path once, so one further
/// decode recovers the original filename from its doubled encoding. Bytes are
/// streamed back with the upstream `Content-Length`; a chunked upstream
/// response is buffered first so the length stays exact. `HEAD` answers from
/// an upstream `HEAD` without transferring the body.
pub(super) async fn download_binary(
    method: Method,
    State(state): State<AppState>,
    Path((seg_a, seg_b, file_name)): Path<(String, String, String)>,
) -> Response {
    let decoded = match urlencoding::decode(&file_name) {
        Ok(decoded) => decoded.into_owned(),
        Err(error) => {
            debug!(%file_name, %error, "rejecting undecodable proxy filename");
            return not_found();
        }
    };
    // The decoded name must stay a single path segment.
    if decoded.contains('/') || decoded.contains('\\') {
        debug!(%decoded, "rejecting proxy filename with path separators");
        return not_found();
    }

    let url = location::cdn_fetch_url(&state.cdn_base, &seg_a, &seg_b, &decoded);
    let request = if method == Method::HEAD {
        state.cdn.head(&url)
    } else {
        state.cdn.get(&url)
    };

    let upstream = match request.send().await {
        Ok(response) => response,
        Err(error) => {
            warn!(%url, %error, "upstream CDN fetch failed, answering 404");
            return not_found();
        }
    };
    if !upstream.status().is_success() {
        warn!(%url, status = upstream.status().as_u16(), "upstream CDN answered non-success");
        return not_found();
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/java-archive"),
    );

    if method == Method::HEAD {
        if let Some(length) = upstream.headers().get(header::CONTENT_LENGTH) {
            headers.insert(header::CONTENT_LENGTH, length.clone());
        }
        return (StatusCode::OK, headers).into_response();
    }

    info!(%url, "proxying CDN bytes");
    match upstream.headers().get(header::CONTENT_LENGTH) {
        Some(length) => {
            headers.insert(header::CONTENT_LENGTH, length.clone());
            (
                StatusCode::OK,
                headers,
                Body::from_stream(upstream.bytes_stream()),
            )
                .into_response()
        }
        None => {
            // Chunked upstream: buffer the body so the client still gets an
            // exact Content-Length.
            match upstream.bytes().await {
                Ok(bytes) => {
                    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(bytes.len()));
                    (StatusCode::OK, headers, Body::from(bytes)).into_response()
                }
                Err(error) => {
                    warn!(%url, %error, "upstream CDN body fetch failed, answering 404");
                    not_found()
                }
            }
        }
    }
}

fn redirect(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
