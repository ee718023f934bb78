//! Curse Maven Core Library
//!
//! This library implements a synthetic Maven repository backed by the
//! CurseForge mod-hosting CDN. Build tools that only understand Maven
//! coordinates (`curse.maven:{slug}-{projectId}:{fileId}`) request paths
//! from this service, which resolves them against CurseForge metadata and
//! answers with a redirect to the real CDN file, a synthesized POM, or a
//! byte-exact server-side proxy when the upstream location cannot be
//! redirected to directly.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`coordinate`] - Maven coordinate path parsing
//! - [`metadata`] - External CurseForge metadata collaborator
//! - [`resolver`] - Coordinate-to-file resolution
//! - [`location`] - CDN location building (redirect vs proxy)
//! - [`pom`] - Maven POM synthesis
//! - [`server`] - HTTP routes and the binary rewrite proxy

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coordinate;
pub mod location;
pub mod metadata;
pub mod pom;
pub mod resolver;
pub mod server;

mod user_agent;

// Re-export commonly used types
pub use coordinate::{CoordinateError, Extension, MavenRequest, parse_coordinate};
pub use location::{DEFAULT_CDN_BASE, ResolvedLocation, build_location, cdn_segments};
pub use metadata::{
    CurseForgeClient, CurseMetadata, DEFAULT_API_BASE, DownloadEntry, FileRecord, MetadataError,
};
pub use resolver::resolve_download;
pub use server::{AppState, build_router};
