//! Maven POM synthesis for `.pom` requests.
//!
//! The document is derived purely from the parsed coordinates; the group is
//! always the fixed literal `curse.maven`. Existence of the underlying file
//! is validated by the caller before this body is emitted.

/// Fixed Maven group id for every synthesized POM.
pub const GROUP_ID: &str = "curse.maven";

/// Builds the fixed-schema POM body for a coordinate.
///
/// The whitespace is load-bearing: Maven tooling and the test fixtures pin
/// the body byte for byte.
#[must_use]
pub fn synthesize(slug: &str, project_id: u64, file_id: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd" xmlns="http://maven.apache.org/POM/4.0.0"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{GROUP_ID}</groupId>
  <artifactId>{slug}-{project_id}</artifactId>
  <version>{file_id}</version>
</project>"#
    )
}
