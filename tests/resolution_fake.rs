//! Resolution flow against a canned metadata implementation.
//!
//! The metadata collaborator is an explicit capability, so the whole
//! redirect/proxy/404 branch structure can be exercised without any upstream
//! HTTP at all: a fake returns hand-built `FileRecord`s, including flag
//! combinations the real API would never emit.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use curse_maven::metadata::{CurseMetadata, DownloadEntry, FileRecord, MetadataError};
use curse_maven::server::{AppState, build_router};
use curse_maven::DEFAULT_CDN_BASE;

/// Fake metadata source backed by a map of (project, file) -> record.
#[derive(Default)]
struct FakeMetadata {
    records: HashMap<(u64, u64), FileRecord>,
}

impl FakeMetadata {
    fn insert(&mut self, project_id: u64, file_id: u64, record: FileRecord) {
        self.records.insert((project_id, file_id), record);
    }
}

#[async_trait]
impl CurseMetadata for FakeMetadata {
    async fn resolve_file(
        &self,
        project_id: u64,
        file_id: u64,
    ) -> Result<Option<FileRecord>, MetadataError> {
        Ok(self.records.get(&(project_id, file_id)).cloned())
    }
}

fn entry(id: u64, name: &str, requires_proxy: bool) -> DownloadEntry {
    DownloadEntry {
        id,
        file_name: name.to_string(),
        requires_proxy,
    }
}

async fn spawn_app(metadata: FakeMetadata) -> String {
    let state = AppState::new(Arc::new(metadata), DEFAULT_CDN_BASE);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server task");
    });
    format!("http://{addr}")
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("build test client")
}

#[tokio::test]
async fn test_proxy_flag_is_opaque_to_the_location_builder() {
    // A perfectly URL-safe filename, but metadata says "proxy": the service
    // must obey the flag, not the filename.
    let mut metadata = FakeMetadata::default();
    metadata.insert(
        100_000,
        2_724_420,
        FileRecord {
            primary: entry(2_724_420, "safe-name.jar", true),
            classifiers: HashMap::new(),
        },
    );
    let app = spawn_app(metadata).await;

    let res = http_client()
        .get(format!(
            "{app}/curse/maven/mod-100000/2724420/mod-100000-2724420.jar"
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 302);
    assert_eq!(
        res.headers()["location"],
        "/download-binary/2724/420/safe-name.jar"
    );
}

#[tokio::test]
async fn test_redirect_flag_wins_even_for_awkward_names() {
    let mut metadata = FakeMetadata::default();
    metadata.insert(
        100_000,
        2_724_420,
        FileRecord {
            primary: entry(2_724_420, "plain.jar", false),
            classifiers: HashMap::new(),
        },
    );
    let app = spawn_app(metadata).await;

    let res = http_client()
        .get(format!(
            "{app}/curse/maven/mod-100000/2724420/mod-100000-2724420.jar"
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 302);
    assert_eq!(
        res.headers()["location"],
        "https://edge.forgecdn.net/files/2724/420/plain.jar"
    );
}

#[tokio::test]
async fn test_classifier_entry_carries_its_own_proxy_flag() {
    // Redirectable primary, proxy-flagged classifier.
    let mut classifiers = HashMap::new();
    classifiers.insert(
        "sources-dev".to_string(),
        entry(3_577_085, "Pehkui-3.1.0+1.18.1-forge-sources-dev.jar", true),
    );
    let mut metadata = FakeMetadata::default();
    metadata.insert(
        319_596,
        3_577_084,
        FileRecord {
            primary: entry(3_577_084, "Pehkui-3.1.0-forge.jar", false),
            classifiers,
        },
    );
    let app = spawn_app(metadata).await;

    let res = http_client()
        .get(format!(
            "{app}/curse/maven/pehkui-319596/3577084/pehkui-319596-3577084-sources-dev.jar"
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 302);
    assert_eq!(
        res.headers()["location"],
        "/download-binary/3577/85/Pehkui-3.1.0%252B1.18.1-forge-sources-dev.jar"
    );
}

#[tokio::test]
async fn test_file_id_without_cdn_decomposition_is_404() {
    // Four-digit ids have no defined segment split upstream.
    let mut metadata = FakeMetadata::default();
    metadata.insert(
        100_000,
        1234,
        FileRecord {
            primary: entry(1234, "tiny.jar", false),
            classifiers: HashMap::new(),
        },
    );
    let app = spawn_app(metadata).await;

    let res = http_client()
        .get(format!("{app}/curse/maven/mod-100000/1234/mod-100000-1234.jar"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn test_pom_exists_check_ignores_classifier_map() {
    let mut metadata = FakeMetadata::default();
    metadata.insert(
        100_000,
        2_724_420,
        FileRecord {
            primary: entry(2_724_420, "plain.jar", false),
            classifiers: HashMap::new(),
        },
    );
    let app = spawn_app(metadata).await;

    let res = http_client()
        .get(format!(
            "{app}/curse/maven/mod-100000/2724420/mod-100000-2724420-api.pom"
        ))
        .send()
        .await
        .unwrap();

    // The "api" classifier does not exist, but POM existence ignores it.
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("<artifactId>mod-100000</artifactId>"));
    assert!(body.contains("<version>2724420</version>"));
}

#[tokio::test]
async fn test_banner_route_answers() {
    let app = spawn_app(FakeMetadata::default()).await;

    let res = reqwest::get(&app).await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("curse-maven"));
}
