//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl and index cycle end-to-end against a SQLite file.

use lexicrawl::config::{parse_config, Config};
use lexicrawl::crawler::crawl;
use lexicrawl::storage::{FrequencyStore, RunStatus, SqliteStore};
use lexicrawl::CrawlError;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling `seed` into `db_path`
fn create_test_config(seed: &str, db_path: &Path, max_depth: u32) -> Config {
    parse_config(&format!(
        r#"
[crawler]
seeds = ["{}"]
max-depth = {}

[http]
timeout-secs = 5
max-retries = 0
retry-delay-ms = 10

[index]
database-path = "{}"
"#,
        seed,
        max_depth,
        db_path.display()
    ))
    .expect("Failed to parse test config")
}

/// Builds an HTML page with a title, one paragraph and the given links
fn html_page(title: &str, body: &str, links: &[String]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();
    format!(
        "<html><head><title>{}</title></head><body><p>{}</p>{}</body></html>",
        title, body, anchors
    )
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            "Welcome to the harbor",
            &[format!("{}/page1", base_url), "/page2".to_string()],
        ),
    )
    .await;
    mount_page(&mock_server, "/page1", html_page("Page 1", "Harbor lights", &[])).await;
    mount_page(&mock_server, "/page2", html_page("Page 2", "Harbor boats", &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("index.db");
    let config = create_test_config(&format!("{}/", base_url), &db_path, 1);

    let reports = crawl(&config, "test-hash", CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].pages_fetched, 3);
    assert_eq!(reports[0].documents_indexed, 3);
    assert_eq!(reports[0].fetch_failures, 0);

    let store = SqliteStore::open(&db_path).expect("Failed to open DB");
    assert_eq!(store.document_count().unwrap(), 3);
    assert_eq!(store.rank_entries("harbor").unwrap().len(), 3);
    assert_eq!(store.occurrence_frequency("harbor").unwrap(), 3);

    let runs = store.recent_runs(1).unwrap();
    assert_eq!(runs[0].status, RunStatus::Completed);
    assert_eq!(runs[0].config_hash, "test-hash");
    assert_eq!(runs[0].documents_indexed, 3);
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;

    // Chain: / -> level1 -> level2 -> level3
    mount_page(
        &mock_server,
        "/",
        html_page("Root", "root page", &["/level1".to_string()]),
    )
    .await;
    mount_page(
        &mock_server,
        "/level1",
        html_page("Level 1", "first level", &["/level2".to_string()]),
    )
    .await;
    mount_page(
        &mock_server,
        "/level2",
        html_page("Level 2", "second level", &["/level3".to_string()]),
    )
    .await;

    // Wiremock verifies expect(0) when the mock server drops
    Mock::given(method("GET"))
        .and(path("/level3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Level 3", "too deep", &[]))
                .insert_header("content-type", "text/html"),
        )
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("index.db");
    let config = create_test_config(&format!("{}/", mock_server.uri()), &db_path, 2);

    let reports = crawl(&config, "hash", CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(reports[0].rounds_completed, 3);
    assert_eq!(reports[0].documents_indexed, 3);

    let store = SqliteStore::open(&db_path).unwrap();
    assert!(store.rank_entries("deep").unwrap().is_empty());
}

#[tokio::test]
async fn test_external_links_not_followed() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;

    // The other server is addressed by a different host name, so it is out of scope
    let other_port = url::Url::parse(&other_server.uri())
        .unwrap()
        .port()
        .unwrap();
    let external = format!("http://localhost:{}/elsewhere", other_port);

    mount_page(
        &mock_server,
        "/",
        html_page("Home", "home page", &[external]),
    )
    .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unused"))
        .expect(0)
        .mount(&other_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        &dir.path().join("index.db"),
        3,
    );

    let reports = crawl(&config, "hash", CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(reports[0].pages_fetched, 1);
    assert_eq!(reports[0].links_rejected, 1);
}

#[tokio::test]
async fn test_content_type_handling() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            "document list",
            &["/document.pdf".to_string(), "/contact".to_string()],
        ),
    )
    .await;
    mount_page(&mock_server, "/contact", html_page("Contact", "contact details", &[])).await;

    Mock::given(method("GET"))
        .and(path("/document.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"%PDF-1.4".to_vec())
                .insert_header("content-type", "application/pdf"),
        )
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        &dir.path().join("index.db"),
        1,
    );

    let reports = crawl(&config, "hash", CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(reports[0].documents_indexed, 2);
    assert_eq!(reports[0].fetch_failures, 1);
}

#[tokio::test]
async fn test_dead_link_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            "home page",
            &["/gone".to_string(), "/present".to_string()],
        ),
    )
    .await;
    mount_page(&mock_server, "/present", html_page("Present", "still here", &[])).await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = create_test_config(
        &format!("{}/", mock_server.uri()),
        &dir.path().join("index.db"),
        1,
    );

    let reports = crawl(&config, "hash", CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(reports[0].fetch_failures, 1);
    assert_eq!(reports[0].documents_indexed, 2);
}

#[tokio::test]
async fn test_untitled_page_links_followed() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><p>no title here</p><a href="/child">child</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(&mock_server, "/child", html_page("Child", "child page", &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("index.db");
    let config = create_test_config(&format!("{}/", mock_server.uri()), &db_path, 1);

    let reports = crawl(&config, "hash", CancellationToken::new())
        .await
        .expect("Crawl failed");

    assert_eq!(reports[0].documents_skipped, 1);
    assert_eq!(reports[0].documents_indexed, 1);

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.document_count().unwrap(), 1);
    assert_eq!(store.rank_entries("child").unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_seed_fails_run() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("index.db");
    let config = create_test_config(&format!("{}/", mock_server.uri()), &db_path, 1);

    let result = crawl(&config, "hash", CancellationToken::new()).await;
    assert!(matches!(result, Err(CrawlError::SeedUnreachable { .. })));

    let store = SqliteStore::open(&db_path).unwrap();
    let runs = store.recent_runs(1).unwrap();
    assert_eq!(runs[0].status, RunStatus::Failed);
}

/// Nine body terms plus the title term: every "ocean" has TF 1/10
fn ocean_page(title: &str, links: &[String]) -> String {
    html_page(
        title,
        "ocean alpha beta gamma delta epsilon zeta theta kappa",
        links,
    )
}

#[tokio::test]
async fn test_ocean_scores_and_recrawl_idempotence() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", ocean_page("Sea", &["/b".to_string()])).await;
    mount_page(&mock_server, "/b", ocean_page("Bay", &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("index.db");
    let seed = format!("{}/", mock_server.uri());
    let config = create_test_config(&seed, &db_path, 1);

    crawl(&config, "hash", CancellationToken::new())
        .await
        .expect("First crawl failed");

    let check = |store: &SqliteStore| {
        assert_eq!(store.document_count().unwrap(), 2);
        assert_eq!(store.occurrence_frequency("ocean").unwrap(), 2);

        let entries = store.rank_entries("ocean").unwrap();
        assert_eq!(entries.len(), 2);
        for entry in entries {
            assert!(
                (entry.score - 0.1).abs() < 1e-9,
                "{} scored {}",
                entry.document_id,
                entry.score
            );
        }
    };

    check(&SqliteStore::open(&db_path).unwrap());

    crawl(&config, "hash", CancellationToken::new())
        .await
        .expect("Second crawl failed");

    let store = SqliteStore::open(&db_path).unwrap();
    check(&store);
    assert_eq!(store.recent_runs(10).unwrap().len(), 2);
}

#[tokio::test]
async fn test_cancelled_crawl_runs_nothing() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", html_page("Home", "home page", &[])).await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("index.db");
    let config = create_test_config(&format!("{}/", mock_server.uri()), &db_path, 1);

    let cancel = CancellationToken::new();
    cancel.cancel();

    let reports = crawl(&config, "hash", cancel).await.expect("Crawl failed");

    // Already cancelled before the first job, so nothing runs
    assert!(reports.is_empty());
    let store = SqliteStore::open(&db_path).unwrap();
    assert!(store.recent_runs(1).unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_during_crawl_records_cancelled_run() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        html_page("Home", "harbor lights", &["/slow".to_string()]),
    )
    .await;

    // Outlasts the cancellation below
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Slow", "slow page", &[]))
                .insert_header("content-type", "text/html")
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("index.db");
    let config = create_test_config(&format!("{}/", mock_server.uri()), &db_path, 2);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        trigger.cancel();
    });

    let reports = crawl(&config, "hash", cancel).await.expect("Crawl failed");

    assert_eq!(reports.len(), 1);
    assert!(reports[0].cancelled);
    assert_eq!(reports[0].rounds_completed, 1);
    assert_eq!(reports[0].documents_indexed, 1);

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.rank_entries("harbor").unwrap().len(), 1);
    assert!(store.rank_entries("slow").unwrap().is_empty());

    let runs = store.recent_runs(1).unwrap();
    assert_eq!(runs[0].status, RunStatus::Cancelled);
    assert_eq!(runs[0].documents_indexed, 1);
}
