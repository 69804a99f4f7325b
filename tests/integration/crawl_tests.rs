use crate::support::*;
use actions_harvest::crawler::{run_crawl, Coordinator, FetchFailure};
use actions_harvest::output::INDEX_FILE;
use actions_harvest::{ArticleState, CrawlPhase, HarvestError};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn titles(report: &actions_harvest::CrawlReport) -> Vec<&str> {
    report.documents.iter().map(|d| d.title.as_str()).collect()
}

#[tokio::test]
async fn test_full_crawl_across_pages() {
    let mock_server = MockServer::start().await;

    // The root is listing page 1 and must only be fetched once.
    Mock::given(method("GET"))
        .and(path(format!("/{}/", SECTION)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(&mock_server, 2, &["first-order", "second-order"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_listing(&mock_server, 2, listing_page(&mock_server, 2, &["third-order"])).await;

    mount_article(&mock_server, "first-order", "First Order", &["One.", "Two."]).await;
    mount_article(&mock_server, "second-order", "Second Order", &["Three."]).await;
    mount_article(&mock_server, "third-order", "Third Order", &["Four."]).await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&listing_root(&mock_server), temp.path().to_str().unwrap());

    let mut coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let report = coordinator.collect_all().await.expect("Crawl failed");

    assert_eq!(report.total_pages, 2);
    assert_eq!(report.pages_failed, 0);
    assert_eq!(
        titles(&report),
        vec!["First Order", "Second Order", "Third Order"]
    );
    assert_eq!(report.documents[0].content, "One.\n\nTwo.");
    assert_eq!(report.count(ArticleState::Collected), 3);
    // Every article is linked twice on its listing page.
    assert_eq!(report.count(ArticleState::Duplicate), 3);
    assert_eq!(coordinator.phase(), CrawlPhase::Done);
}

#[tokio::test]
async fn test_failed_article_does_not_abort_crawl() {
    let mock_server = MockServer::start().await;
    let slugs = ["a-one", "a-two", "a-three", "a-four", "a-five"];

    mount_listing(&mock_server, 1, listing_page(&mock_server, 1, &slugs)).await;
    mount_article(&mock_server, "a-one", "One", &["1"]).await;
    mount_article_status(&mock_server, "a-two", 500).await;
    mount_article(&mock_server, "a-three", "Three", &["3"]).await;
    mount_article(&mock_server, "a-four", "Four", &["4"]).await;
    mount_article(&mock_server, "a-five", "Five", &["5"]).await;

    let config = create_test_config(&listing_root(&mock_server), "unused");
    let mut coordinator = Coordinator::new(&config).unwrap();
    let report = coordinator.collect_all().await.unwrap();

    assert_eq!(titles(&report), vec!["One", "Three", "Four", "Five"]);
    assert_eq!(report.count(ArticleState::FetchFailed), 1);
}

#[tokio::test]
async fn test_unreachable_root_is_distinct_error() {
    let mock_server = MockServer::start().await;
    // Nothing mounted: every request answers 404.

    let config = create_test_config(&listing_root(&mock_server), "unused");
    let mut coordinator = Coordinator::new(&config).unwrap();
    let result = coordinator.collect_all().await;

    match result {
        Err(HarvestError::RootUnreachable { url, source }) => {
            assert_eq!(url, listing_root(&mock_server));
            assert_eq!(source.cause, FetchFailure::Status(404));
        }
        other => panic!("expected RootUnreachable, got {:?}", other),
    }
    assert_eq!(coordinator.phase(), CrawlPhase::Init);
}

#[tokio::test]
async fn test_reachable_but_empty_listing() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, 1, "<html><body><p>No actions yet.</p></body></html>".to_string())
        .await;

    let config = create_test_config(&listing_root(&mock_server), "unused");
    let mut coordinator = Coordinator::new(&config).unwrap();
    let report = coordinator.collect_all().await.unwrap();

    assert!(report.is_empty());
    assert_eq!(report.total_pages, 1);
    assert_eq!(report.pages_failed, 0);
}

#[tokio::test]
async fn test_failed_listing_page_is_skipped() {
    let mock_server = MockServer::start().await;

    mount_listing(&mock_server, 1, listing_page(&mock_server, 3, &["p1-order"])).await;
    // Page 2 is not mounted and answers 404.
    mount_listing(&mock_server, 3, listing_page(&mock_server, 3, &["p3-order"])).await;
    mount_article(&mock_server, "p1-order", "Page One Order", &["x"]).await;
    mount_article(&mock_server, "p3-order", "Page Three Order", &["y"]).await;

    let config = create_test_config(&listing_root(&mock_server), "unused");
    let mut coordinator = Coordinator::new(&config).unwrap();
    let report = coordinator.collect_all().await.unwrap();

    assert_eq!(report.total_pages, 3);
    assert_eq!(report.pages_failed, 1);
    assert_eq!(titles(&report), vec!["Page One Order", "Page Three Order"]);
}

#[tokio::test]
async fn test_empty_and_incomplete_articles_are_dropped() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        1,
        listing_page(&mock_server, 1, &["no-body", "blank", "fine"]),
    )
    .await;
    mount_html(
        &mock_server,
        &article_path("no-body"),
        "<html><body><h1>Heading Only</h1></body></html>".to_string(),
    )
    .await;
    mount_html(&mock_server, &article_path("blank"), String::new()).await;
    mount_article(&mock_server, "fine", "Fine", &["Body."]).await;

    let config = create_test_config(&listing_root(&mock_server), "unused");
    let mut coordinator = Coordinator::new(&config).unwrap();
    let report = coordinator.collect_all().await.unwrap();

    assert_eq!(titles(&report), vec!["Fine"]);
    assert_eq!(report.count(ArticleState::Empty), 1);
    assert_eq!(report.count(ArticleState::Incomplete), 1);
    assert!(report
        .documents
        .iter()
        .all(|d| !d.title.is_empty() && !d.content.is_empty()));
}

#[tokio::test]
async fn test_missing_heading_uses_url_title() {
    let mock_server = MockServer::start().await;

    mount_listing(&mock_server, 1, listing_page(&mock_server, 1, &["some-order"])).await;
    mount_html(
        &mock_server,
        &article_path("some-order"),
        "<html><body><p>Text.</p></body></html>".to_string(),
    )
    .await;

    let config = create_test_config(&listing_root(&mock_server), "unused");
    let mut coordinator = Coordinator::new(&config).unwrap();
    let report = coordinator.collect_all().await.unwrap();

    assert_eq!(titles(&report), vec!["Some Order"]);
}

#[tokio::test]
async fn test_article_repeated_across_pages_is_collected_twice() {
    let mock_server = MockServer::start().await;

    mount_listing(&mock_server, 1, listing_page(&mock_server, 2, &["pinned"])).await;
    mount_listing(&mock_server, 2, listing_page(&mock_server, 2, &["pinned"])).await;

    Mock::given(method("GET"))
        .and(path(article_path("pinned")))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_page("Pinned", &["p"])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&listing_root(&mock_server), "unused");
    let mut coordinator = Coordinator::new(&config).unwrap();
    let report = coordinator.collect_all().await.unwrap();

    assert_eq!(titles(&report), vec!["Pinned", "Pinned"]);
}

#[tokio::test]
async fn test_requests_are_spaced_by_min_delay() {
    let mock_server = MockServer::start().await;

    mount_listing(&mock_server, 1, listing_page(&mock_server, 1, &["x-one", "x-two"])).await;
    mount_article(&mock_server, "x-one", "X One", &["1"]).await;
    mount_article(&mock_server, "x-two", "X Two", &["2"]).await;

    let mut config = create_test_config(&listing_root(&mock_server), "unused");
    config.crawler.min_request_delay = 100;

    let mut coordinator = Coordinator::new(&config).unwrap();
    let start = Instant::now();
    let report = coordinator.collect_all().await.unwrap();

    // Root plus two articles: two enforced gaps.
    assert_eq!(report.documents.len(), 2);
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_run_crawl_writes_documents_and_index() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        1,
        listing_page(&mock_server, 1, &["order-a-1", "order-a-2", "order-b"]),
    )
    .await;
    mount_article(&mock_server, "order-a-1", "Order: A!", &["earlier"]).await;
    mount_article(&mock_server, "order-a-2", "Order A", &["later"]).await;
    mount_article(&mock_server, "order-b", "Order B", &["b"]).await;

    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("actions");
    let config = create_test_config(&listing_root(&mock_server), out_dir.to_str().unwrap());

    let (report, summary) = run_crawl(&config).await.expect("Harvest failed");

    assert_eq!(report.documents.len(), 3);
    assert_eq!(summary.files_written, 2);
    assert_eq!(summary.overwritten, 1);

    let collided: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("order-a.json")).unwrap())
            .unwrap();
    assert_eq!(collided["title"], "Order A");
    assert_eq!(collided["content"], "later");

    let index: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join(INDEX_FILE)).unwrap())
            .unwrap();
    assert_eq!(index["total_actions"], 3);
    assert_eq!(
        index["titles"],
        serde_json::json!(["Order: A!", "Order A", "Order B"])
    );
}

#[tokio::test]
async fn test_run_crawl_writes_nothing_when_root_unreachable() {
    let mock_server = MockServer::start().await;

    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("actions");
    let config = create_test_config(&listing_root(&mock_server), out_dir.to_str().unwrap());

    let result = run_crawl(&config).await;

    assert!(matches!(result, Err(HarvestError::RootUnreachable { .. })));
    assert!(!out_dir.exists());
}
