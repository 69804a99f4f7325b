//! Shared fixtures for the integration tests

use actions_harvest::config::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Listing section every mock site serves
pub const SECTION: &str = "presidential-actions";

/// Creates a test configuration pointed at a mock listing
pub fn create_test_config(base_url: &str, output_dir: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            base_url: base_url.to_string(),
            min_request_delay: 1, // Very short for testing
            request_timeout: 5,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        output: OutputConfig {
            directory: output_dir.to_string(),
        },
    }
}

/// Returns the listing root URL served by `server`
pub fn listing_root(server: &MockServer) -> String {
    format!("{}/{}/", server.uri(), SECTION)
}

/// Returns the path of article `slug` (as fetched, without trailing slash)
pub fn article_path(slug: &str) -> String {
    format!("/{}/2025/01/{}", SECTION, slug)
}

/// Builds listing page HTML linking to `last_page` pages and to `slugs`
///
/// Every article is linked twice, like a headline plus a "read more" link.
pub fn listing_page(server: &MockServer, last_page: u32, slugs: &[&str]) -> String {
    let mut html = String::from("<html><body><main>");

    for slug in slugs {
        let url = format!("{}{}/", server.uri(), article_path(slug));
        html.push_str(&format!(
            r#"<article><h2><a href="{url}">{slug}</a></h2><a class="more" href="{url}">Read more</a></article>"#
        ));
    }

    html.push_str(r#"<nav class="pagination">"#);
    for n in 2..=last_page {
        html.push_str(&format!(
            r#"<a href="{}/{}/page/{}/">{}</a>"#,
            server.uri(),
            SECTION,
            n,
            n
        ));
    }
    html.push_str("</nav></main></body></html>");
    html
}

/// Builds article page HTML
pub fn article_page(title: &str, paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", p))
        .collect();
    format!(
        "<html><head><title>{title} | Site</title></head><body><h1>{title}</h1>{body}</body></html>"
    )
}

/// Serves `body` at `route` with status 200
pub async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Serves a listing page
pub async fn mount_listing(server: &MockServer, page: u32, body: String) {
    let route = if page == 1 {
        format!("/{}/", SECTION)
    } else {
        format!("/{}/page/{}/", SECTION, page)
    };
    mount_html(server, &route, body).await;
}

/// Serves an article with a heading and paragraphs
pub async fn mount_article(server: &MockServer, slug: &str, title: &str, paragraphs: &[&str]) {
    mount_html(server, &article_path(slug), article_page(title, paragraphs)).await;
}

/// Serves `status` for an article
pub async fn mount_article_status(server: &MockServer, slug: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(article_path(slug)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
