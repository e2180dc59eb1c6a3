//! Integration tests for the robots.txt and directory enumeration checks

mod common;

use common::test_config;
use skopos::http::HttpClient;
use skopos::scanner::{dirs, robots};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::from_config(&test_config()).expect("client should build")
}

#[tokio::test]
async fn test_robots_disallowed_paths_are_resolved_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nDisallow: /admin\nDisallow: \nDisallow: /private/\n",
        ))
        .mount(&server)
        .await;

    let target = Url::parse(&server.uri()).expect("valid server url");
    let discovered = robots::scan(&client(), &target).await;
    assert_eq!(
        discovered,
        vec![
            format!("{}/admin", server.uri()),
            format!("{}/private/", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_robots_non_2xx_yields_nothing() {
    let server = MockServer::start().await;
    // a styled 404 page that still contains Disallow lines must be ignored
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Disallow: /admin\n"))
        .mount(&server)
        .await;

    let target = Url::parse(&server.uri()).expect("valid server url");
    let discovered = robots::scan(&client(), &target).await;
    assert!(discovered.is_empty());
}

#[tokio::test]
async fn test_robots_fetch_failure_yields_nothing() {
    let target = Url::parse("http://127.0.0.1:1/").expect("valid url");
    let discovered = robots::scan(&client(), &target).await;
    assert!(discovered.is_empty());
}

#[tokio::test]
async fn test_dirs_reports_only_paths_answering_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backup/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Index of /backup"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    // every other wordlist path falls through to wiremock's default 404

    let target = Url::parse(&server.uri()).expect("valid server url");
    let found = dirs::scan(&client(), &target, 2).await;
    assert_eq!(found, vec![format!("{}/backup/", server.uri())]);
}

#[tokio::test]
async fn test_dirs_results_keep_wordlist_order_under_concurrency() {
    let server = MockServer::start().await;
    for dir in ["/admin/", "/uploads/", "/logs/"] {
        Mock::given(method("GET"))
            .and(path(dir))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
    }

    let target = Url::parse(&server.uri()).expect("valid server url");
    let found = dirs::scan(&client(), &target, 7).await;
    assert_eq!(
        found,
        vec![
            format!("{}/admin/", server.uri()),
            format!("{}/uploads/", server.uri()),
            format!("{}/logs/", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_dirs_unreachable_target_yields_nothing() {
    let target = Url::parse("http://127.0.0.1:1/").expect("valid url");
    let found = dirs::scan(&client(), &target, 2).await;
    assert!(found.is_empty());
}
