//! Integration tests for the security header audit

mod common;

use common::test_config;
use skopos::http::HttpClient;
use skopos::scanner::security_headers;
use url::Url;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::from_config(&test_config()).expect("client should build")
}

#[tokio::test]
async fn test_bare_response_is_missing_all_audited_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).insert_header("Content-Type", "text/html"))
        .mount(&server)
        .await;

    let target = Url::parse(&server.uri()).expect("valid server url");
    let missing = security_headers::scan(&client(), &target).await;

    assert_eq!(missing.len(), security_headers::SECURITY_HEADERS.len());
    for (name, description) in security_headers::SECURITY_HEADERS {
        assert_eq!(missing.get(*name).map(String::as_str), Some(*description));
    }
}

#[tokio::test]
async fn test_present_headers_are_not_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Security-Policy", "default-src 'self'")
                // presence check is case-insensitive
                .insert_header("x-content-type-options", "nosniff")
                .insert_header("X-Frame-Options", "DENY")
                .insert_header("Strict-Transport-Security", "max-age=31536000")
                .insert_header("X-XSS-Protection", "1; mode=block")
                .insert_header("Referrer-Policy", "no-referrer"),
        )
        .mount(&server)
        .await;

    let target = Url::parse(&server.uri()).expect("valid server url");
    let missing = security_headers::scan(&client(), &target).await;
    assert!(missing.is_empty(), "all audited headers were sent: {missing:?}");
}

#[tokio::test]
async fn test_partial_headers_report_only_the_absent_ones() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Frame-Options", "SAMEORIGIN"))
        .mount(&server)
        .await;

    let target = Url::parse(&server.uri()).expect("valid server url");
    let missing = security_headers::scan(&client(), &target).await;
    assert_eq!(missing.len(), security_headers::SECURITY_HEADERS.len() - 1);
    assert!(!missing.contains_key("X-Frame-Options"));
}

#[tokio::test]
async fn test_fetch_failure_reports_nothing() {
    // nothing listens on port 1
    let target = Url::parse("http://127.0.0.1:1/").expect("valid url");
    let missing = security_headers::scan(&client(), &target).await;
    assert!(
        missing.is_empty(),
        "fetch failure must not report headers as missing"
    );
}
