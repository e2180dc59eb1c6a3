//! Integration tests for the CSRF token presence check

mod common;

use common::test_config;
use skopos::http::HttpClient;
use skopos::scanner::csrf;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn scan_page(html: &str) -> Vec<skopos::models::FormModel> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&test_config()).expect("client should build");
    let target = Url::parse(&server.uri()).expect("valid server url");
    csrf::scan(&client, &target).await
}

#[tokio::test]
async fn test_form_with_csrf_token_is_never_flagged() {
    let flagged = scan_page(
        r#"<form action="/transfer" method="post">
            <input name="csrf_token" type="hidden" />
            <input name="amount" type="text" />
        </form>"#,
    )
    .await;
    assert!(flagged.is_empty());
}

#[tokio::test]
async fn test_form_without_csrf_token_is_flagged() {
    let flagged = scan_page(
        r#"<form action="/transfer" method="post">
            <input name="amount" type="text" />
        </form>"#,
    )
    .await;
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].action.as_deref(), Some("/transfer"));
}

#[tokio::test]
async fn test_form_with_zero_inputs_is_flagged() {
    let flagged = scan_page(r#"<form action="/logout" method="post"></form>"#).await;
    assert_eq!(flagged.len(), 1);
    assert!(flagged[0].fields.is_empty());
}

#[tokio::test]
async fn test_only_unprotected_forms_are_flagged() {
    let flagged = scan_page(
        r#"
        <form action="/a"><input name="CsrfMiddlewareToken" type="hidden" /></form>
        <form action="/b"><input name="comment" type="text" /></form>
        "#,
    )
    .await;
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].action.as_deref(), Some("/b"));
}

#[tokio::test]
async fn test_csrf_check_never_submits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<form action="/transfer" method="post"><input name="amount" type="text" /></form>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/transfer"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpClient::from_config(&test_config()).expect("client should build");
    let target = Url::parse(&server.uri()).expect("valid server url");
    let flagged = csrf::scan(&client, &target).await;
    assert_eq!(flagged.len(), 1);
}
