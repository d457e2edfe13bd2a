//! Tests for the HTTP client module

use super::*;
use crate::auth::Credentials;
use crate::error::Error;
use crate::types::CookieMap;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("likes-harvest/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .bearer("public-token")
        .csrf_token("csrf123")
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.default_headers.get("authorization"),
        Some(&"Bearer public-token".to_string())
    );
    assert_eq!(
        config.default_headers.get("x-csrf-token"),
        Some(&"csrf123".to_string())
    );
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("variables", "{}")
        .query_pairs(&[("features".to_string(), "{}".to_string())])
        .header("X-Request-Id", "abc123");

    assert_eq!(
        config.query,
        vec![
            ("variables".to_string(), "{}".to_string()),
            ("features".to_string(), "{}".to_string())
        ]
    );
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
}

#[test]
fn test_invalid_header_value_rejected() {
    let config = HttpClientConfig::builder()
        .csrf_token("bad\nvalue")
        .build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert!(matches!(err, Error::InvalidHeader { .. }));
}

#[tokio::test]
async fn test_get_json_sends_default_headers_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graphql/Likes"))
        .and(header("authorization", "Bearer public-token"))
        .and(header("x-csrf-token", "csrf123"))
        .and(query_param("variables", r#"{"count":1}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .bearer("public-token")
        .csrf_token("csrf123")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let body = client
        .get_json(
            &format!("{}/graphql/Likes", mock_server.uri()),
            RequestConfig::new().query("variables", r#"{"count":1}"#),
        )
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_raw_cookie_header_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/likes"))
        .and(header("cookie", "auth_token=abc; ct0=def"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let endpoint = format!("{}/likes", mock_server.uri());
    let credentials = Credentials::RawCookieHeader("auth_token=abc; ct0=def".to_string());
    let client =
        HttpClient::with_credentials(HttpClientConfig::default(), &credentials, &endpoint)
            .unwrap();
    assert!(!client.has_cookie_jar());

    client.get_json(&endpoint, RequestConfig::new()).await.unwrap();
}

#[tokio::test]
async fn test_cookie_jar_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/likes"))
        .and(header("cookie", "auth_token=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let endpoint = format!("{}/likes", mock_server.uri());
    let mut cookies = CookieMap::new();
    cookies.insert("auth_token".to_string(), "abc".to_string());
    let credentials = Credentials::CookieJar(cookies);

    let client =
        HttpClient::with_credentials(HttpClientConfig::default(), &credentials, &endpoint)
            .unwrap();
    assert!(client.has_cookie_jar());

    client.get_json(&endpoint, RequestConfig::new()).await.unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/likes"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_json(&format!("{}/likes", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Forbidden");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/likes"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_json(&format!("{}/likes", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/likes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get_json(&format!("{}/likes", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_get_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/a.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let bytes = client
        .get_bytes(&format!("{}/media/a.jpg", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(&bytes[..], &[0xFF, 0xD8, 0xFF]);
}
