use std::path::PathBuf;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

fn fixture_config() -> ServerConfig {
    let site_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site");
    ServerConfig::from_lookup(|key| (key == "SITE_DIR").then(|| site_dir.display().to_string())).unwrap()
}

async fn get_path(path: &str) -> (StatusCode, String) {
    let response = app(&fixture_config())
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = get_path("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index() {
    let (status, body) = get_path("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("site-shell"));
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    for path in ["/galeria", "/atrakcje", "/kontakt", "/nie-ma-takiej"] {
        let (status, body) = get_path(path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains("site-shell"), "{path}");
    }
}

#[tokio::test]
async fn assets_are_served_as_files() {
    let (status, body) = get_path("/main.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Poppins"));
}

#[tokio::test]
async fn gzip_is_negotiated() {
    let response = app(&fixture_config())
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_ENCODING).and_then(|v| v.to_str().ok()),
        Some("gzip")
    );
}
