use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn router() -> Router {
    let options = LeptosOptions::builder().output_name("showroom").site_root("target/site").build();
    app(&ServerConfig::default(), options)
}

async fn get_status(path: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(path).body(Body::empty()).expect("request");
    let response = router().oneshot(request).await.expect("infallible");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1 << 20).await.expect("body");
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, body) = get_status("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn assets_are_served_from_the_assets_dir() {
    let (status, body) = get_status("/assets/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("User-agent"));
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let (status, _) = get_status("/assets/cars/does-not-exist.webp").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _) = get_status("/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
