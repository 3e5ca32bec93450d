//! Integration tests for the review page.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The web server running (cargo run -p goprac-web)
//!
//! Run with: cargo test -p goprac-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

/// Base URL for the review site (configurable via environment).
fn base_url() -> String {
    std::env::var("GOPRAC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
#[ignore = "Requires running web server and database"]
async fn test_review_page_renders_for_guest() {
    let resp = client()
        .get(format!("{}/review", base_url()))
        .send()
        .await
        .expect("Failed to get review page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Interview feedback"));
    assert!(body.contains("Viewing as guest"));
}

#[tokio::test]
#[ignore = "Requires running web server and database"]
async fn test_review_page_with_session_param() {
    let resp = client()
        .get(format!("{}/review?s=test-session", base_url()))
        .send()
        .await
        .expect("Failed to get review page");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running web server"]
async fn test_health_endpoints() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client()
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to get readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}
