//! HTTP route handlers for the review site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health             - Liveness check
//! GET  /health/ready       - Readiness check (database ping)
//!
//! # Pages
//! GET  /review             - Interview review page (?s=<interview session>)
//!
//! # JSON API
//! GET  /api/locations      - Selectable locations (filtered, sorted)
//! ```

pub mod locations;
pub mod review;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/locations", get(locations::list))
}

/// Create all routes for the review site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Review page
        .route("/review", get(review::show))
        // JSON API
        .nest("/api", api_routes())
}
