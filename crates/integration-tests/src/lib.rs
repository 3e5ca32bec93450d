//! Integration tests for the GoPrac review frontend.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database, then the web binary
//! cargo run -p goprac-web
//!
//! # Run integration tests
//! cargo test -p goprac-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `web_locations` - Location listing API contract tests
//! - `web_review` - Review page render tests
//!
//! All tests are `#[ignore]`d by default because they need a running server
//! and a reachable `PostgreSQL` database.
