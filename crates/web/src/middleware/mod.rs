//! Middleware for the review site.

pub mod session;

pub use session::{create_session_layer, current_identity};
