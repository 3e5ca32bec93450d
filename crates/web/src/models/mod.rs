//! Domain types for the review site.

pub mod location;
pub mod session;
