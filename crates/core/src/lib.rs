//! GoPrac Core - Shared types library.
//!
//! This crate provides common types used across the GoPrac review frontend:
//! - `web` - Public-facing review site and its JSON API
//! - `integration-tests` - End-to-end tests against a running site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe entity IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
