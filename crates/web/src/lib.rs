//! GoPrac review site library.
//!
//! This crate provides the review site functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
