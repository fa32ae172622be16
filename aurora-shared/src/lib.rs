//! # Aurora Shared Library
//!
//! Data access and alert logic shared by the Aurora API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool lifecycle and embedded migrations
//! - `models`: Portfolio and alert rows with their queries
//! - `services`: Alert service (ownership resolution, acknowledgment)
//! - `auth`: Placeholder user identity

pub mod auth;
pub mod db;
pub mod models;
pub mod services;

/// Current version of the Aurora shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
