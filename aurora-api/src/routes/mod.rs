/// API route handlers
///
/// - `health`: Health check endpoint
/// - `alerts`: Alert listing, lookup, acknowledgment, creation
/// - `auth`: Placeholder current-user endpoint

pub mod alerts;
pub mod auth;
pub mod health;
