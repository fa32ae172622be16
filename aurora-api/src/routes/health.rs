/// Health check endpoint
///
/// Reports whether the server can reach its database. Unlike every other
/// handler this one never fails: a database error is folded into the
/// response body.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2025-01-03T12:00:00.000Z",
///   "service": "api",
///   "database": "connected"
/// }
/// ```
///
/// On failure `status` is `"error"`, `database` is `"disconnected"` and an
/// `error` field carries the driver's message.

use crate::app::AppState;
use aurora_shared::db::pool;
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "error"
    pub status: String,

    /// RFC 3339 UTC time the check ran
    pub timestamp: String,

    /// Always "api"
    pub service: String,

    /// "connected" or "disconnected"
    pub database: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn from_ping(result: Result<(), sqlx::Error>) -> Self {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        match result {
            Ok(()) => Self {
                status: "ok".to_string(),
                timestamp,
                service: "api".to_string(),
                database: "connected".to_string(),
                error: None,
            },
            Err(e) => Self {
                status: "error".to_string(),
                timestamp,
                service: "api".to_string(),
                database: "disconnected".to_string(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let result = pool::ping(&state.db).await;

    if let Err(e) = &result {
        tracing::warn!(error = %e, "Database health check failed");
    }

    Json(HealthResponse::from_ping(result))
}
