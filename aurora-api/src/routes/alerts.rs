/// Alert endpoints
///
/// Thin handlers over [`AlertService`]: parse the request, call the service,
/// serialize whatever it returns.
///
/// # Endpoints
///
/// - `GET /api/alerts?userId=&acknowledged=` - List a user's alerts
/// - `GET /api/alerts/:id` - Alert with its portfolio
/// - `POST /api/alerts/:id/dismiss` - Acknowledge an alert
/// - `POST /api/alerts/:id/resolve` - Acknowledge an alert
/// - `POST /api/alerts` - Create a manual alert
///
/// Every POST answers `201 Created`.
///
/// [`AlertService`]: aurora_shared::services::AlertService

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath, ApiQuery},
};
use aurora_shared::{
    models::alert::{Alert, AlertDetail, AlertWithPortfolio},
    services::NewAlert,
};
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing alerts
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAlertsQuery {
    pub user_id: String,

    /// `"true"` or `"false"`; anything else means no filter
    pub acknowledged: Option<String>,
}

impl ListAlertsQuery {
    pub fn acknowledged_filter(&self) -> Option<bool> {
        match self.acknowledged.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

/// Create alert request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    pub portfolio_id: Uuid,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 255, message = "type must be 1-255 characters"))]
    pub alert_type: String,

    #[validate(length(min = 1, max = 255, message = "priority must be 1-255 characters"))]
    pub priority: String,

    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,

    /// Optional payload, stored as `{}` when absent
    #[serde(default)]
    pub data: Option<Value>,
}

impl From<CreateAlertRequest> for NewAlert {
    fn from(req: CreateAlertRequest) -> Self {
        NewAlert {
            user_id: req.user_id,
            portfolio_id: req.portfolio_id,
            alert_type: req.alert_type,
            priority: req.priority,
            title: req.title,
            message: req.message,
            data: req.data,
        }
    }
}

/// List alerts
///
/// # Endpoint
///
/// ```text
/// GET /api/alerts?userId=user_default&acknowledged=false
/// ```
///
/// # Response
///
/// Alerts newest first, each with `portfolio: {id, name}`.
pub async fn list_alerts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListAlertsQuery>,
) -> ApiResult<Json<Vec<AlertWithPortfolio>>> {
    let alerts = state
        .alerts
        .list_alerts(&query.user_id, query.acknowledged_filter())
        .await?;

    Ok(Json(alerts))
}

/// Get one alert with its full portfolio
///
/// # Errors
///
/// - `400 Bad Request`: Id is not a UUID
/// - `404 Not Found`: No alert with this id
pub async fn get_alert(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<AlertDetail>> {
    state
        .alerts
        .get_alert(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Alert not found".to_string()))
}

/// Dismiss an alert
///
/// # Errors
///
/// - `404 Not Found`: No alert with this id
pub async fn dismiss_alert(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<(StatusCode, Json<Alert>)> {
    let alert = state.alerts.dismiss_alert(id).await?;

    Ok((StatusCode::CREATED, Json(alert)))
}

/// Resolve an alert
///
/// # Errors
///
/// - `404 Not Found`: No alert with this id
pub async fn resolve_alert(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<(StatusCode, Json<Alert>)> {
    let alert = state.alerts.resolve_alert(id).await?;

    Ok((StatusCode::CREATED, Json(alert)))
}

/// Create a manual alert
///
/// # Endpoint
///
/// ```text
/// POST /api/alerts
/// Content-Type: application/json
///
/// {
///   "userId": "user_default",
///   "portfolioId": "uuid",
///   "type": "drift_breach",
///   "priority": "high",
///   "title": "Equity drift",
///   "message": "Equity allocation is 8% above target",
///   "data": { "drift": 0.08 }
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Portfolio does not exist
/// - `422 Unprocessable Entity`: Body does not decode or fails validation
pub async fn create_alert(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateAlertRequest>,
) -> ApiResult<(StatusCode, Json<Alert>)> {
    req.validate()?;

    let alert = state.alerts.create_alert(req.into()).await?;

    Ok((StatusCode::CREATED, Json(alert)))
}
