/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use aurora_api::{app::{build_router, AppState}, config::Config};
/// use aurora_shared::db;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = db::init(config.pool_config()).await?;
/// let app = build_router(AppState::new(pool, config));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3005").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::security::SecurityHeadersLayer, routes};
use aurora_shared::services::AlertService;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned into every handler. The pool and the service share the same
/// underlying connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Alert operations
    pub alerts: AlertService,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            alerts: AlertService::new(db.clone()),
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the Axum router with all routes and middleware
///
/// ```text
/// /
/// ├── GET  /health
/// └── /api
///     ├── GET  /auth/me
///     └── /alerts
///         ├── GET  /               ?userId=&acknowledged=
///         ├── POST /
///         ├── GET  /:id
///         ├── POST /:id/dismiss
///         └── POST /:id/resolve
/// ```
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let production = state.config.api.production;

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/auth/me", get(routes::auth::current_user))
        .route(
            "/api/alerts",
            get(routes::alerts::list_alerts).post(routes::alerts::create_alert),
        )
        .route("/api/alerts/:id", get(routes::alerts::get_alert))
        .route("/api/alerts/:id/dismiss", post(routes::alerts::dismiss_alert))
        .route("/api/alerts/:id/resolve", post(routes::alerts::resolve_alert))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(production))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
