/// Alert service
///
/// Owns a handle to the shared pool and exposes one method per alert
/// operation. Store errors are returned untouched; mapping them to HTTP
/// responses is the caller's concern.
///
/// # Example
///
/// ```no_run
/// use aurora_shared::services::AlertService;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let alerts = AlertService::new(pool);
/// let open = alerts.list_alerts("user_default", Some(false)).await?;
/// for item in open {
///     println!("{} ({})", item.alert.title, item.portfolio.name);
/// }
/// # Ok(())
/// # }
/// ```

use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{
    alert::{Alert, AlertDetail, AlertFilter, AlertWithPortfolio, CreateAlert},
    portfolio::Portfolio,
};

/// Request to raise a manual alert
///
/// `user_id` is carried for auditing only. It is not checked against the
/// owner of `portfolio_id`.
#[derive(Debug, Clone)]
pub struct NewAlert {
    pub user_id: String,
    pub portfolio_id: Uuid,
    pub alert_type: String,
    pub priority: String,
    pub title: String,
    pub message: String,
    pub data: Option<Value>,
}

impl NewAlert {
    fn into_create(self) -> CreateAlert {
        let data = match self.data {
            Some(data) if !is_blank(&data) => data,
            _ => Value::Object(Default::default()),
        };

        CreateAlert {
            portfolio_id: self.portfolio_id,
            alert_type: self.alert_type,
            priority: self.priority,
            title: self.title,
            message: self.message,
            data,
        }
    }
}

/// `null`, `false`, zero and `""` carry no payload and are stored as `{}`
fn is_blank(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Alert operations against the shared pool
#[derive(Debug, Clone)]
pub struct AlertService {
    db: PgPool,
}

impl AlertService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Lists the alerts visible to `user_id`, newest first
    ///
    /// Visibility is resolved through the user's portfolios. A user owning no
    /// portfolio gets an empty list.
    pub async fn list_alerts(
        &self,
        user_id: &str,
        acknowledged: Option<bool>,
    ) -> Result<Vec<AlertWithPortfolio>, sqlx::Error> {
        let portfolio_ids = Portfolio::ids_for_user(&self.db, user_id).await?;

        if portfolio_ids.is_empty() {
            debug!(user_id, "User owns no portfolios");
            return Ok(Vec::new());
        }

        let filter = AlertFilter::for_portfolios(portfolio_ids).acknowledged(acknowledged);
        let alerts = Alert::list(&self.db, &filter).await?;

        debug!(
            user_id,
            portfolios = filter.portfolio_ids.len(),
            acknowledged = ?acknowledged,
            count = alerts.len(),
            "Listed alerts"
        );
        Ok(alerts)
    }

    /// Fetches one alert with its full portfolio
    pub async fn get_alert(&self, id: Uuid) -> Result<Option<AlertDetail>, sqlx::Error> {
        let Some(alert) = Alert::find_by_id(&self.db, id).await? else {
            return Ok(None);
        };

        // portfolio_id is a non-null foreign key, so the parent row exists
        let portfolio = Portfolio::find_by_id(&self.db, alert.portfolio_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok(Some(AlertDetail { alert, portfolio }))
    }

    /// Dismisses an alert
    pub async fn dismiss_alert(&self, id: Uuid) -> Result<Alert, sqlx::Error> {
        let alert = Alert::acknowledge(&self.db, id).await?;
        info!(alert_id = %id, "Alert dismissed");
        Ok(alert)
    }

    /// Resolves an alert
    ///
    /// Same effect as [`AlertService::dismiss_alert`]: both acknowledge.
    pub async fn resolve_alert(&self, id: Uuid) -> Result<Alert, sqlx::Error> {
        let alert = Alert::acknowledge(&self.db, id).await?;
        info!(alert_id = %id, "Alert resolved");
        Ok(alert)
    }

    /// Creates an unacknowledged alert on a portfolio
    pub async fn create_alert(&self, new_alert: NewAlert) -> Result<Alert, sqlx::Error> {
        let user_id = new_alert.user_id.clone();
        let alert = Alert::create(&self.db, new_alert.into_create()).await?;

        info!(
            alert_id = %alert.id,
            portfolio_id = %alert.portfolio_id,
            user_id = %user_id,
            priority = %alert.priority,
            "Alert created"
        );
        Ok(alert)
    }
}
