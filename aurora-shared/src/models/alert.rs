/// Alert model and database operations
///
/// Alerts hang off a portfolio and carry no user column of their own. A
/// user's alerts are therefore always selected through the set of portfolio
/// ids that user owns (see [`AlertFilter`]).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE alerts (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     portfolio_id UUID NOT NULL REFERENCES portfolios(id) ON DELETE CASCADE,
///     type TEXT NOT NULL,
///     priority TEXT NOT NULL,
///     title TEXT NOT NULL,
///     message TEXT NOT NULL,
///     data JSONB NOT NULL DEFAULT '{}'::jsonb,
///     acknowledged BOOLEAN NOT NULL DEFAULT FALSE,
///     acknowledged_at TIMESTAMPTZ,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::portfolio::{Portfolio, PortfolioRef};

const ALERT_COLUMNS: &str = "id, portfolio_id, type, priority, title, message, data, \
                             acknowledged, acknowledged_at, created_at";

/// Alert record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique alert ID
    pub id: Uuid,

    /// Portfolio this alert is raised against
    pub portfolio_id: Uuid,

    /// Alert category (e.g. "drift_breach", "concentration")
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub alert_type: String,

    /// Priority label (e.g. "high", "medium", "low")
    pub priority: String,

    pub title: String,

    pub message: String,

    /// Free-form payload, `{}` when nothing was supplied
    pub data: Value,

    /// Whether the alert has been dismissed or resolved
    pub acknowledged: bool,

    /// When the alert was acknowledged
    pub acknowledged_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

/// Alert as returned by listings: the row plus its portfolio's id and name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertWithPortfolio {
    #[serde(flatten)]
    pub alert: Alert,

    pub portfolio: PortfolioRef,
}

/// Alert with its complete owning portfolio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertDetail {
    #[serde(flatten)]
    pub alert: Alert,

    pub portfolio: Portfolio,
}

#[derive(sqlx::FromRow)]
struct AlertListRow {
    #[sqlx(flatten)]
    alert: Alert,
    portfolio_name: String,
}

impl AlertListRow {
    fn into_listed(self) -> AlertWithPortfolio {
        let portfolio = PortfolioRef {
            id: self.alert.portfolio_id,
            name: self.portfolio_name,
        };
        AlertWithPortfolio {
            alert: self.alert,
            portfolio,
        }
    }
}

/// Input for inserting an alert
#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub portfolio_id: Uuid,
    pub alert_type: String,
    pub priority: String,
    pub title: String,
    pub message: String,
    pub data: Value,
}

/// Typed filter for alert listings
///
/// `portfolio_ids` is always applied as a membership test; an empty set
/// therefore matches nothing. `acknowledged` adds an equality constraint
/// only when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub portfolio_ids: Vec<Uuid>,
    pub acknowledged: Option<bool>,
}

impl AlertFilter {
    pub fn for_portfolios(portfolio_ids: Vec<Uuid>) -> Self {
        Self {
            portfolio_ids,
            acknowledged: None,
        }
    }

    pub fn acknowledged(mut self, acknowledged: Option<bool>) -> Self {
        self.acknowledged = acknowledged;
        self
    }

    fn push_conditions(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" WHERE a.portfolio_id = ANY(");
        qb.push_bind(self.portfolio_ids.clone());
        qb.push(")");

        if let Some(acknowledged) = self.acknowledged {
            qb.push(" AND a.acknowledged = ");
            qb.push_bind(acknowledged);
        }
    }

    fn list_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(
            "SELECT a.id, a.portfolio_id, a.type, a.priority, a.title, a.message, a.data, \
             a.acknowledged, a.acknowledged_at, a.created_at, p.name AS portfolio_name \
             FROM alerts a JOIN portfolios p ON p.id = a.portfolio_id",
        );
        self.push_conditions(&mut qb);
        qb.push(" ORDER BY a.created_at DESC");
        qb
    }
}

impl Alert {
    /// Lists alerts matching `filter`, newest first, tagged with their portfolio
    pub async fn list(pool: &PgPool, filter: &AlertFilter) -> Result<Vec<AlertWithPortfolio>, sqlx::Error> {
        let rows = filter
            .list_query()
            .build_query_as::<AlertListRow>()
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(AlertListRow::into_listed).collect())
    }

    /// Finds an alert by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Alert>(&format!("SELECT {ALERT_COLUMNS} FROM alerts WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Inserts an unacknowledged alert
    pub async fn create(pool: &PgPool, data: CreateAlert) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Alert>(&format!(
            "INSERT INTO alerts (portfolio_id, type, priority, title, message, data, acknowledged) \
             VALUES ($1, $2, $3, $4, $5, $6, FALSE) \
             RETURNING {ALERT_COLUMNS}"
        ))
        .bind(data.portfolio_id)
        .bind(data.alert_type)
        .bind(data.priority)
        .bind(data.title)
        .bind(data.message)
        .bind(data.data)
        .fetch_one(pool)
        .await
    }

    /// Marks an alert acknowledged and stamps `acknowledged_at` with the current time
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error::RowNotFound` when no alert has this id.
    pub async fn acknowledge(pool: &PgPool, id: Uuid) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Alert>(&format!(
            "UPDATE alerts SET acknowledged = TRUE, acknowledged_at = NOW() \
             WHERE id = $1 \
             RETURNING {ALERT_COLUMNS}"
        ))
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
