/// Portfolio model and database operations
///
/// Portfolios belong to exactly one user and are the unit alerts are scoped
/// to. Their lifecycle is owned by the wider platform; this crate only reads
/// them, apart from `create`/`delete` used for seeding and tests.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE portfolios (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id TEXT NOT NULL,
///     name TEXT NOT NULL,
///     type TEXT NOT NULL DEFAULT 'paper',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Default portfolio kind when none is given
pub const DEFAULT_PORTFOLIO_TYPE: &str = "paper";

/// Full portfolio record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Unique portfolio ID
    pub id: Uuid,

    /// Owning user
    pub user_id: String,

    /// Display name
    pub name: String,

    /// Portfolio kind ("paper" or "real")
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub portfolio_type: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// The id/name pair embedded in alert listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRef {
    pub id: Uuid,
    pub name: String,
}

/// Input for creating a portfolio
#[derive(Debug, Clone)]
pub struct CreatePortfolio {
    pub user_id: String,
    pub name: String,
    pub portfolio_type: String,
}

impl CreatePortfolio {
    /// A portfolio of the default kind
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            portfolio_type: DEFAULT_PORTFOLIO_TYPE.to_string(),
        }
    }
}

impl Portfolio {
    /// Inserts a new portfolio
    pub async fn create(pool: &PgPool, data: CreatePortfolio) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Portfolio>(
            r#"
            INSERT INTO portfolios (user_id, name, type)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, type, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.name)
        .bind(data.portfolio_type)
        .fetch_one(pool)
        .await
    }

    /// Finds a portfolio by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Portfolio>(
            r#"
            SELECT id, user_id, name, type, created_at, updated_at
            FROM portfolios
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Returns the ids of every portfolio owned by `user_id`
    ///
    /// Only the id column is projected; this is the ownership set alert
    /// listings are filtered by.
    pub async fn ids_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<Uuid>, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM portfolios WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Deletes a portfolio; its alerts cascade
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
