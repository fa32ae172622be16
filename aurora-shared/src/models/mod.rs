/// Database models for Aurora
///
/// # Models
///
/// - `portfolio`: User-owned portfolios that alerts are scoped to
/// - `alert`: Portfolio alerts with their acknowledgment state
///
/// # Example
///
/// ```no_run
/// use aurora_shared::models::portfolio::{CreatePortfolio, Portfolio};
/// use aurora_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let portfolio = Portfolio::create(&pool, CreatePortfolio {
///     user_id: "user_default".to_string(),
///     name: "Portfolio Paper".to_string(),
///     portfolio_type: "paper".to_string(),
/// })
/// .await?;
///
/// let owned = Portfolio::ids_for_user(&pool, "user_default").await?;
/// assert!(owned.contains(&portfolio.id));
/// # Ok(())
/// # }
/// ```

pub mod alert;
pub mod portfolio;
