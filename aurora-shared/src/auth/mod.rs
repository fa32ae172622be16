/// Placeholder user identity
///
/// Every request is treated as coming from the single built-in user
/// [`DEFAULT_USER_ID`]. There is no session, token, or credential check:
/// this is not a security boundary, only the seam where real
/// authentication will plug in.
///
/// # Example
///
/// ```
/// use aurora_shared::auth::CurrentUser;
///
/// async fn whoami(user: CurrentUser) -> String {
///     user.user_id
/// }
/// ```

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Identity every request resolves to
pub const DEFAULT_USER_ID: &str = "user_default";

/// The user a request acts on behalf of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: String,
    pub is_authenticated: bool,
}

impl CurrentUser {
    /// The fixed, always-authenticated default user
    pub fn placeholder() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            is_authenticated: true,
        }
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::placeholder())
    }
}
