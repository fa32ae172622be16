/// Current-user endpoint
///
/// Exposes the placeholder identity so clients can discover which user they
/// act as. There is no login flow behind it.
///
/// # Endpoint
///
/// ```text
/// GET /api/auth/me
/// ```
///
/// # Response
///
/// ```json
/// { "userId": "user_default", "isAuthenticated": true }
/// ```

use aurora_shared::auth::CurrentUser;
use axum::Json;

pub async fn current_user(user: CurrentUser) -> Json<CurrentUser> {
    Json(user)
}
