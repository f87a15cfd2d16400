//! `CurrentUser` extractor — pulls the JWT from the Authorization header,
//! validates it, and loads the acting user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use libris_core::error::AppError;
use libris_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user injected into handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Consumes the extractor and returns the inner user.
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        // Decode and validate JWT
        let claims = state.token_decoder.resolve(token)?;

        // Tokens are stateless; the subject must still resolve to a stored user
        let user = state
            .user_repo
            .find_by_email(claims.subject())
            .await?
            .ok_or_else(|| AppError::authentication("User not found"))?;

        Ok(CurrentUser(user))
    }
}
