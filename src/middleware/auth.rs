use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header},
};
use uuid::Uuid;

use crate::{error::AppError, session::SessionToken, state::AppState};

/// A request carrying a session token whose `isLoggedIn` flag is set.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    pub token: SessionToken,
}

pub fn bearer_token(headers: &HeaderMap) -> Result<SessionToken, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?;

    let auth_str = auth_header.to_str().map_err(|_| AppError::Unauthorized)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?
        .trim();

    Uuid::parse_str(token).map_err(|_| AppError::Unauthorized)
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        if !state.sessions.is_authenticated(&token).await {
            return Err(AppError::Unauthorized);
        }

        Ok(AdminSession { token })
    }
}
