use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginRequest, LoginResponse, SessionStatus},
    error::AppResult,
    middleware::auth::{AdminSession, bearer_token},
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login admin", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = auth_service::login(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Clear the session flag", body = ApiResponse<SessionStatus>),
        (status = 401, description = "Not logged in")
    ),
    security(("session_token" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    session: AdminSession,
) -> AppResult<Json<ApiResponse<SessionStatus>>> {
    let resp = auth_service::logout(&state, session).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Whether the token is logged in", body = ApiResponse<SessionStatus>)
    ),
    tag = "Auth"
)]
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<ApiResponse<SessionStatus>> {
    let token = bearer_token(&headers).ok();
    Json(auth_service::session_status(&state, token).await)
}
