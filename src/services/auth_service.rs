use crate::{
    dto::auth::{LoginRequest, LoginResponse, SessionStatus},
    error::AppResult,
    middleware::auth::AdminSession,
    response::{ApiResponse, Meta},
    session::SessionToken,
    state::AppState,
};

pub const DASHBOARD_PATH: &str = "/api/admin/workbench";

pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;

    let token = match state.sessions.login(&email, &password).await {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!("admin login rejected");
            return Err(err);
        }
    };
    tracing::info!("admin logged in");

    let resp = LoginResponse {
        token: format!("Bearer {}", token),
        redirect: DASHBOARD_PATH.to_string(),
    };

    Ok(ApiResponse::success("Logged in", resp, Some(Meta::empty())))
}

pub async fn logout(state: &AppState, session: AdminSession) -> AppResult<ApiResponse<SessionStatus>> {
    state.sessions.logout(&session.token).await;
    state.workbenches.remove(&session.token).await;
    tracing::info!("admin logged out");

    Ok(ApiResponse::success(
        "Logged out",
        SessionStatus {
            authenticated: false,
        },
        Some(Meta::empty()),
    ))
}

pub async fn session_status(state: &AppState, token: Option<SessionToken>) -> ApiResponse<SessionStatus> {
    let authenticated = match token {
        Some(token) => state.sessions.is_authenticated(&token).await,
        None => false,
    };
    ApiResponse::success(
        "Session",
        SessionStatus { authenticated },
        Some(Meta::empty()),
    )
}
