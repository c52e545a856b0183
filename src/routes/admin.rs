use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

use crate::{
    dto::orders::{DeleteResult, SetFilterRequest, StatusChange, UpdateOrderStatusRequest, WorkbenchView},
    error::AppResult,
    middleware::auth::AdminSession,
    response::ApiResponse,
    routes::params::DeleteQuery,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workbench", get(get_workbench))
        .route("/workbench/reload", post(reload_workbench))
        .route("/workbench/filter", put(set_filter))
        .route("/workbench/orders/{id}/toggle", post(toggle_details))
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/orders/{id}", delete(delete_order))
}

#[utoipa::path(
    get,
    path = "/api/admin/workbench",
    responses(
        (status = 200, description = "Order table for the current filter; the first call fetches from the store", body = ApiResponse<WorkbenchView>),
        (status = 401, description = "Not logged in"),
    ),
    security(("session_token" = [])),
    tag = "Admin"
)]
pub async fn get_workbench(
    State(state): State<AppState>,
    session: AdminSession,
) -> AppResult<Json<ApiResponse<WorkbenchView>>> {
    let resp = admin_service::get_workbench(&state, &session).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/workbench/reload",
    responses(
        (status = 200, description = "Refetch all orders", body = ApiResponse<WorkbenchView>),
        (status = 401, description = "Not logged in"),
    ),
    security(("session_token" = [])),
    tag = "Admin"
)]
pub async fn reload_workbench(
    State(state): State<AppState>,
    session: AdminSession,
) -> AppResult<Json<ApiResponse<WorkbenchView>>> {
    let resp = admin_service::reload(&state, &session).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/workbench/filter",
    request_body = SetFilterRequest,
    responses(
        (status = 200, description = "Select a status tab", body = ApiResponse<WorkbenchView>),
        (status = 401, description = "Not logged in"),
    ),
    security(("session_token" = [])),
    tag = "Admin"
)]
pub async fn set_filter(
    State(state): State<AppState>,
    session: AdminSession,
    Json(payload): Json<SetFilterRequest>,
) -> AppResult<Json<ApiResponse<WorkbenchView>>> {
    let resp = admin_service::set_filter(&state, &session, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/workbench/orders/{id}/toggle",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Expand or collapse an order's details", body = ApiResponse<WorkbenchView>),
        (status = 401, description = "Not logged in"),
    ),
    security(("session_token" = [])),
    tag = "Admin"
)]
pub async fn toggle_details(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<WorkbenchView>>> {
    let resp = admin_service::toggle_details(&state, &session, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Update order status", body = ApiResponse<StatusChange>),
        (status = 401, description = "Not logged in"),
        (status = 422, description = "Unknown status value"),
        (status = 502, description = "Store rejected the patch"),
    ),
    security(("session_token" = [])),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<StatusChange>>> {
    let resp = admin_service::update_order_status(&state, &session, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID"),
        DeleteQuery
    ),
    responses(
        (status = 200, description = "Order deleted", body = ApiResponse<DeleteResult>),
        (status = 409, description = "Not confirmed; carries the prompt", body = ApiResponse<DeleteResult>),
        (status = 401, description = "Not logged in"),
        (status = 502, description = "Store rejected the delete"),
    ),
    security(("session_token" = [])),
    tag = "Admin"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> AppResult<(StatusCode, Json<ApiResponse<DeleteResult>>)> {
    let (deleted, resp) =
        admin_service::delete_order(&state, &session, id, query.confirmed()).await?;
    let status = if deleted {
        StatusCode::OK
    } else {
        StatusCode::CONFLICT
    };
    Ok((status, Json(resp)))
}
