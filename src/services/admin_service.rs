use crate::{
    dto::orders::{DeleteResult, SetFilterRequest, StatusChange, UpdateOrderStatusRequest, WorkbenchView},
    error::AppResult,
    middleware::auth::AdminSession,
    response::{ApiResponse, Meta},
    state::AppState,
    workbench::{self, Action, DeleteOutcome, SharedWorkbench},
};

/// The session's workbench, fetched from the store on first use.
async fn mounted_workbench(state: &AppState, session: &AdminSession) -> SharedWorkbench {
    let workbench = state.workbenches.get_or_create(session.token).await;
    workbench::mount(state.store.as_ref(), &workbench).await;
    workbench
}

async fn render(workbench: &SharedWorkbench, message: &str) -> ApiResponse<WorkbenchView> {
    let current = workbench.read().await;
    let view = WorkbenchView::render(&current);
    let meta = Meta::counts(view.total_orders, view.visible_count);
    ApiResponse::success(message, view, Some(meta))
}

pub async fn get_workbench(
    state: &AppState,
    session: &AdminSession,
) -> AppResult<ApiResponse<WorkbenchView>> {
    let workbench = mounted_workbench(state, session).await;
    Ok(render(&workbench, "Orders").await)
}

/// Fetch the order list again. A failed fetch keeps the previous list.
pub async fn reload(
    state: &AppState,
    session: &AdminSession,
) -> AppResult<ApiResponse<WorkbenchView>> {
    let workbench = state.workbenches.get_or_create(session.token).await;
    let _ = workbench::load(state.store.as_ref(), &workbench).await;
    Ok(render(&workbench, "Orders").await)
}

pub async fn set_filter(
    state: &AppState,
    session: &AdminSession,
    payload: SetFilterRequest,
) -> AppResult<ApiResponse<WorkbenchView>> {
    let workbench = mounted_workbench(state, session).await;
    workbench.write().await.apply(Action::SetFilter(payload.filter));
    Ok(render(&workbench, "Filter applied").await)
}

pub async fn toggle_details(
    state: &AppState,
    session: &AdminSession,
    id: String,
) -> AppResult<ApiResponse<WorkbenchView>> {
    let workbench = mounted_workbench(state, session).await;
    workbench.write().await.apply(Action::ToggleDetail(id));
    Ok(render(&workbench, "Orders").await)
}

pub async fn update_order_status(
    state: &AppState,
    session: &AdminSession,
    id: String,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<StatusChange>> {
    let workbench = mounted_workbench(state, session).await;
    let notice =
        workbench::change_status(state.store.as_ref(), &workbench, &id, payload.status).await?;

    Ok(ApiResponse::success(
        "Order updated",
        StatusChange {
            id,
            status: payload.status,
            notice: notice.clone(),
        },
        Some(Meta::notice(notice)),
    ))
}

pub async fn delete_order(
    state: &AppState,
    session: &AdminSession,
    id: String,
    confirmed: bool,
) -> AppResult<(bool, ApiResponse<DeleteResult>)> {
    let workbench = mounted_workbench(state, session).await;
    let outcome = workbench::delete_order(state.store.as_ref(), &workbench, &id, &confirmed).await?;

    let resp = match outcome {
        DeleteOutcome::Cancelled(prompt) => (
            false,
            ApiResponse::success(
                "Confirmation required",
                DeleteResult {
                    id,
                    deleted: false,
                    notice: None,
                    prompt: Some(prompt),
                },
                Some(Meta::empty()),
            ),
        ),
        DeleteOutcome::Deleted(notice) => (
            true,
            ApiResponse::success(
                "Order deleted",
                DeleteResult {
                    id,
                    deleted: true,
                    notice: Some(notice.clone()),
                    prompt: None,
                },
                Some(Meta::notice(Some(notice))),
            ),
        ),
    };
    Ok(resp)
}
