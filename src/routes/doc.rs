use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, SessionStatus},
        orders::{
            DeleteResult, FilterTab, OrderDetails, OrderRow, SetFilterRequest, StatusChange,
            StatusOption, UpdateOrderStatusRequest, WorkbenchView,
        },
    },
    models::{LineItem, Order, OrderStatus, StatusFilter},
    response::{ApiResponse, Meta},
    routes::{admin, auth, health},
    workbench::{ConfirmPrompt, Notice, NoticeKind},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("UUID")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::logout,
        auth::session,
        admin::get_workbench,
        admin::reload_workbench,
        admin::set_filter,
        admin::toggle_details,
        admin::update_order_status,
        admin::delete_order
    ),
    components(
        schemas(
            Order,
            LineItem,
            OrderStatus,
            StatusFilter,
            Notice,
            NoticeKind,
            ConfirmPrompt,
            LoginRequest,
            LoginResponse,
            SessionStatus,
            UpdateOrderStatusRequest,
            SetFilterRequest,
            FilterTab,
            StatusOption,
            OrderRow,
            OrderDetails,
            WorkbenchView,
            StatusChange,
            DeleteResult,
            Meta,
            ApiResponse<WorkbenchView>,
            ApiResponse<StatusChange>,
            ApiResponse<DeleteResult>,
            ApiResponse<LoginResponse>,
            ApiResponse<SessionStatus>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Admin session endpoints"),
        (name = "Admin", description = "Order workbench endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
