use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    response::{ApiResponse, Meta},
    workbench::{Notice, WorkbenchError},
};

pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    Unauthorized,

    #[error(transparent)]
    Workbench(#[from] WorkbenchError),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    login: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Workbench(_) => StatusCode::BAD_GATEWAY,
        };

        let notice = match &self {
            AppError::Workbench(err) => Some(err.notice()),
            _ => None,
        };
        let login = matches!(self, AppError::Unauthorized).then_some(LOGIN_PATH);

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData {
                error: self.to_string(),
                notice,
                login,
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
