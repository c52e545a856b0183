use serde::Serialize;
use utoipa::ToSchema;

use crate::workbench::Notice;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    /// Orders held locally.
    pub total: Option<usize>,
    /// Orders left after the status filter.
    pub visible: Option<usize>,
    /// Notification raised by the action, if any.
    pub notice: Option<Notice>,
}

impl Meta {
    pub fn counts(total: usize, visible: usize) -> Self {
        Self {
            total: Some(total),
            visible: Some(visible),
            notice: None,
        }
    }

    pub fn notice(notice: Option<Notice>) -> Self {
        Self {
            notice,
            ..Self::empty()
        }
    }

    pub fn empty() -> Self {
        Self {
            total: None,
            visible: None,
            notice: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
