use serde::Serialize;
use utoipa::ToSchema;

use crate::models::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

/// A notification for the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, text: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    /// Confirmation after a status patch; moving back to pending is silent.
    pub fn for_status(status: OrderStatus) -> Option<Self> {
        match status {
            OrderStatus::Dispatch => Some(Self::new(
                NoticeKind::Success,
                "Dispatch",
                "The order is now dispatched.",
            )),
            OrderStatus::Success => Some(Self::new(
                NoticeKind::Success,
                "Success",
                "The order has been completed.",
            )),
            OrderStatus::Pending => None,
        }
    }

    pub fn deleted() -> Self {
        Self::new(NoticeKind::Success, "Deleted!", "Your order has been deleted.")
    }

    pub fn status_update_failed() -> Self {
        Self::new(
            NoticeKind::Error,
            "Error!",
            "Something went wrong while updating the status.",
        )
    }

    pub fn delete_failed() -> Self {
        Self::new(
            NoticeKind::Error,
            "Error!",
            "Something went wrong while deleting.",
        )
    }
}

/// Destructive-action warning shown before a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ConfirmPrompt {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    pub fn delete_order() -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: "Are you sure?".into(),
            text: "You won't be able to revert this!".into(),
            confirm_label: "Yes, delete it!".into(),
        }
    }
}

/// Answers a confirmation prompt.
pub trait Confirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

impl Confirm for bool {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        *self
    }
}
