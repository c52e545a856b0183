//! Order workbench: the admin's local copy of the remote order list and the
//! mutation flows that keep it in step with the store.
//!
//! Local state changes only after the store acknowledges a mutation. The
//! state lock is never held while a remote call is outstanding, so requests
//! for different orders may interleave and the last response to arrive wins.
//! Requests that arrive while a workbench's first fetch is in flight wait for
//! it to finish.

use std::ops::Deref;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{OnceCell, RwLock};

use crate::{
    models::OrderStatus,
    store::{OrderQuery, OrderStore, PatchExt, StoreError},
};

pub mod notice;
pub mod state;

pub use notice::{Confirm, ConfirmPrompt, Notice, NoticeKind};
pub use state::{Action, WorkbenchState, visible};

/// One session's order list plus the guard for its initial fetch.
#[derive(Debug, Default)]
pub struct Workbench {
    state: RwLock<WorkbenchState>,
    first_fetch: OnceCell<()>,
}

impl Deref for Workbench {
    type Target = RwLock<WorkbenchState>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

pub type SharedWorkbench = Arc<Workbench>;

#[derive(Debug, Error)]
pub enum WorkbenchError {
    #[error("Something went wrong while updating the status.")]
    StatusUpdate {
        id: String,
        #[source]
        source: StoreError,
    },

    #[error("Something went wrong while deleting.")]
    Delete {
        id: String,
        #[source]
        source: StoreError,
    },
}

impl WorkbenchError {
    pub fn notice(&self) -> Notice {
        match self {
            WorkbenchError::StatusUpdate { .. } => Notice::status_update_failed(),
            WorkbenchError::Delete { .. } => Notice::delete_failed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The admin declined the prompt; nothing was sent to the store.
    Cancelled(ConfirmPrompt),
    Deleted(Notice),
}

/// Fetch every order and replace the local list. On failure the list is left
/// as it was.
pub async fn load(store: &dyn OrderStore, workbench: &RwLock<WorkbenchState>) -> Result<usize, StoreError> {
    let result = store.query(&OrderQuery::ALL_ORDERS).await;

    let mut state = workbench.write().await;
    state.mounted = true;
    match result {
        Ok(orders) => {
            let count = orders.len();
            state.apply(Action::Loaded(orders));
            tracing::info!(count, "orders loaded");
            Ok(count)
        }
        Err(err) => {
            tracing::error!(error = %err, "error fetching orders");
            Err(err)
        }
    }
}

/// Run the initial fetch once per workbench. Concurrent callers wait for the
/// same fetch. Failures are only logged.
pub async fn mount(store: &dyn OrderStore, workbench: &Workbench) {
    workbench
        .first_fetch
        .get_or_init(|| async {
            let _ = load(store, workbench).await;
        })
        .await;
}

pub async fn change_status(
    store: &dyn OrderStore,
    workbench: &RwLock<WorkbenchState>,
    id: &str,
    status: OrderStatus,
) -> Result<Option<Notice>, WorkbenchError> {
    store
        .patch(id)
        .set("status", status.as_str())
        .commit()
        .await
        .map_err(|source| {
            tracing::error!(error = %source, order_id = %id, "error updating order status");
            WorkbenchError::StatusUpdate {
                id: id.to_string(),
                source,
            }
        })?;

    workbench.write().await.apply(Action::StatusCommitted {
        id: id.to_string(),
        status,
    });
    tracing::info!(order_id = %id, %status, "order status updated");

    Ok(Notice::for_status(status))
}

pub async fn delete_order(
    store: &dyn OrderStore,
    workbench: &RwLock<WorkbenchState>,
    id: &str,
    confirm: &impl Confirm,
) -> Result<DeleteOutcome, WorkbenchError> {
    let prompt = ConfirmPrompt::delete_order();
    if !confirm.confirm(&prompt) {
        tracing::debug!(order_id = %id, "delete cancelled");
        return Ok(DeleteOutcome::Cancelled(prompt));
    }

    store.delete(id).await.map_err(|source| {
        tracing::error!(error = %source, order_id = %id, "error deleting order");
        WorkbenchError::Delete {
            id: id.to_string(),
            source,
        }
    })?;

    workbench.write().await.apply(Action::Removed(id.to_string()));
    tracing::info!(order_id = %id, "order deleted");

    Ok(DeleteOutcome::Deleted(Notice::deleted()))
}
