use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    session::{EnvCredentials, FlagSessionProvider, SessionProvider, SessionToken},
    store::OrderStore,
    workbench::SharedWorkbench,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
    pub sessions: Arc<dyn SessionProvider>,
    pub workbenches: WorkbenchRegistry,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            store,
            sessions,
            workbenches: WorkbenchRegistry::default(),
        }
    }

    /// Sessions checked against `ADMIN_EMAIL`/`ADMIN_PASSWORD`.
    pub fn with_env_credentials(store: Arc<dyn OrderStore>) -> Self {
        Self::new(store, Arc::new(FlagSessionProvider::new(EnvCredentials)))
    }
}

/// One workbench per logged-in session.
#[derive(Clone, Default)]
pub struct WorkbenchRegistry {
    inner: Arc<RwLock<HashMap<SessionToken, SharedWorkbench>>>,
}

impl WorkbenchRegistry {
    pub async fn get_or_create(&self, token: SessionToken) -> SharedWorkbench {
        if let Some(existing) = self.inner.read().await.get(&token) {
            return existing.clone();
        }
        self.inner.write().await.entry(token).or_default().clone()
    }

    pub async fn remove(&self, token: &SessionToken) {
        self.inner.write().await.remove(token);
    }
}
