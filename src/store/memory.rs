//! In-process order store for local runs and tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use super::{OrderQuery, OrderStore, Patch, StoreError};
use crate::models::Order;

#[derive(Default)]
pub struct MemoryStore {
    orders: Mutex<Vec<Order>>,
    patches: Mutex<Vec<Patch>>,
    queries: AtomicUsize,
    deletes: AtomicUsize,
    fail_query: AtomicBool,
    fail_patch: AtomicBool,
    fail_delete: AtomicBool,
}

impl MemoryStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
            ..Self::default()
        }
    }

    /// Load documents from a JSON array in the query projection's shape.
    pub async fn from_seed_file(path: &str) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        let orders: Vec<Order> = serde_json::from_str(&raw)?;
        tracing::info!(count = orders.len(), path, "seeded memory store");
        Ok(Self::new(orders))
    }

    pub fn fail_queries(&self, fail: bool) {
        self.fail_query.store(fail, Ordering::SeqCst);
    }

    pub fn fail_patches(&self, fail: bool) {
        self.fail_patch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Current remote truth.
    pub fn orders(&self) -> Vec<Order> {
        lock(&self.orders).clone()
    }

    /// Every patch committed so far, including failed ones.
    pub fn patches(&self) -> Vec<Patch> {
        lock(&self.patches).clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn injected(operation: &str) -> StoreError {
    StoreError::Unavailable(format!("{operation} rejected by memory store"))
}

#[async_trait]
impl OrderStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn query(&self, _query: &OrderQuery) -> Result<Vec<Order>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_query.load(Ordering::SeqCst) {
            return Err(injected("query"));
        }
        Ok(self.orders())
    }

    async fn commit_patch(&self, patch: Patch) -> Result<(), StoreError> {
        lock(&self.patches).push(patch.clone());
        if self.fail_patch.load(Ordering::SeqCst) {
            return Err(injected("patch"));
        }

        let mut orders = lock(&self.orders);
        let order = orders
            .iter_mut()
            .find(|o| o.id == patch.id)
            .ok_or_else(|| StoreError::NotFound(patch.id.clone()))?;

        // Round-trip through JSON so any projected field can be patched.
        let mut doc = serde_json::to_value(&*order)?;
        if let Value::Object(fields) = &mut doc {
            for (key, value) in patch.set {
                fields.insert(key, value);
            }
        }
        *order = serde_json::from_value(doc)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(injected("delete"));
        }
        // Deleting a missing document is a no-op, as on the hosted store.
        lock(&self.orders).retain(|o| o.id != id);
        Ok(())
    }
}
