//! Remote order store: the hosted content backend that owns every order
//! record. This crate only reads, patches and deletes through it.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::Order;

pub mod memory;
pub mod sanity;

pub use memory::MemoryStore;
pub use sanity::SanityClient;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store responded {status}: {body}")]
    Server { status: u16, body: String },

    #[error("could not decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("document `{0}` not found")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),
}

/// Filter expression plus projection for a document query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuery {
    pub filter: &'static str,
    pub projection: &'static str,
}

impl OrderQuery {
    /// Every `order` document with its scalar fields and dereferenced cart items.
    pub const ALL_ORDERS: OrderQuery = OrderQuery {
        filter: r#"_type == "order""#,
        projection: "{
          _id,
          firstName,
          lastName,
          phone,
          email,
          address,
          city,
          zipCode,
          total,
          discount,
          orderDate,
          status,
          cartItems[]->{
            productName,
            image
          }
        }",
    };

    pub fn to_groq(&self) -> String {
        format!("*[{}]{}", self.filter, self.projection)
    }
}

/// Partial update of named fields on one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patch {
    pub id: String,
    pub set: Map<String, Value>,
}

#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    /// Short name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    async fn query(&self, query: &OrderQuery) -> Result<Vec<Order>, StoreError>;

    /// Apply a patch as a single atomic mutation.
    async fn commit_patch(&self, patch: Patch) -> Result<(), StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Builder-style patching: `store.patch(id).set(..).commit()`.
pub trait PatchExt: OrderStore {
    fn patch(&self, id: impl Into<String>) -> PatchBuilder<'_, Self> {
        PatchBuilder {
            store: self,
            patch: Patch {
                id: id.into(),
                set: Map::new(),
            },
        }
    }
}

impl<S: OrderStore + ?Sized> PatchExt for S {}

pub struct PatchBuilder<'a, S: OrderStore + ?Sized> {
    store: &'a S,
    patch: Patch,
}

impl<S: OrderStore + ?Sized> PatchBuilder<'_, S> {
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.patch.set.insert(field.to_string(), value.into());
        self
    }

    pub async fn commit(self) -> Result<(), StoreError> {
        self.store.commit_patch(self.patch).await
    }
}
