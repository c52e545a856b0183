//! Session gate for the admin area.
//!
//! A session is an opaque token addressing a small key/value flag store.
//! Login writes `isLoggedIn = "true"` under a fresh token; the guard only
//! reads that flag. There is no expiry, lockout or attempt counting.

use std::collections::HashMap;
use std::env;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const LOGGED_IN_KEY: &str = "isLoggedIn";

pub type SessionToken = Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    /// Both values must be present and non-blank.
    pub fn from_values(email: Option<String>, password: Option<String>) -> Option<Self> {
        let email = email.filter(|v| !v.trim().is_empty())?;
        let password = password.filter(|v| !v.trim().is_empty())?;
        Some(Self { email, password })
    }
}

/// Where the configured admin pair comes from.
pub trait CredentialSource: Send + Sync + 'static {
    fn admin_credentials(&self) -> Option<AdminCredentials>;
}

/// Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD` on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn admin_credentials(&self) -> Option<AdminCredentials> {
        AdminCredentials::from_values(env::var("ADMIN_EMAIL").ok(), env::var("ADMIN_PASSWORD").ok())
    }
}

#[derive(Debug, Clone)]
pub struct StaticCredentials(pub AdminCredentials);

impl CredentialSource for StaticCredentials {
    fn admin_credentials(&self) -> Option<AdminCredentials> {
        Some(self.0.clone())
    }
}

#[async_trait]
pub trait SessionProvider: Send + Sync + 'static {
    async fn login(&self, email: &str, password: &str) -> AppResult<SessionToken>;

    async fn is_authenticated(&self, token: &SessionToken) -> bool;

    async fn logout(&self, token: &SessionToken);
}

/// Per-session string flags.
#[derive(Debug, Default)]
pub struct FlagStore {
    entries: RwLock<HashMap<SessionToken, HashMap<String, String>>>,
}

impl FlagStore {
    pub async fn get(&self, token: &SessionToken, key: &str) -> Option<String> {
        self.entries
            .read()
            .await
            .get(token)
            .and_then(|flags| flags.get(key).cloned())
    }

    pub async fn set(&self, token: SessionToken, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .entry(token)
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub async fn remove(&self, token: &SessionToken, key: &str) {
        let mut entries = self.entries.write().await;
        if let Some(flags) = entries.get_mut(token) {
            flags.remove(key);
            if flags.is_empty() {
                entries.remove(token);
            }
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

pub struct FlagSessionProvider {
    credentials: Box<dyn CredentialSource>,
    flags: FlagStore,
}

impl FlagSessionProvider {
    pub fn new(credentials: impl CredentialSource) -> Self {
        Self {
            credentials: Box::new(credentials),
            flags: FlagStore::default(),
        }
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    /// Both configured values must be present and match exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> AppResult<()> {
        match self.credentials.admin_credentials() {
            Some(admin) if admin.email == email && admin.password == password => Ok(()),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}

#[async_trait]
impl SessionProvider for FlagSessionProvider {
    async fn login(&self, email: &str, password: &str) -> AppResult<SessionToken> {
        self.authenticate(email, password)?;
        let token = Uuid::new_v4();
        self.flags.set(token, LOGGED_IN_KEY, "true").await;
        Ok(token)
    }

    async fn is_authenticated(&self, token: &SessionToken) -> bool {
        self.flags.get(token, LOGGED_IN_KEY).await.as_deref() == Some("true")
    }

    async fn logout(&self, token: &SessionToken) {
        self.flags.remove(token, LOGGED_IN_KEY).await;
    }
}
