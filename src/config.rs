use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sanity,
    Memory,
}

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
    /// Overrides `https://{project_id}.api.sanity.io`, e.g. for a proxy.
    pub api_host: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub sanity: Option<SanityConfig>,
    pub memory_seed_file: Option<String>,
}

impl AppConfig {
    /// Admin credentials are deliberately absent here; they are read from
    /// the environment on every login attempt.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let store = match env::var("ORDER_STORE").as_deref() {
            Ok("memory") => StoreBackend::Memory,
            Ok("sanity") | Err(_) => StoreBackend::Sanity,
            Ok(other) => anyhow::bail!("unknown ORDER_STORE `{other}`, expected sanity or memory"),
        };

        let sanity = match store {
            StoreBackend::Sanity => Some(SanityConfig::from_env()?),
            StoreBackend::Memory => None,
        };

        Ok(Self {
            host,
            port,
            store,
            sanity,
            memory_seed_file: non_empty("MEMORY_SEED_FILE"),
        })
    }
}

impl SanityConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let project_id =
            get("SANITY_PROJECT_ID").ok_or_else(|| anyhow::anyhow!("SANITY_PROJECT_ID is not set"))?;
        let dataset = get("SANITY_DATASET").unwrap_or_else(|| "production".to_string());
        let api_version = get("SANITY_API_VERSION").unwrap_or_else(|| "2025-01-13".to_string());
        let timeout_secs = get("STORE_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            project_id,
            dataset,
            api_version,
            token: get("SANITY_API_TOKEN"),
            api_host: get("SANITY_API_HOST"),
            timeout_secs,
        })
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn blank_project_id_is_rejected() {
        let err = SanityConfig::from_lookup(lookup(&[("SANITY_PROJECT_ID", "")]))
            .expect_err("blank project id");
        assert_eq!(err.to_string(), "SANITY_PROJECT_ID is not set");

        assert!(SanityConfig::from_lookup(lookup(&[("SANITY_PROJECT_ID", "   ")])).is_err());
        assert!(SanityConfig::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn blank_optional_values_fall_back_to_defaults() {
        let config = SanityConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", ""),
            ("SANITY_API_TOKEN", ""),
            ("SANITY_API_HOST", " "),
            ("STORE_TIMEOUT_SECS", "soon"),
        ]))
        .expect("project id is set");

        assert_eq!(config.project_id, "abc123");
        assert_eq!(config.dataset, "production");
        assert_eq!(config.api_version, "2025-01-13");
        assert_eq!(config.token, None);
        assert_eq!(config.api_host, None);
        assert_eq!(config.timeout_secs, 30);
    }
}
