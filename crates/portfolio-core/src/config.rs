//! Configuration loaded from the environment at startup.
//!
//! The backend is a deployment-time choice: `MESSAGE_BACKEND` selects which
//! store implementation is constructed, and the handlers never branch on it
//! again. The admin credential is required - there is no built-in default
//! secret to fall back to.

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub admin_api_key: String,
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Embedded SQLite database file.
    Sqlite { database_path: String },
    /// Hosted REST-over-SQL service (PostgREST-style), table pre-provisioned.
    Supabase { url: String, api_key: String },
}

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_DATABASE_PATH: &str = "data/messages.db";

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. `from_env` passes the real
    /// process environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let admin_api_key = lookup("ADMIN_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("ADMIN_API_KEY must be set".to_string()))?;

        let backend = lookup("MESSAGE_BACKEND").unwrap_or_else(|| "sqlite".to_string());
        let store = match backend.as_str() {
            "sqlite" => StoreConfig::Sqlite {
                database_path: lookup("DATABASE_PATH")
                    .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            },
            "supabase" => StoreConfig::Supabase {
                url: lookup("SUPABASE_URL")
                    .ok_or_else(|| Error::Config("SUPABASE_URL must be set".to_string()))?,
                api_key: lookup("SUPABASE_ANON_KEY")
                    .ok_or_else(|| Error::Config("SUPABASE_ANON_KEY must be set".to_string()))?,
            },
            other => {
                return Err(Error::Config(format!(
                    "unknown MESSAGE_BACKEND '{}' (expected 'sqlite' or 'supabase')",
                    other
                )))
            }
        };

        Ok(Self {
            bind_address,
            admin_api_key,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_to_sqlite() {
        let config = Config::from_lookup(lookup(&[("ADMIN_API_KEY", "secret")])).unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.admin_api_key, "secret");
        match config.store {
            StoreConfig::Sqlite { database_path } => {
                assert_eq!(database_path, DEFAULT_DATABASE_PATH)
            }
            other => panic!("expected sqlite config, got {:?}", other),
        }
    }

    #[test]
    fn admin_key_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup(&[("ADMIN_API_KEY", "")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn supabase_backend() {
        let config = Config::from_lookup(lookup(&[
            ("ADMIN_API_KEY", "secret"),
            ("MESSAGE_BACKEND", "supabase"),
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon-key"),
        ]))
        .unwrap();

        match config.store {
            StoreConfig::Supabase { url, api_key } => {
                assert_eq!(url, "https://example.supabase.co");
                assert_eq!(api_key, "anon-key");
            }
            other => panic!("expected supabase config, got {:?}", other),
        }
    }

    #[test]
    fn supabase_backend_requires_url_and_key() {
        let err = Config::from_lookup(lookup(&[
            ("ADMIN_API_KEY", "secret"),
            ("MESSAGE_BACKEND", "supabase"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn unknown_backend_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("ADMIN_API_KEY", "secret"),
            ("MESSAGE_BACKEND", "mongodb"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
