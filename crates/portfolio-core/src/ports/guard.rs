//! Admin access guard
//!
//! A capability check, not a session: stateless, no expiry, no per-admin
//! identity. The trait is the seam where a stronger scheme (signed tokens,
//! per-admin credentials) could replace the equality check without touching
//! any handler.

use crate::error::{Error, Result};

pub trait AdminGuard: Send + Sync {
    /// Check the credential the caller supplied, if any. Callers learn
    /// nothing beyond pass/fail.
    fn authorize(&self, supplied: Option<&str>) -> Result<()>;
}

/// The production guard: exact string equality against a single shared
/// secret sourced from configuration at startup.
pub struct SharedSecretGuard {
    secret: String,
}

impl SharedSecretGuard {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl AdminGuard for SharedSecretGuard {
    fn authorize(&self, supplied: Option<&str>) -> Result<()> {
        match supplied {
            Some(value) if value == self.secret => Ok(()),
            Some(_) => {
                tracing::warn!("admin request rejected: invalid API key");
                Err(Error::Unauthorized)
            }
            None => {
                tracing::warn!("admin request rejected: no API key supplied");
                Err(Error::Unauthorized)
            }
        }
    }
}
