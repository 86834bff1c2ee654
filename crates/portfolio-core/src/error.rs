//! Error types for the contact backend

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required submission field is absent or blank.
    #[error("All fields are required.")]
    Validation,

    /// Missing or mismatching admin credential.
    #[error("Unauthorized. Invalid API key.")]
    Unauthorized,

    /// Wrong HTTP method on a known route.
    #[error("Method not allowed.")]
    MethodNotAllowed,

    #[error("Store read failed: {0}")]
    StoreRead(String),

    #[error("Store write failed: {0}")]
    StoreWrite(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// HTTP status mirroring the taxonomy. Kept here so both transport
    /// shapes map identically.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Validation => 400,
            Error::Unauthorized => 401,
            Error::MethodNotAllowed => 405,
            Error::StoreRead(_) | Error::StoreWrite(_) | Error::Server(_) => 500,
            Error::Config(_) => 500,
        }
    }

    /// Whether the cause lives in the storage medium; such failures are
    /// surfaced to callers as a per-operation generic message, with the
    /// detail logged server-side only.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            Error::StoreRead(_) | Error::StoreWrite(_) | Error::Server(_)
        )
    }
}
