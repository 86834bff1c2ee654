//! HTTP handlers

pub mod contact;
pub mod health;
pub mod messages;

pub use health::health;

use crate::error::ApiError;

/// Wrong HTTP method on a known route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Unknown path.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
