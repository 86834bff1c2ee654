//! Admin credential extractor for protected routes

use crate::app::AppState;
use crate::error::ApiError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use std::collections::HashMap;

/// Extracting this in a handler runs the access guard first; the handler
/// body only executes for an authorized caller.
///
/// The credential travels in the `x-api-key` header, with the `key` query
/// parameter as a fallback. The header wins when both are present.
pub struct AdminKey;

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-api-key")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let query_key = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.get("key").cloned());

        let supplied = header.or(query_key);

        state
            .guard
            .authorize(supplied.as_deref())
            .map_err(|_| ApiError::unauthorized())?;

        Ok(AdminKey)
    }
}
