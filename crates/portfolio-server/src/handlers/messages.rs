//! Admin message handlers
//!
//! All routes here require the `AdminKey` extractor to pass. Deletion is
//! reachable three ways for deployment-shape compatibility: a DELETE with a
//! path id, a DELETE with an `id`/`delete` query parameter, and a GET with
//! `?delete=` (the one-shot-function calling convention).

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminKey;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_core::services::admin;
use portfolio_types::ApiResponse;
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub id: Option<i64>,
    pub delete: Option<i64>,
}

/// GET /api/messages - list everything, or delete when `?delete=` is given.
pub async fn list_or_delete(
    _key: AdminKey,
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Response, ApiError> {
    if let Some(id) = query.delete {
        return delete(&state, id).await.map(|r| Json(r).into_response());
    }

    match admin::list(state.store.as_ref()).await {
        Ok(reply) => Ok(Json(reply).into_response()),
        Err(err) => {
            error!("failed to list messages: {}", err);
            Err(ApiError::reply(&err, admin::list_failure_reply(&err)))
        }
    }
}

/// DELETE /api/messages/:id
pub async fn delete_by_path(
    _key: AdminKey,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, ApiError> {
    delete(&state, id).await.map(Json)
}

/// DELETE /api/messages?id= (or ?delete=)
pub async fn delete_by_query(
    _key: AdminKey,
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<ApiResponse>, ApiError> {
    // An id-less DELETE falls through the method gate, as in the one-shot
    // function shape.
    let id = query
        .id
        .or(query.delete)
        .ok_or_else(ApiError::method_not_allowed)?;
    delete(&state, id).await.map(Json)
}

async fn delete(state: &AppState, id: i64) -> Result<ApiResponse, ApiError> {
    match admin::delete(state.store.as_ref(), id).await {
        Ok(reply) => Ok(reply),
        Err(err) => {
            error!("failed to delete message {}: {}", id, err);
            Err(ApiError::reply(&err, admin::delete_failure_reply(&err)))
        }
    }
}
