//! Contact form handler

use crate::app::AppState;
use crate::error::ApiError;
use axum::extract::State;
use axum::Json;
use portfolio_core::services::intake;
use portfolio_types::{ApiResponse, NewMessage};
use tracing::error;

/// POST /api/contact
///
/// A missing or malformed body is treated as an empty submission, which the
/// presence check then rejects - same behavior as fields arriving blank.
pub async fn submit(
    State(state): State<AppState>,
    body: Option<Json<NewMessage>>,
) -> Result<Json<ApiResponse>, ApiError> {
    let new = body.map(|Json(b)| b).unwrap_or_default();

    match intake::submit(state.store.as_ref(), &new).await {
        Ok(reply) => Ok(Json(reply)),
        Err(err) => {
            if err.is_store_failure() {
                error!("contact submission failed: {}", err);
            }
            Err(ApiError::reply(&err, intake::failure_reply(&err)))
        }
    }
}
