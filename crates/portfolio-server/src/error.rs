//! JSON error replies
//!
//! Every failure leaves the server as `{success: false, message}` with a
//! status mirroring the error taxonomy; internals stay in the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_core::Error;
use portfolio_types::ApiResponse;

pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiResponse,
}

impl ApiError {
    /// Pair a domain error's status with the (already detail-free) reply
    /// body chosen by the service layer.
    pub fn reply(err: &Error, body: ApiResponse) -> Self {
        Self {
            status: StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::reply(
            &Error::MethodNotAllowed,
            ApiResponse::fail("Method not allowed."),
        )
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ApiResponse::fail("Not found."),
        }
    }

    pub fn unauthorized() -> Self {
        Self::reply(
            &Error::Unauthorized,
            ApiResponse::fail("Unauthorized. Invalid API key."),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
