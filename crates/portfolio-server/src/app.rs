//! Application state and router

use crate::handlers;
use axum::http::{header::CONTENT_TYPE, HeaderName, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use portfolio_core::ports::{AdminGuard, MessageStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
///
/// The store and the guard are injected here at startup; handlers hold no
/// globals and never learn which backend they talk to.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
    pub guard: Arc<dyn AdminGuard>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/contact",
            post(handlers::contact::submit).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/messages",
            get(handlers::messages::list_or_delete)
                .delete(handlers::messages::delete_by_query)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/messages/:id",
            delete(handlers::messages::delete_by_path).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// All origins; the admin credential header must be allowed for the admin
/// pages to call cross-origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-api-key")])
}
