//! Single-request function bodies
//!
//! Mirrors the long-running server's routes for a process that lives for
//! exactly one request: method gate, guard, operation, JSON reply. Responses
//! carry the HTTP status they would have on the wire.

use portfolio_core::ports::{AdminGuard, MessageStore};
use portfolio_core::services::{admin, intake};
use portfolio_types::NewMessage;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

#[derive(Debug, Serialize)]
pub struct Invocation {
    pub status: u16,
    pub body: Value,
}

impl Invocation {
    fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn no_content() -> Self {
        Self::new(204, Value::Null)
    }

    fn method_not_allowed() -> Self {
        Self::new(405, json!({ "success": false, "message": "Method not allowed." }))
    }
}

/// The contact function: accepts exactly one POSTed submission.
pub async fn contact(store: &dyn MessageStore, method: &str, raw_body: &str) -> Invocation {
    match method.to_ascii_uppercase().as_str() {
        "OPTIONS" => return Invocation::no_content(),
        "POST" => {}
        _ => return Invocation::method_not_allowed(),
    }

    // An absent or malformed body behaves like an empty submission.
    let new: NewMessage = serde_json::from_str(raw_body).unwrap_or_default();

    match intake::submit(store, &new).await {
        Ok(reply) => Invocation::new(200, to_value(&reply)),
        Err(err) => {
            if err.is_store_failure() {
                error!("contact submission failed: {}", err);
            }
            Invocation::new(err.http_status(), to_value(&intake::failure_reply(&err)))
        }
    }
}

/// The messages function: list, or delete when an id is supplied.
pub async fn messages(
    store: &dyn MessageStore,
    guard: &dyn AdminGuard,
    method: &str,
    supplied_key: Option<&str>,
    id: Option<i64>,
    delete: Option<i64>,
) -> Invocation {
    let method = method.to_ascii_uppercase();
    if method == "OPTIONS" {
        return Invocation::no_content();
    }

    if let Err(err) = guard.authorize(supplied_key) {
        return Invocation::new(
            err.http_status(),
            json!({ "success": false, "message": "Unauthorized. Invalid API key." }),
        );
    }

    // Delete when asked to, whether by DELETE method or the ?delete= calling
    // convention; an id-less delete falls through to the method gate below.
    if method == "DELETE" || delete.is_some() {
        if let Some(id) = id.or(delete) {
            return match admin::delete(store, id).await {
                Ok(reply) => Invocation::new(200, to_value(&reply)),
                Err(err) => {
                    error!("failed to delete message {}: {}", id, err);
                    Invocation::new(
                        err.http_status(),
                        to_value(&admin::delete_failure_reply(&err)),
                    )
                }
            };
        }
    }

    if method == "GET" && delete.is_none() {
        return match admin::list(store).await {
            Ok(reply) => Invocation::new(200, to_value(&reply)),
            Err(err) => {
                error!("failed to list messages: {}", err);
                Invocation::new(err.http_status(), to_value(&admin::list_failure_reply(&err)))
            }
        };
    }

    Invocation::method_not_allowed()
}

fn to_value<T: Serialize>(reply: &T) -> Value {
    serde_json::to_value(reply).unwrap_or_else(|_| {
        json!({ "success": false, "message": "Server error. Please try again later." })
    })
}
