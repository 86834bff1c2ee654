//! Admin operations: list and delete stored messages
//!
//! Both operations assume the access guard already passed at the transport
//! boundary.

use crate::ports::MessageStore;
use crate::{Error, Result};
use portfolio_types::{ApiResponse, MessageList};
use tracing::debug;

/// Every stored message, newest first.
pub async fn list(store: &dyn MessageStore) -> Result<MessageList> {
    let messages = store.list_all().await?;
    Ok(MessageList::new(messages))
}

/// Delete by id. Idempotent: an id that no longer exists (or never did)
/// yields the same success reply as a real deletion.
pub async fn delete(store: &dyn MessageStore, id: i64) -> Result<ApiResponse> {
    let removed = store.delete_by_id(id).await?;
    if !removed {
        debug!("delete for unknown message id {}", id);
    }
    Ok(ApiResponse::ok("Message deleted."))
}

pub fn list_failure_reply(err: &Error) -> ApiResponse {
    if err.is_store_failure() {
        ApiResponse::fail("Failed to fetch messages.")
    } else {
        ApiResponse::fail(err.to_string())
    }
}

pub fn delete_failure_reply(err: &Error) -> ApiResponse {
    if err.is_store_failure() {
        ApiResponse::fail("Failed to delete.")
    } else {
        ApiResponse::fail(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::MemoryStore;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn list_reports_count() {
        let store = MemoryStore::default();
        store.insert("Ana", "a@x.com", "Hi", "Hello").await.unwrap();
        store.insert("Ben", "b@x.com", "Yo", "World").await.unwrap();

        let reply = list(&store).await.unwrap();
        assert!(reply.success);
        assert_eq!(reply.count, 2);
        assert_eq!(reply.messages.len(), 2);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::default();
        let id = store.insert("Ana", "a@x.com", "Hi", "Hello").await.unwrap();

        let first = delete(&store, id).await.unwrap();
        assert!(first.success);
        assert_eq!(first.message, "Message deleted.");
        assert_eq!(store.len(), 0);

        // Second delete of the same id: already gone, same reply.
        let second = delete(&store, id).await.unwrap();
        assert!(second.success);
        assert_eq!(second.message, "Message deleted.");
    }

    #[tokio::test]
    async fn delete_of_never_created_id_succeeds() {
        let store = MemoryStore::default();
        let reply = delete(&store, 999).await.unwrap();
        assert!(reply.success);
        assert_eq!(reply.message, "Message deleted.");
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn store_failures_hide_detail() {
        let store = MemoryStore::default();
        store.fail.store(true, Ordering::SeqCst);

        let err = list(&store).await.unwrap_err();
        assert_eq!(list_failure_reply(&err).message, "Failed to fetch messages.");

        let err = delete(&store, 1).await.unwrap_err();
        assert_eq!(delete_failure_reply(&err).message, "Failed to delete.");
    }
}
