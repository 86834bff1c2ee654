//! Storage trait for persisted contact messages

use crate::Result;
use async_trait::async_trait;
use portfolio_types::Message;

/// Message store
///
/// Durable keeper of submitted messages. Both backends sit behind this
/// contract; which one is constructed is a deployment-time configuration
/// choice. Rows are append-only until deleted - there is no update.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a new row. The store assigns the id (monotonically increasing)
    /// and the creation timestamp.
    async fn insert(&self, name: &str, email: &str, subject: &str, message: &str) -> Result<i64>;

    /// Every stored message, newest first.
    async fn list_all(&self) -> Result<Vec<Message>>;

    /// Remove the row with the matching id if present; returns whether a row
    /// was removed. Deleting an unknown id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Flush and release the underlying medium. Called once on shutdown.
    async fn close(&self) {}
}
