//! Storage backends for contact messages
//!
//! Two implementations of the `MessageStore` contract: an embedded SQLite
//! database and a hosted REST-over-SQL service. `open` picks one from the
//! deployment configuration; nothing downstream branches on the choice again.

pub mod sqlite;
pub mod supabase;

use portfolio_core::ports::MessageStore;
use portfolio_core::{Result, StoreConfig};
use std::sync::Arc;

pub use sqlite::SqliteStore;
pub use supabase::SupabaseStore;

/// Construct the configured backend.
pub async fn open(config: &StoreConfig) -> Result<Arc<dyn MessageStore>> {
    match config {
        StoreConfig::Sqlite { database_path } => {
            Ok(Arc::new(SqliteStore::open(database_path).await?))
        }
        StoreConfig::Supabase { url, api_key } => {
            Ok(Arc::new(SupabaseStore::new(url, api_key)))
        }
    }
}
