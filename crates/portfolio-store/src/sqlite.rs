//! Embedded SQLite backend
//!
//! One long-lived pool opened at startup. WAL journaling gives atomic
//! per-statement writes, so concurrent inserts and deletes serialize inside
//! SQLite instead of racing over a whole-file load/save cycle.

use async_trait::async_trait;
use portfolio_core::ports::MessageStore;
use portfolio_core::{Error, Result};
use portfolio_types::Message;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database file and ensure the schema.
    pub async fn open(database_path: &str) -> Result<Self> {
        tracing::info!("opening SQLite database at: {}", database_path);

        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    Error::StoreWrite(format!(
                        "cannot create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| {
                Error::StoreWrite(format!("cannot open database {}: {}", database_path, e))
            })?;

        Self::ensure_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// In-memory database for tests. A single connection, since every pooled
    /// connection would otherwise see its own empty `:memory:` database.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new().filename(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| Error::StoreWrite(format!("cannot open in-memory database: {}", e)))?;

        Self::ensure_schema(&pool).await?;

        Ok(Self { pool })
    }

    async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                subject TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await
        .map_err(|e| Error::StoreWrite(format!("cannot create messages table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl MessageStore for SqliteStore {
    async fn insert(&self, name: &str, email: &str, subject: &str, message: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (name, email, subject, message)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(subject)
        .bind(message)
        .execute(&self.pool)
        .await
        .map_err(|e| Error::StoreWrite(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn list_all(&self) -> Result<Vec<Message>> {
        // CURRENT_TIMESTAMP has second resolution; id breaks same-second ties
        // so the order stays newest-first.
        let rows: Vec<MessageRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, subject, message, created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::StoreRead(e.to_string()))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM messages WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| Error::StoreWrite(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        // Closing the pool checkpoints the WAL into the database file.
        self.pool.close().await;
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    name: String,
    email: String,
    subject: String,
    message: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<MessageRow> for Message {
    fn from(r: MessageRow) -> Self {
        Message {
            id: r.id,
            name: r.name,
            email: r.email,
            subject: r.subject,
            message: r.message,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = SqliteStore::open_in_memory().await.unwrap();

        let first = store.insert("Ana", "a@x.com", "Hi", "Hello").await.unwrap();
        let second = store.insert("Ben", "b@x.com", "Yo", "World").await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = SqliteStore::open_in_memory().await.unwrap();

        for i in 0..5 {
            store
                .insert(&format!("User{}", i), "u@x.com", "Subj", "Body")
                .await
                .unwrap();
        }

        let messages = store.list_all().await.unwrap();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].name, "User4");
        for pair in messages.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[tokio::test]
    async fn stored_fields_round_trip_verbatim() {
        let store = SqliteStore::open_in_memory().await.unwrap();

        let id = store
            .insert("Ana", "a@x.com", "Hi <script>", "Hello\nworld")
            .await
            .unwrap();

        let messages = store.list_all().await.unwrap();
        assert_eq!(messages[0].id, id);
        assert_eq!(messages[0].subject, "Hi <script>");
        assert_eq!(messages[0].message, "Hello\nworld");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = SqliteStore::open_in_memory().await.unwrap();
        let id = store.insert("Ana", "a@x.com", "Hi", "Hello").await.unwrap();

        assert!(store.delete_by_id(id).await.unwrap());
        assert!(!store.delete_by_id(id).await.unwrap());
        assert!(!store.delete_by_id(999).await.unwrap());
        assert_eq!(store.list_all().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.db");
        let path = path.to_str().unwrap();

        let store = SqliteStore::open(path).await.unwrap();
        store.insert("Ana", "a@x.com", "Hi", "Hello").await.unwrap();
        store.close().await;

        let reopened = SqliteStore::open(path).await.unwrap();
        let messages = reopened.list_all().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "Ana");
    }

    #[tokio::test]
    async fn schema_is_created_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("messages.db");

        // Parent directory does not exist yet; open creates it and the table.
        let store = SqliteStore::open(path.to_str().unwrap()).await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 0);
    }
}
