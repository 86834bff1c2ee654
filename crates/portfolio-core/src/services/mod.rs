//! Business logic shared by both transport shapes
//!
//! The long-running server and the one-shot functions call the same
//! validation and response shaping; transports only wire HTTP to these
//! functions and map errors to status codes.

pub mod admin;
pub mod intake;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::ports::MessageStore;
    use crate::{Error, Result};
    use async_trait::async_trait;
    use chrono::Utc;
    use portfolio_types::Message;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// In-memory store for service tests. `fail` flips every operation into
    /// a store failure to exercise the error path.
    #[derive(Default)]
    pub struct MemoryStore {
        rows: Mutex<Vec<Message>>,
        next_id: Mutex<i64>,
        pub fail: AtomicBool,
    }

    impl MemoryStore {
        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MessageStore for MemoryStore {
        async fn insert(
            &self,
            name: &str,
            email: &str,
            subject: &str,
            message: &str,
        ) -> Result<i64> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(Error::StoreWrite("medium unreachable".to_string()));
            }
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let id = *next_id;
            self.rows.lock().unwrap().insert(
                0,
                Message {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    subject: subject.to_string(),
                    message: message.to_string(),
                    created_at: Utc::now(),
                },
            );
            Ok(id)
        }

        async fn list_all(&self) -> Result<Vec<Message>> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(Error::StoreRead("medium unreachable".to_string()));
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(Error::StoreWrite("medium unreachable".to_string()));
            }
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|m| m.id != id);
            Ok(rows.len() < before)
        }
    }
}
