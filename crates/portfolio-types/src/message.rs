//! Contact message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact message.
///
/// `id` and `created_at` are assigned by the store on insertion and never
/// change afterwards; rows are only ever created or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A contact-form submission before it has been persisted.
///
/// All four fields are optional at the wire level; presence is checked by the
/// intake service. Text is stored verbatim - no format validation, no length
/// caps, no sanitization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl NewMessage {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            subject: Some(subject.to_string()),
            message: Some(message.to_string()),
        }
    }

    /// The four fields trimmed, or `None` for any that is absent or blank.
    pub fn fields(&self) -> Option<(&str, &str, &str, &str)> {
        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }

        Some((
            present(&self.name)?,
            present(&self.email)?,
            present(&self.subject)?,
            present(&self.message)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_present() {
        let new = NewMessage::new("Ana", "a@x.com", "Hi", "Hello");
        assert_eq!(new.fields(), Some(("Ana", "a@x.com", "Hi", "Hello")));
    }

    #[test]
    fn missing_field_rejected() {
        let mut new = NewMessage::new("Ana", "a@x.com", "Hi", "Hello");
        new.email = None;
        assert_eq!(new.fields(), None);
    }

    #[test]
    fn blank_field_rejected() {
        let mut new = NewMessage::new("Ana", "a@x.com", "Hi", "Hello");
        new.subject = Some("   ".to_string());
        assert_eq!(new.fields(), None);
    }
}
