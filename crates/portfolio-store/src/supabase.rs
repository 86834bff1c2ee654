//! Remote REST-over-SQL backend (Supabase/PostgREST)
//!
//! Every operation is one network call to the hosted `messages` table,
//! authenticated by a static service key. The table is assumed
//! pre-provisioned; each call is a single server-side statement, so writes
//! are atomic without any client-side coordination. No retries and no
//! explicit timeouts - a slow endpoint blocks that one request.

use async_trait::async_trait;
use portfolio_core::ports::MessageStore;
use portfolio_core::{Error, Result};
use portfolio_types::Message;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;

pub struct SupabaseStore {
    http: ReqwestClient,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: ReqwestClient::new(),
            base_url: url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/rest/v1/messages", self.base_url)
    }

    fn delete_url(&self, id: i64) -> String {
        format!("{}?id=eq.{}", self.messages_url(), id)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[derive(Debug, Deserialize)]
struct InsertedRow {
    id: i64,
}

#[async_trait]
impl MessageStore for SupabaseStore {
    async fn insert(&self, name: &str, email: &str, subject: &str, message: &str) -> Result<i64> {
        let response = self
            .authed(self.http.post(self.messages_url()))
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "subject": subject,
                "message": message,
            }))
            .send()
            .await
            .map_err(|e| Error::StoreWrite(format!("insert request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::StoreWrite(format!("insert response unreadable: {}", e)))?;

        if !status.is_success() {
            return Err(Error::StoreWrite(format!("insert failed ({}): {}", status, body)));
        }

        // return=representation answers with the inserted rows.
        let rows: Vec<InsertedRow> = serde_json::from_str(&body)
            .map_err(|e| Error::StoreWrite(format!("insert response unparsable: {}", e)))?;
        rows.first()
            .map(|r| r.id)
            .ok_or_else(|| Error::StoreWrite("insert returned no row".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Message>> {
        let response = self
            .authed(
                self.http
                    .get(self.messages_url())
                    .query(&[("select", "*"), ("order", "created_at.desc")]),
            )
            .send()
            .await
            .map_err(|e| Error::StoreRead(format!("list request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::StoreRead(format!("list failed ({}): {}", status, body)));
        }

        response
            .json::<Vec<Message>>()
            .await
            .map_err(|e| Error::StoreRead(format!("list response unparsable: {}", e)))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let response = self
            .authed(self.http.delete(self.delete_url(id)))
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|e| Error::StoreWrite(format!("delete request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::StoreWrite(format!("delete response unreadable: {}", e)))?;

        if !status.is_success() {
            return Err(Error::StoreWrite(format!("delete failed ({}): {}", status, body)));
        }

        // The deleted rows come back; an empty array means nothing matched.
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap_or_default();
        Ok(!rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let store = SupabaseStore::new("https://example.supabase.co/", "key");
        assert_eq!(
            store.messages_url(),
            "https://example.supabase.co/rest/v1/messages"
        );
    }

    #[test]
    fn delete_url_filters_by_id() {
        let store = SupabaseStore::new("https://example.supabase.co", "key");
        assert_eq!(
            store.delete_url(42),
            "https://example.supabase.co/rest/v1/messages?id=eq.42"
        );
    }

    #[test]
    fn inserted_row_parses_id() {
        let rows: Vec<InsertedRow> =
            serde_json::from_str(r#"[{"id": 7, "name": "Ana", "email": "a@x.com"}]"#).unwrap();
        assert_eq!(rows[0].id, 7);
    }
}
