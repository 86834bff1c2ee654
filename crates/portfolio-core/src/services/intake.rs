//! Contact intake: validate a submission and persist it

use crate::ports::MessageStore;
use crate::{Error, Result};
use portfolio_types::{ApiResponse, NewMessage};
use tracing::info;

/// Validate and persist one contact-form submission.
///
/// Presence checks only: any absent or blank field rejects the whole
/// submission. Accepted text goes to the store verbatim.
pub async fn submit(store: &dyn MessageStore, new: &NewMessage) -> Result<ApiResponse> {
    let (name, email, subject, message) = new.fields().ok_or(Error::Validation)?;

    let id = store.insert(name, email, subject, message).await?;
    info!("new message #{} from {} <{}>", id, name, email);

    Ok(ApiResponse::ok(format!(
        "Thank you, {}! Your message has been saved.",
        name
    )))
}

/// Detail-free reply for a failed submission. The store detail is logged at
/// the transport boundary, never sent to the caller.
pub fn failure_reply(err: &Error) -> ApiResponse {
    if err.is_store_failure() {
        ApiResponse::fail("Database error.")
    } else {
        ApiResponse::fail(err.to_string())
    }
}
