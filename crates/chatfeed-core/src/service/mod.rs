//! Message fetch service.
//!
//! One call against the proxied messages endpoint, returning the complete
//! snapshot. The service never retries and never pages; a refetch is a
//! caller-initiated re-invocation.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::feed::ChatMessage;

/// Fetches the complete message snapshot from the endpoint.
///
/// A failure is always an error, never an empty list.
///
/// # Errors
///
/// Returns [`Error::Fetch`] when the request itself fails,
/// [`Error::Status`] when the endpoint answers with a non-success status,
/// and [`Error::Malformed`] when the body is not a valid message batch.
pub async fn fetch_messages(client: &reqwest::Client, url: &str) -> Result<Vec<ChatMessage>> {
    debug!("Fetching messages from {url}");

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status));
    }

    let body = response.text().await?;
    let messages = parse_batch(&body)?;
    info!("Fetched {} messages", messages.len());
    Ok(messages)
}

/// Parses a JSON message batch.
///
/// One malformed record rejects the whole batch: silently dropping a record
/// would corrupt counts and the grouping partition.
fn parse_batch(body: &str) -> Result<Vec<ChatMessage>> {
    Ok(serde_json::from_str(body)?)
}
