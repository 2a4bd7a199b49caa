//! One fetch attempt: request, status gate, payload decode.

use jokebox_types::Joke;
use reqwest::{Client, StatusCode};

use crate::error::FetchError;
use crate::parse::BatchPayload;

/// Fetch one batch of jokes from `endpoint`.
///
/// Terminal per attempt: any failure discards the whole batch. A new attempt
/// happens only when a later empty-buffer observation triggers one.
///
/// # Errors
///
/// - `Transport` for connection failures and unreadable or malformed bodies
/// - `Protocol` for any HTTP status other than 200
/// - `Contract` for a well-formed payload whose type is not `"success"`
pub(crate) async fn request_batch(
    client: &Client,
    endpoint: &str,
) -> Result<Vec<Joke>, FetchError> {
    let response = client.get(endpoint).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Protocol { status });
    }

    let payload: BatchPayload = response.json().await?;
    payload.into_jokes()
}
