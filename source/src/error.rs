//! Error taxonomy for a single fetch attempt.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a batch of jokes was discarded.
///
/// Every variant is terminal for its fetch attempt and handled locally: the
/// fetch task logs it and leaves the buffer untouched. Nothing here ever
/// propagates to a [`next_joke`](crate::JokeSource::next_joke) caller; the
/// only caller-visible symptom is a sentinel joke while the buffer cannot be
/// kept full.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: connection, DNS, or an unreadable/malformed
    /// response body.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with an HTTP status other than 200.
    #[error("unexpected HTTP status {status}")]
    Protocol { status: StatusCode },

    /// The payload decoded cleanly but its `type` field was not `"success"`.
    #[error("payload type {payload_type:?} is not \"success\"")]
    Contract { payload_type: String },
}
