//! Batched joke fetching with client-side prefetch buffering.
//!
//! The joke endpoint serves random jokes in fixed-size batches. [`JokeSource`]
//! keeps a FIFO buffer of decoded jokes and hands them out one at a time
//! through [`JokeSource::next_joke`], refilling in the background whenever the
//! buffer runs dry. The caller never waits on the network: an empty buffer
//! yields the sentinel joke immediately while a refill is underway.
//!
//! # Pipeline
//!
//! A refill runs through these stages on a spawned task:
//!
//! 1. **Request** - `GET {base}/{batch}` against the fixed endpoint
//! 2. **Status gate** - any status other than 200 discards the batch
//! 3. **Decode** - typed payload decode; the `type` field must be `"success"`
//! 4. **Mapping** - `&quot;` entity decoding and category tag flags
//! 5. **Handoff** - the batch travels over a channel back to the owner and is
//!    appended to the buffer tail on its next drain
//!
//! # Error Handling
//!
//! All failures are [`FetchError`] values, logged and swallowed inside the
//! fetch task. The only degraded behavior a caller observes is receiving
//! sentinel jokes while the buffer cannot be kept full.

mod error;
mod fetch;
mod parse;

pub use error::FetchError;
pub use jokebox_types::Joke;

use std::collections::VecDeque;
use std::sync::OnceLock;

use tokio::sync::mpsc;

/// Canonical joke API endpoint; no trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://api.icndb.com/jokes/random";

/// Number of jokes fetched with one request.
pub const BATCH_SIZE: usize = 5;

/// Shared HTTP client with the transport's default settings.
///
/// No request timeout is configured: a fetch that never resolves is simply
/// never applied, and the next empty-buffer observation starts a fresh one.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// A prefetching FIFO queue of jokes.
///
/// Owns its buffer exclusively; independent instances share nothing, so tests
/// and multiple consumers need no shared fixtures. Completed batches arrive
/// over an internal channel and are folded into the buffer on the owning
/// side, so the buffer itself is only ever touched by the thread that owns
/// the source.
///
/// Both [`next_joke`](Self::next_joke) and [`fetch_batch`](Self::fetch_batch)
/// spawn their background work onto the ambient Tokio runtime and must be
/// called within one.
#[derive(Debug)]
pub struct JokeSource {
    /// FIFO: batches append at the tail, `next_joke` pops the head.
    buffer: VecDeque<Joke>,
    endpoint: String,
    client: reqwest::Client,
    batch_tx: mpsc::UnboundedSender<Vec<Joke>>,
    batch_rx: mpsc::UnboundedReceiver<Vec<Joke>>,
}

impl JokeSource {
    /// Create a source against the production endpoint.
    ///
    /// The client is supplied by the environment; [`http_client`] provides a
    /// suitable shared one.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Create a source against a different host, e.g. a local mock server.
    ///
    /// `base_url` must not end with a slash; the batch size is appended as
    /// the final path segment.
    #[must_use]
    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{base_url}/{BATCH_SIZE}");
        tracing::debug!(%endpoint, "joke source ready");

        let (batch_tx, batch_rx) = mpsc::unbounded_channel();
        Self {
            buffer: VecDeque::new(),
            endpoint,
            client,
            batch_tx,
            batch_rx,
        }
    }

    /// Pop one joke from the buffer.
    ///
    /// Never blocks on the network. When the buffer is empty a refill is
    /// started in the background and [`Joke::sentinel`] is returned
    /// immediately. Dequeuing the last buffered joke also starts a refill, so
    /// steady consumption keeps the buffer warm.
    ///
    /// # Panics
    ///
    /// Panics outside a Tokio runtime context when a refill has to be
    /// spawned.
    pub fn next_joke(&mut self) -> Joke {
        self.drain_completed();

        let Some(joke) = self.buffer.pop_front() else {
            self.fetch_batch();
            return Joke::sentinel();
        };

        tracing::debug!(remaining = self.buffer.len(), "dequeued one joke");

        if self.buffer.is_empty() {
            tracing::debug!("joke buffer drained, triggering refill");
            self.fetch_batch();
        }

        joke
    }

    /// Start one background fetch of the next batch, e.g. to pre-warm the
    /// buffer at startup.
    ///
    /// Fire-and-forget: failures are logged and the batch discarded, nothing
    /// is retried, and the task can be neither cancelled nor timed out from
    /// here. There is no in-flight guard — triggering again before a previous
    /// fetch resolves leaves both outstanding, and their batches land in
    /// completion order.
    ///
    /// # Panics
    ///
    /// Panics outside a Tokio runtime context.
    pub fn fetch_batch(&self) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let batch_tx = self.batch_tx.clone();

        tokio::spawn(async move {
            match fetch::request_batch(&client, &endpoint).await {
                Ok(batch) => {
                    tracing::debug!(count = batch.len(), "received joke batch");
                    // Send fails only once the receiver half is dropped, i.e.
                    // the source itself is gone.
                    let _ = batch_tx.send(batch);
                }
                Err(e) => tracing::warn!(error = %e, "joke batch discarded"),
            }
        });
    }

    /// Number of jokes currently buffered, after folding in any batches
    /// whose fetches have completed since the last call.
    pub fn buffered(&mut self) -> usize {
        self.drain_completed();
        self.buffer.len()
    }

    /// Whether no joke is currently buffered.
    pub fn is_empty(&mut self) -> bool {
        self.buffered() == 0
    }

    /// Append every completed batch to the buffer tail, in completion order.
    /// Within one batch, payload order is preserved.
    fn drain_completed(&mut self) {
        while let Ok(batch) = self.batch_rx.try_recv() {
            self.buffer.extend(batch);
        }
    }
}
