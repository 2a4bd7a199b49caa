//! The `Joke` value record and its sentinel representation.

use serde::{Deserialize, Serialize};

/// Source id reserved for the sentinel "no joke available" value.
pub const SENTINEL_ID: i64 = -1;

/// Category tag the source API uses for nerd jokes.
pub const CATEGORY_NERDY: &str = "nerdy";

/// Category tag the source API uses for explicit jokes.
pub const CATEGORY_EXPLICIT: &str = "explicit";

/// A single joke as handed to the presentation layer.
///
/// Immutable once constructed. The distinguished sentinel value (see
/// [`Joke::sentinel`]) signals "no joke currently available, a refill is
/// underway"; it is only ever returned transiently to a caller and never
/// enters a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    text: String,
    id: i64,
    is_nerdy: bool,
    is_explicit: bool,
}

impl Joke {
    /// Create a joke with both category flags unset.
    #[must_use]
    pub fn new(text: impl Into<String>, id: i64) -> Self {
        Self {
            text: text.into(),
            id,
            is_nerdy: false,
            is_explicit: false,
        }
    }

    /// The sentinel joke: empty text, id [`SENTINEL_ID`], no category flags.
    #[must_use]
    pub fn sentinel() -> Self {
        Self::new(String::new(), SENTINEL_ID)
    }

    /// Apply one category tag as reported by the source API.
    ///
    /// Unrecognized tags are ignored.
    #[must_use]
    pub fn with_category(mut self, tag: &str) -> Self {
        match tag {
            CATEGORY_NERDY => self.is_nerdy = true,
            CATEGORY_EXPLICIT => self.is_explicit = true,
            _ => {}
        }
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub const fn is_nerdy(&self) -> bool {
        self.is_nerdy
    }

    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        self.is_explicit
    }

    /// Whether this is the "no joke currently available" sentinel.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_ID
    }
}
