//! Core domain types for Jokebox.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod joke;

pub use joke::{CATEGORY_EXPLICIT, CATEGORY_NERDY, Joke, SENTINEL_ID};
