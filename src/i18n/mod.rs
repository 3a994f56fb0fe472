//! Static bilingual string tables.
//!
//! Every user-visible string lives in a [`UiStrings`] table, one per
//! [`Language`]. Switching languages is a table lookup; nothing is loaded
//! at runtime.

mod language;
mod strings;

pub use language::{Direction, Language};
pub use strings::{ARABIC_STRINGS, ENGLISH_STRINGS, UiStrings};
