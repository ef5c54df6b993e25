//! Text manipulation utilities.
//!
//! This module provides the pieces of text handling the tracker needs:
//! - The edit descriptor delivered by the document on every mutation
//! - The identifier-character test used to keep highlights glued to words

pub mod edits;
mod word;

pub use edits::TextEdit;
pub use word::{is_word_char, leading_word_len, trailing_word_len};
