//! Error types for emote parsing and content rendering.

use thiserror::Error;

/// Failure to render a [`ContentBuilder`](crate::ContentBuilder) into immutable content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The block has no title, description, footer or field
    #[error("content block is empty")]
    Empty,

    /// A field has a blank label or value
    #[error("field {index} has a blank label or value")]
    EmptyField {
        /// Position of the offending field
        index: usize,
    },

    /// A chat-client size limit was exceeded
    #[error("{what} exceeds limit: {actual} > {limit}")]
    LimitExceeded {
        /// Which part of the block overflowed
        what: &'static str,
        /// Maximum allowed size
        limit: usize,
        /// Size that was supplied
        actual: usize,
    },
}

/// Failure to parse a string into an [`Emote`](crate::Emote).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmoteParseError {
    /// Empty input
    #[error("emote string is empty")]
    Empty,

    /// Looked like a custom emote mention but the id was not numeric
    #[error("invalid custom emote id in {input:?}")]
    InvalidId {
        /// The rejected input
        input: String,
    },
}
