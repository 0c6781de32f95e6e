//! # Pickmote Core
//!
//! Foundation types for reaction-driven selection menus.
//!
//! ## Purpose
//!
//! Provides the collaborator types the selection builder and runtime
//! consume without owning any chat-client transport:
//! - **Emotes**: the trigger symbols users react with
//! - **Identifiers**: user, message, channel and selection identities
//! - **Content blocks**: a mutable builder that renders to immutable content
//!
//! ## What Does NOT Belong Here
//!
//! - Selection validation and the selection state machine (pickmote-select)
//! - Gateway clients, HTTP calls or message deletion mechanics
//! - Test fixtures (pickmote-testkit)

#![forbid(unsafe_code)]

/// Renderable content blocks
pub mod content;

/// Trigger symbols
pub mod emote;

/// Error types for the core crate
pub mod errors;

/// Snowflake and UUID identifiers
pub mod identifiers;

pub use content::{Content, ContentBuilder, ContentField, DEFAULT_ACCENT_COLOR};
pub use emote::{Emote, DEFAULT_CANCEL_EMOTE};
pub use errors::{ContentError, EmoteParseError};
pub use identifiers::{ChannelId, MessageId, SelectionId, UserId};

/// Result alias for content rendering.
pub type Result<T> = std::result::Result<T, ContentError>;
