//! # Pickmote Select
//!
//! Reaction-driven, single-choice selection menus.
//!
//! ## Purpose
//!
//! A message is posted with one reaction per option; eligible users react
//! to pick an option or cancel, and the selection resolves to a value, a
//! cancellation or a timeout. This crate provides:
//! - **Assembly**: [`SelectionBuilder`] validates configuration once and
//!   freezes it into an immutable [`SelectionSpec`]
//! - **Runtime contract**: the effect-free state machine in [`core`](crate::core) and the
//!   thread-safe [`PendingSelection`] that applies exactly one terminal
//!   transition per posted selection
//! - **Configuration**: [`MenuDefaults`] loaded from TOML
//!
//! ## What Does NOT Belong Here
//!
//! - The gateway event loop and the timeout timer (owned by the caller)
//! - Posting, editing or deleting messages
//!
//! ## Example
//!
//! ```
//! use pickmote_select::{ReactionEvent, PendingSelection, SelectionBuilder, SelectionOutcome};
//! use pickmote_core::{MessageId, UserId};
//! use std::{sync::Arc, time::Duration};
//!
//! let mut builder = SelectionBuilder::new();
//! builder
//!     .options([("🟥", "Red"), ("🟦", "Blue")])
//!     .title("Pick a color")
//!     .users([UserId::new(42)]);
//! let spec = Arc::new(builder.build()?);
//!
//! let message = MessageId::new(1000);
//! let pending = PendingSelection::new(spec, message, UserId::new(1), Duration::from_secs(60));
//! let step = pending.on_reaction(&ReactionEvent::new(message, UserId::new(42), "🟦"));
//!
//! assert_eq!(
//!     step.resolution().map(|r| r.outcome),
//!     Some(SelectionOutcome::Selected("Blue"))
//! );
//! # Ok::<(), pickmote_select::SelectionError>(())
//! ```

#![forbid(unsafe_code)]

/// Selection builder and assembly
pub mod builder;

/// Menu configuration
pub mod config;

/// Effect-free selection state machine
pub mod core;

/// Error types
pub mod errors;

/// Thread-safe pending selections
pub mod pending;

/// Immutable selection spec
pub mod spec;

pub use builder::{SelectionBuilder, DEFAULT_TITLE};
pub use config::{MenuDefaults, MAX_TIMEOUT_SECS};
pub use crate::core::{
    CleanupAction, IgnoreReason, ReactionEvent, Resolution, SelectionContext, SelectionOutcome,
    SelectionState, TransitionResult,
};
pub use errors::{ConfigError, ContentSlot, ErrorKind, RuntimeError, SelectionError};
pub use pending::{PendingSelection, Step};
pub use spec::{DeletionPolicy, Describer, Eligibility, SelectionSpec};

/// Result alias for selection assembly.
pub type Result<T> = std::result::Result<T, SelectionError>;
