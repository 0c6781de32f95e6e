//! Error types for selection assembly, the selection runtime and configuration
//!
//! Assembly failures are misconfiguration: they are raised synchronously by
//! [`SelectionBuilder::build`](crate::SelectionBuilder::build) and never
//! while a built spec is in use. Runtime failures (the posted message went
//! away, the bot lost permissions) are a separate type so callers can retry
//! or report them without confusing them with programmer errors.

use pickmote_core::{ContentError, Emote, MessageId};
use std::fmt;
use thiserror::Error;

/// Coarse classification shared by every [`SelectionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The supplied configuration cannot produce a valid selection
    InvalidConfiguration,
}

/// Which content block failed to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSlot {
    /// Block shown while awaiting input
    Selection,
    /// Block shown after cancellation
    Cancelled,
    /// Block shown after timeout
    TimedOut,
}

impl fmt::Display for ContentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Selection => "selection",
            Self::Cancelled => "cancelled",
            Self::TimedOut => "timed-out",
        })
    }
}

/// Selection assembly failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No options were supplied
    #[error("invalid configuration: selection needs at least one option")]
    MissingOptions,

    /// Two triggers collide, or an option uses the cancel trigger
    #[error("invalid configuration: trigger {trigger} is used more than once")]
    DuplicateTrigger {
        /// The colliding trigger
        trigger: Emote,
    },

    /// Cancellation is enabled but no cancel trigger is set
    #[error("invalid configuration: cancellation is enabled without a cancel trigger")]
    MissingCancelTrigger,

    /// No eligible users were supplied
    #[error("invalid configuration: eligible users are not set")]
    MissingUsers,

    /// A content block is unset or cannot be rendered
    #[error("invalid configuration: {slot} content is missing or unrenderable")]
    MissingContent {
        /// Block that failed
        slot: ContentSlot,
        /// Render failure, when the block was present
        #[source]
        source: Option<ContentError>,
    },
}

impl SelectionError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidConfiguration
    }
}

/// Failure reported by the transport layer while a selection is live
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The selection message was deleted or cannot be reached
    #[error("selection message {0} is unavailable")]
    MessageUnavailable(MessageId),

    /// The bot lacks a permission needed to drive the selection
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

/// Failure to load menu configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed
    #[error("failed to parse menu configuration: {message}")]
    Parse {
        /// Parser message
        message: String,
    },

    /// A value parsed but is out of range
    #[error("invalid menu configuration: {message}")]
    Invalid {
        /// Description of the rejected value
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid-value error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
