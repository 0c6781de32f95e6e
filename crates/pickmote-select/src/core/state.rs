//! Pure selection state definitions
//!
//! Effect-free structures describing where a posted selection is in its
//! lifecycle and what the transport layer has to do once it resolves.

use pickmote_core::{Content, Emote, MessageId, UserId};
use serde::{Deserialize, Serialize};

/// Lifecycle of one posted selection.
///
/// `Awaiting` is the only non-terminal state; every other state is final
/// and is entered at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState<T> {
    /// Listening for reactions
    Awaiting,
    /// An eligible user picked an option
    Resolved(T),
    /// An eligible user reacted with the cancel trigger
    Cancelled,
    /// The deadline passed without a qualifying reaction
    TimedOut,
    /// The wait was torn down (shutdown, lost message) before resolving
    Abandoned,
}

impl<T> SelectionState<T> {
    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Awaiting)
    }

    /// Short state name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Awaiting => "awaiting",
            Self::Resolved(_) => "resolved",
            Self::Cancelled => "cancelled",
            Self::TimedOut => "timed_out",
            Self::Abandoned => "abandoned",
        }
    }
}

/// A reaction added to some message, as delivered by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionEvent {
    /// Message the reaction was added to
    pub message_id: MessageId,
    /// User who reacted
    pub user_id: UserId,
    /// Emote used
    pub emote: Emote,
}

impl ReactionEvent {
    /// Create a reaction event
    pub fn new(message_id: MessageId, user_id: UserId, emote: impl Into<Emote>) -> Self {
        Self {
            message_id,
            user_id,
            emote: emote.into(),
        }
    }
}

/// Where a selection was posted and who posted it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionContext {
    /// The message carrying the selection
    pub message_id: MessageId,
    /// The bot's own user, whose trigger reactions are ignored
    pub self_user: UserId,
}

/// Why an event left the selection unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// A terminal state was already reached
    AlreadyTerminal,
    /// The reaction belongs to another message
    WrongMessage,
    /// The bot's own trigger reaction
    OwnReaction,
    /// The user may not answer this selection
    NotEligible,
    /// The emote is neither an option nor the cancel trigger
    UnknownTrigger,
    /// The cancel trigger was used while cancellation is disabled
    CancelNotAllowed,
}

impl IgnoreReason {
    /// Whether the ignored reaction sits on the selection message and may
    /// be removed to keep the trigger row tidy
    pub fn is_stray_reaction(self) -> bool {
        matches!(
            self,
            Self::NotEligible | Self::UnknownTrigger | Self::CancelNotAllowed
        )
    }
}

/// Final result handed back to whoever started the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome<T> {
    /// The chosen value
    Selected(T),
    /// Cancelled by an eligible user
    Cancelled,
    /// Nobody eligible answered in time
    TimedOut,
    /// Torn down before resolving
    Abandoned,
}

impl<T> SelectionOutcome<T> {
    /// The chosen value, if any
    pub fn selected(self) -> Option<T> {
        match self {
            Self::Selected(value) => Some(value),
            _ => None,
        }
    }
}

/// Cleanup the transport layer performs on the selection message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CleanupAction {
    /// Delete the message
    DeleteMessage,
    /// Remove all reactions from the message
    ClearReactions,
    /// Leave the message untouched
    None,
}

/// Everything the transport layer needs after a terminal transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T> {
    /// What the selection resolved to
    pub outcome: SelectionOutcome<T>,
    /// Content to swap onto the message, if any
    pub display: Option<Content>,
    /// Cleanup to perform afterwards
    pub cleanup: CleanupAction,
}
