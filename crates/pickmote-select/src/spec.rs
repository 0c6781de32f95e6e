//! The immutable, validated selection spec
//!
//! A [`SelectionSpec`] is only ever produced by
//! [`SelectionBuilder::build`](crate::SelectionBuilder::build). It owns its
//! own copies of the option map and the user list, so nothing done to the
//! builder afterwards can reach it.

use indexmap::IndexMap;
use pickmote_core::{Content, Emote, SelectionId, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Converts an option value into the text shown in the default description
pub type Describer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// What is removed once a selection resolves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionPolicy {
    /// Delete the whole message
    DeleteMessage,
    /// Keep the message, remove every reaction
    #[default]
    ClearReactions,
    /// Leave message and reactions in place
    KeepAll,
}

/// Who may answer a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    /// Only the listed users, in the order given
    Users(Vec<UserId>),
    /// Anyone who can see the message
    Anyone,
}

impl Eligibility {
    /// Whether `user` may answer
    pub fn allows(&self, user: UserId) -> bool {
        match self {
            Self::Users(users) => users.contains(&user),
            Self::Anyone => true,
        }
    }

    /// The explicit user list, if restricted
    pub fn users(&self) -> Option<&[UserId]> {
        match self {
            Self::Users(users) => Some(users),
            Self::Anyone => None,
        }
    }
}

/// Fully validated selection, consumed by the runtime
#[derive(Debug, Clone)]
pub struct SelectionSpec<T> {
    pub(crate) id: SelectionId,
    pub(crate) options: IndexMap<Emote, T>,
    pub(crate) users: Eligibility,
    pub(crate) selection_content: Content,
    pub(crate) cancelled_content: Option<Content>,
    pub(crate) timed_out_content: Option<Content>,
    pub(crate) allow_cancel: bool,
    pub(crate) cancel_trigger: Option<Emote>,
    pub(crate) deletion_policy: DeletionPolicy,
}

impl<T> SelectionSpec<T> {
    /// Identifier used to correlate log lines
    ///
    /// Fresh for every [`build`](crate::SelectionBuilder::build), so two
    /// specs built from one builder differ here and nowhere else.
    pub fn id(&self) -> SelectionId {
        self.id
    }

    /// Trigger → value map in insertion order
    pub fn options(&self) -> &IndexMap<Emote, T> {
        &self.options
    }

    /// Value bound to `trigger`, if it is an option trigger
    pub fn option(&self, trigger: &Emote) -> Option<&T> {
        self.options.get(trigger)
    }

    /// Who may answer
    pub fn users(&self) -> &Eligibility {
        &self.users
    }

    /// Whether `user` may answer
    pub fn is_eligible(&self, user: UserId) -> bool {
        self.users.allows(user)
    }

    /// Content shown while awaiting input
    pub fn selection_content(&self) -> &Content {
        &self.selection_content
    }

    /// Content swapped in after cancellation
    pub fn cancelled_content(&self) -> Option<&Content> {
        self.cancelled_content.as_ref()
    }

    /// Content swapped in after timeout
    pub fn timed_out_content(&self) -> Option<&Content> {
        self.timed_out_content.as_ref()
    }

    /// Whether the cancel trigger is offered
    pub fn allow_cancel(&self) -> bool {
        self.allow_cancel
    }

    /// Cancel trigger; always `Some` when [`allow_cancel`](Self::allow_cancel) is true
    pub fn cancel_trigger(&self) -> Option<&Emote> {
        self.cancel_trigger.as_ref()
    }

    /// Post-resolution cleanup policy
    pub fn deletion_policy(&self) -> DeletionPolicy {
        self.deletion_policy
    }

    /// Whether `emote` is the active cancel trigger
    pub fn is_cancel_trigger(&self, emote: &Emote) -> bool {
        self.allow_cancel && self.cancel_trigger.as_ref() == Some(emote)
    }

    /// Reactions to add to the posted message: option triggers in order,
    /// then the cancel trigger when cancellation is offered.
    pub fn triggers(&self) -> Vec<&Emote> {
        let cancel = self.cancel_trigger.as_ref().filter(|_| self.allow_cancel);
        self.options.keys().chain(cancel).collect()
    }
}
