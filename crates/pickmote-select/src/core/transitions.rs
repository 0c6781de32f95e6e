//! Pure selection state transitions
//!
//! ## Design Principles
//! 1. Pure functions: `fn(spec, state, input) -> TransitionResult`
//! 2. No side effects: posting, editing and deleting happen in the caller
//! 3. Deterministic: same inputs always produce the same state
//! 4. Terminal states absorb every further input

use super::state::{
    CleanupAction, IgnoreReason, ReactionEvent, Resolution, SelectionContext, SelectionOutcome,
    SelectionState,
};
use crate::spec::{DeletionPolicy, SelectionSpec};

/// Result of a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionResult<T> {
    /// Transition applied, new state produced
    Applied(SelectionState<T>),
    /// Input did not change the state
    Ignored(IgnoreReason),
}

impl<T> TransitionResult<T> {
    /// Check if the transition applied
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Get the new state if the transition applied
    pub fn state(self) -> Option<SelectionState<T>> {
        match self {
            Self::Applied(state) => Some(state),
            Self::Ignored(_) => None,
        }
    }
}

/// Apply a reaction to an awaiting selection.
///
/// Preconditions, checked in order:
/// - the selection is still awaiting
/// - the reaction is on the selection message
/// - the reaction is not the bot's own
/// - the user is eligible
/// - the emote is an option trigger, or the cancel trigger while
///   cancellation is allowed
pub fn apply_reaction<T: Clone>(
    spec: &SelectionSpec<T>,
    state: &SelectionState<T>,
    context: &SelectionContext,
    event: &ReactionEvent,
) -> TransitionResult<T> {
    if state.is_terminal() {
        return TransitionResult::Ignored(IgnoreReason::AlreadyTerminal);
    }
    if event.message_id != context.message_id {
        return TransitionResult::Ignored(IgnoreReason::WrongMessage);
    }
    if event.user_id == context.self_user {
        return TransitionResult::Ignored(IgnoreReason::OwnReaction);
    }
    if !spec.is_eligible(event.user_id) {
        return TransitionResult::Ignored(IgnoreReason::NotEligible);
    }

    if let Some(value) = spec.option(&event.emote) {
        return TransitionResult::Applied(SelectionState::Resolved(value.clone()));
    }

    match spec.cancel_trigger() {
        Some(cancel) if *cancel == event.emote => {
            if spec.allow_cancel() {
                TransitionResult::Applied(SelectionState::Cancelled)
            } else {
                TransitionResult::Ignored(IgnoreReason::CancelNotAllowed)
            }
        }
        _ => TransitionResult::Ignored(IgnoreReason::UnknownTrigger),
    }
}

/// Time out an awaiting selection.
pub fn apply_deadline<T>(state: &SelectionState<T>) -> TransitionResult<T> {
    if state.is_terminal() {
        return TransitionResult::Ignored(IgnoreReason::AlreadyTerminal);
    }
    TransitionResult::Applied(SelectionState::TimedOut)
}

/// Abandon an awaiting selection.
pub fn apply_abandon<T>(state: &SelectionState<T>) -> TransitionResult<T> {
    if state.is_terminal() {
        return TransitionResult::Ignored(IgnoreReason::AlreadyTerminal);
    }
    TransitionResult::Applied(SelectionState::Abandoned)
}

/// Describe what the transport layer must do for a terminal state.
///
/// Returns `None` while the selection is still awaiting. Cancelled and
/// timed-out selections swap in their follow-up block when one was
/// configured. An abandoned selection never keeps its trigger row, so
/// [`DeletionPolicy::KeepAll`] is raised to clearing reactions there.
pub fn resolve<T: Clone>(
    spec: &SelectionSpec<T>,
    state: &SelectionState<T>,
) -> Option<Resolution<T>> {
    let cleanup = cleanup_for(spec.deletion_policy());
    let resolution = match state {
        SelectionState::Awaiting => return None,
        SelectionState::Resolved(value) => Resolution {
            outcome: SelectionOutcome::Selected(value.clone()),
            display: None,
            cleanup,
        },
        SelectionState::Cancelled => Resolution {
            outcome: SelectionOutcome::Cancelled,
            display: spec.cancelled_content().cloned(),
            cleanup,
        },
        SelectionState::TimedOut => Resolution {
            outcome: SelectionOutcome::TimedOut,
            display: spec.timed_out_content().cloned(),
            cleanup,
        },
        SelectionState::Abandoned => Resolution {
            outcome: SelectionOutcome::Abandoned,
            display: None,
            cleanup: match cleanup {
                CleanupAction::None => CleanupAction::ClearReactions,
                other => other,
            },
        },
    };
    Some(resolution)
}

fn cleanup_for(policy: DeletionPolicy) -> CleanupAction {
    match policy {
        DeletionPolicy::DeleteMessage => CleanupAction::DeleteMessage,
        DeletionPolicy::ClearReactions => CleanupAction::ClearReactions,
        DeletionPolicy::KeepAll => CleanupAction::None,
    }
}
