//! Pending selections
//!
//! A [`PendingSelection`] binds a built spec to the message it was posted
//! as and serialises every input through one lock, so concurrent reaction
//! events, the timeout timer and shutdown can race freely: the first
//! qualifying input wins and everything after it is reported as
//! [`IgnoreReason::AlreadyTerminal`].
//!
//! The gateway listener, the timer and the message I/O stay with the
//! caller; this type only decides.

use crate::config::MAX_TIMEOUT_SECS;
use crate::core::{
    apply_abandon, apply_deadline, apply_reaction, resolve, IgnoreReason, ReactionEvent,
    Resolution, SelectionContext, SelectionOutcome, SelectionState, TransitionResult,
};
use crate::errors::RuntimeError;
use crate::spec::SelectionSpec;
use crate::CleanupAction;
use parking_lot::Mutex;
use pickmote_core::{MessageId, UserId};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Result of feeding one input to a pending selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// This input resolved the selection
    Resolved(Resolution<T>),
    /// The selection did not change
    Ignored(IgnoreReason),
}

impl<T> Step<T> {
    /// The resolution, if this input produced one
    pub fn resolution(self) -> Option<Resolution<T>> {
        match self {
            Self::Resolved(resolution) => Some(resolution),
            Self::Ignored(_) => None,
        }
    }

    /// Whether this input resolved the selection
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

#[derive(Debug)]
struct Inner<T> {
    state: SelectionState<T>,
    failure: Option<RuntimeError>,
}

/// A posted selection waiting for its one terminal transition
#[derive(Debug)]
pub struct PendingSelection<T> {
    spec: Arc<SelectionSpec<T>>,
    context: SelectionContext,
    deadline: Instant,
    inner: Mutex<Inner<T>>,
}

impl<T: Clone> PendingSelection<T> {
    /// Start waiting on `message_id`, timing out `timeout` from now
    ///
    /// Timeouts above [`MAX_TIMEOUT_SECS`] are clamped to it.
    pub fn new(
        spec: Arc<SelectionSpec<T>>,
        message_id: MessageId,
        self_user: UserId,
        timeout: Duration,
    ) -> Self {
        let context = SelectionContext {
            message_id,
            self_user,
        };
        Self::with_deadline(spec, context, deadline_after(Instant::now(), timeout))
    }

    /// Start waiting with an explicit deadline
    pub fn with_deadline(
        spec: Arc<SelectionSpec<T>>,
        context: SelectionContext,
        deadline: Instant,
    ) -> Self {
        debug!(
            selection_id = %spec.id(),
            message_id = %context.message_id,
            "Selection awaiting reactions"
        );
        Self {
            spec,
            context,
            deadline,
            inner: Mutex::new(Inner {
                state: SelectionState::Awaiting,
                failure: None,
            }),
        }
    }

    /// The spec being driven
    pub fn spec(&self) -> &Arc<SelectionSpec<T>> {
        &self.spec
    }

    /// Message carrying the selection
    pub fn message_id(&self) -> MessageId {
        self.context.message_id
    }

    /// When the selection times out
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline, zero once it has passed
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Feed a reaction event
    pub fn on_reaction(&self, event: &ReactionEvent) -> Step<T> {
        self.step(|spec, state| apply_reaction(spec, state, &self.context, event))
    }

    /// The timer fired
    pub fn on_deadline(&self) -> Step<T> {
        self.step(|_, state| apply_deadline(state))
    }

    /// Time out if `now` is at or past the deadline
    pub fn expire_if_due(&self, now: Instant) -> Option<Resolution<T>> {
        if now < self.deadline {
            return None;
        }
        self.on_deadline().resolution()
    }

    /// Stop waiting without an answer, e.g. on shutdown
    pub fn abandon(&self) -> Step<T> {
        self.step(|_, state| apply_abandon(state))
    }

    /// Record a transport failure and abandon the selection
    ///
    /// When the message itself is gone there is nothing left to clean up,
    /// so the resolution carries [`CleanupAction::None`].
    pub fn report_failure(&self, error: RuntimeError) -> Step<T> {
        let mut inner = self.inner.lock();
        let step = match apply_abandon(&inner.state) {
            TransitionResult::Applied(state) => {
                inner.state = state;
                let mut resolution = self.resolution_of(&inner.state);
                if matches!(error, RuntimeError::MessageUnavailable(_)) {
                    resolution.cleanup = CleanupAction::None;
                }
                debug!(
                    selection_id = %self.spec.id(),
                    error = %error,
                    "Selection abandoned after transport failure"
                );
                Step::Resolved(resolution)
            }
            TransitionResult::Ignored(reason) => Step::Ignored(reason),
        };
        inner.failure.get_or_insert(error);
        step
    }

    /// Current state
    pub fn state(&self) -> SelectionState<T> {
        self.inner.lock().state.clone()
    }

    /// Outcome once terminal
    pub fn outcome(&self) -> Option<SelectionOutcome<T>> {
        let inner = self.inner.lock();
        resolve(&*self.spec, &inner.state).map(|resolution| resolution.outcome)
    }

    /// First transport failure reported, if any
    pub fn failure(&self) -> Option<RuntimeError> {
        self.inner.lock().failure.clone()
    }

    /// Whether a terminal state was reached
    pub fn is_terminal(&self) -> bool {
        self.inner.lock().state.is_terminal()
    }

    fn step<F>(&self, transition: F) -> Step<T>
    where
        F: FnOnce(&SelectionSpec<T>, &SelectionState<T>) -> TransitionResult<T>,
    {
        let mut inner = self.inner.lock();
        match transition(&*self.spec, &inner.state) {
            TransitionResult::Applied(state) => {
                debug!(
                    selection_id = %self.spec.id(),
                    state = state.name(),
                    "Selection resolved"
                );
                inner.state = state;
                Step::Resolved(self.resolution_of(&inner.state))
            }
            TransitionResult::Ignored(reason) => {
                trace!(selection_id = %self.spec.id(), ?reason, "Input ignored");
                Step::Ignored(reason)
            }
        }
    }

    // Only called right after a terminal transition.
    fn resolution_of(&self, state: &SelectionState<T>) -> Resolution<T> {
        resolve(&*self.spec, state).unwrap_or(Resolution {
            outcome: SelectionOutcome::Abandoned,
            display: None,
            cleanup: CleanupAction::None,
        })
    }
}

// Clamped to the configurable maximum so the addition cannot overflow.
fn deadline_after(now: Instant, timeout: Duration) -> Instant {
    let max = Duration::from_secs(MAX_TIMEOUT_SECS);
    if timeout > max {
        warn!(?timeout, ?max, "Selection timeout clamped");
    }
    now.checked_add(timeout.min(max)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeletionPolicy, SelectionBuilder};
    use pickmote_core::ContentBuilder;

    const MESSAGE: MessageId = MessageId::new(500);
    const BOT: UserId = UserId::new(1);
    const ALICE: UserId = UserId::new(42);

    fn pending(timeout: Duration) -> PendingSelection<&'static str> {
        let mut builder = SelectionBuilder::new();
        builder
            .options([("🟥", "Red"), ("🟦", "Blue")])
            .users([ALICE])
            .timed_out_content(ContentBuilder::new().title("Too slow"));
        PendingSelection::new(Arc::new(builder.build().unwrap()), MESSAGE, BOT, timeout)
    }

    #[test]
    fn test_first_reaction_wins() {
        let pending = pending(Duration::from_secs(60));

        let first = pending.on_reaction(&ReactionEvent::new(MESSAGE, ALICE, "🟥"));
        assert_eq!(
            first.resolution().unwrap().outcome,
            SelectionOutcome::Selected("Red")
        );

        let second = pending.on_reaction(&ReactionEvent::new(MESSAGE, ALICE, "🟦"));
        assert_eq!(second, Step::Ignored(IgnoreReason::AlreadyTerminal));
        assert_eq!(pending.on_deadline(), Step::Ignored(IgnoreReason::AlreadyTerminal));
        assert_eq!(pending.state(), SelectionState::Resolved("Red"));
    }

    #[test]
    fn test_expire_if_due() {
        let pending = pending(Duration::from_secs(30));
        let start = pending.deadline() - Duration::from_secs(30);

        assert!(pending.expire_if_due(start).is_none());
        assert_eq!(pending.remaining(start), Duration::from_secs(30));

        let resolution = pending.expire_if_due(pending.deadline()).unwrap();
        assert_eq!(resolution.outcome, SelectionOutcome::TimedOut);
        assert_eq!(resolution.display.unwrap().title(), Some("Too slow"));
        assert_eq!(pending.remaining(pending.deadline()), Duration::ZERO);
    }

    #[test]
    fn test_oversized_timeout_is_clamped() {
        let pending = pending(Duration::from_secs(u64::MAX));
        let max = Duration::from_secs(MAX_TIMEOUT_SECS);
        let remaining = pending.remaining(Instant::now());
        assert!(remaining <= max);
        assert!(remaining > max - Duration::from_secs(60));
        assert!(!pending.is_terminal());
    }

    #[test]
    fn test_stray_reactions_leave_selection_awaiting() {
        let pending = pending(Duration::from_secs(60));
        let step = pending.on_reaction(&ReactionEvent::new(MESSAGE, UserId::new(9), "🟥"));
        assert_eq!(step, Step::Ignored(IgnoreReason::NotEligible));
        assert!(IgnoreReason::NotEligible.is_stray_reaction());
        assert!(!pending.is_terminal());
        assert!(pending.outcome().is_none());
    }

    #[test]
    fn test_abandon_on_shutdown() {
        let pending = pending(Duration::from_secs(60));
        let resolution = pending.abandon().resolution().unwrap();
        assert_eq!(resolution.outcome, SelectionOutcome::Abandoned);
        assert_eq!(resolution.cleanup, CleanupAction::ClearReactions);
        assert_eq!(pending.outcome(), Some(SelectionOutcome::Abandoned));
    }

    #[test]
    fn test_report_failure_for_deleted_message() {
        let pending = pending(Duration::from_secs(60));
        let step = pending.report_failure(RuntimeError::MessageUnavailable(MESSAGE));
        let resolution = step.resolution().unwrap();
        assert_eq!(resolution.outcome, SelectionOutcome::Abandoned);
        assert_eq!(resolution.cleanup, CleanupAction::None);
        assert_eq!(
            pending.failure(),
            Some(RuntimeError::MessageUnavailable(MESSAGE))
        );
    }

    #[test]
    fn test_report_failure_after_resolution_keeps_outcome() {
        let pending = pending(Duration::from_secs(60));
        pending.on_reaction(&ReactionEvent::new(MESSAGE, ALICE, "🟦"));

        let step = pending.report_failure(RuntimeError::PermissionDenied("manage messages".into()));
        assert_eq!(step, Step::Ignored(IgnoreReason::AlreadyTerminal));
        assert_eq!(pending.outcome(), Some(SelectionOutcome::Selected("Blue")));
        assert!(pending.failure().is_some());
    }

    #[test]
    fn test_permission_failure_uses_policy_cleanup() {
        let mut builder = SelectionBuilder::new();
        builder
            .option("🟥", "Red")
            .any_user()
            .deletion_policy(DeletionPolicy::DeleteMessage);
        let pending =
            PendingSelection::new(Arc::new(builder.build().unwrap()), MESSAGE, BOT, Duration::from_secs(5));

        let resolution = pending
            .report_failure(RuntimeError::PermissionDenied("add reactions".into()))
            .resolution()
            .unwrap();
        assert_eq!(resolution.cleanup, CleanupAction::DeleteMessage);
    }
}
