//! Effect-free selection core
//!
//! The state machine behind a posted selection: states, inputs and pure
//! transition functions. Nothing here touches the network or the clock;
//! [`PendingSelection`](crate::PendingSelection) wraps it for concurrent use.

pub mod state;
pub mod transitions;

pub use state::{
    CleanupAction, IgnoreReason, ReactionEvent, Resolution, SelectionContext, SelectionOutcome,
    SelectionState,
};
pub use transitions::{apply_abandon, apply_deadline, apply_reaction, resolve, TransitionResult};
