//! Common identities and builders

use pickmote_core::{ContentBuilder, MessageId, UserId};
use pickmote_select::{PendingSelection, SelectionBuilder, SelectionContext, SelectionSpec};
use std::sync::Arc;
use std::time::Duration;

/// The bot posting selections
pub const BOT: UserId = UserId::new(1);

/// An eligible user
pub const ALICE: UserId = UserId::new(42);

/// A second eligible user
pub const BOB: UserId = UserId::new(43);

/// A user who is never eligible
pub const MALLORY: UserId = UserId::new(666);

/// The message selections are posted as
pub const MESSAGE: MessageId = MessageId::new(1000);

/// Context for a selection posted by [`BOT`] as [`MESSAGE`]
pub fn test_context() -> SelectionContext {
    SelectionContext {
        message_id: MESSAGE,
        self_user: BOT,
    }
}

/// Red/blue options titled "Pick a color", answerable by [`ALICE`] and [`BOB`]
pub fn color_builder() -> SelectionBuilder<&'static str> {
    let mut builder = SelectionBuilder::new();
    builder
        .options([("🟥", "Red"), ("🟦", "Blue")])
        .title("Pick a color")
        .users([ALICE, BOB])
        .cancelled_content(ContentBuilder::new().title("Selection cancelled"))
        .timed_out_content(ContentBuilder::new().title("Nobody answered"));
    builder
}

/// Built [`color_builder`] spec
pub fn color_spec() -> Arc<SelectionSpec<&'static str>> {
    Arc::new(color_builder().build().unwrap())
}

/// [`color_spec`] posted as [`MESSAGE`]
pub fn pending_colors(timeout: Duration) -> PendingSelection<&'static str> {
    PendingSelection::new(color_spec(), MESSAGE, BOT, timeout)
}
