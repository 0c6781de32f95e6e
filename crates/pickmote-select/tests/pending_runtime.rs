//! Runtime behaviour of pending selections under concurrent input

#![allow(clippy::unwrap_used)]

use pickmote_core::{Emote, UserId};
use pickmote_select::{
    CleanupAction, IgnoreReason, MenuDefaults, PendingSelection, ReactionEvent, RuntimeError,
    SelectionBuilder, SelectionOutcome, SelectionState, Step,
};
use pickmote_testkit::{color_spec, init_test_tracing, pending_colors, ALICE, BOB, BOT, MALLORY, MESSAGE};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reactions_resolve_exactly_once() {
    init_test_tracing();
    let pending = Arc::new(pending_colors(Duration::from_secs(60)));

    let mut handles = Vec::new();
    for round in 0..64u64 {
        let pending = Arc::clone(&pending);
        handles.push(tokio::spawn(async move {
            let (user, emote) = match round % 4 {
                0 => (ALICE, "🟥"),
                1 => (BOB, "🟦"),
                2 => (ALICE, "❌"),
                _ => (MALLORY, "🟥"),
            };
            pending.on_reaction(&ReactionEvent::new(MESSAGE, user, emote))
        }));
    }
    let timer = {
        let pending = Arc::clone(&pending);
        tokio::spawn(async move { pending.on_deadline() })
    };

    let mut steps = Vec::new();
    for handle in handles {
        steps.push(handle.await.unwrap());
    }
    steps.push(timer.await.unwrap());

    let resolved: Vec<_> = steps.iter().filter(|step| step.is_resolved()).collect();
    assert_eq!(resolved.len(), 1);
    assert!(pending.is_terminal());

    let Step::Resolved(resolution) = resolved[0] else {
        unreachable!()
    };
    assert_eq!(pending.outcome().as_ref(), Some(&resolution.outcome));
}

#[tokio::test]
async fn deadline_fires_when_nobody_answers() {
    init_test_tracing();
    let pending = Arc::new(pending_colors(Duration::from_millis(20)));

    let timer = {
        let pending = Arc::clone(&pending);
        tokio::spawn(async move {
            tokio::time::sleep(pending.remaining(std::time::Instant::now())).await;
            pending.on_deadline()
        })
    };

    let resolution = timer.await.unwrap().resolution().unwrap();
    assert_eq!(resolution.outcome, SelectionOutcome::TimedOut);
    assert_eq!(resolution.display.unwrap().title(), Some("Nobody answered"));
    assert_eq!(resolution.cleanup, CleanupAction::ClearReactions);

    let late = pending.on_reaction(&ReactionEvent::new(MESSAGE, ALICE, "🟥"));
    assert_eq!(late, Step::Ignored(IgnoreReason::AlreadyTerminal));
}

#[test]
fn cancel_swaps_in_cancelled_content() {
    let pending = pending_colors(Duration::from_secs(60));
    let resolution = pending
        .on_reaction(&ReactionEvent::new(MESSAGE, BOB, Emote::default_cancel()))
        .resolution()
        .unwrap();

    assert_eq!(resolution.outcome, SelectionOutcome::Cancelled);
    assert_eq!(
        resolution.display.unwrap().title(),
        Some("Selection cancelled")
    );
    assert_eq!(pending.state(), SelectionState::Cancelled);
}

#[test]
fn bot_trigger_row_and_strays_are_ignored() {
    let pending = pending_colors(Duration::from_secs(60));

    // The bot seeds every trigger on the message first
    for trigger in pending.spec().triggers() {
        let step = pending.on_reaction(&ReactionEvent::new(MESSAGE, BOT, trigger.clone()));
        assert_eq!(step, Step::Ignored(IgnoreReason::OwnReaction));
    }

    let stray = pending.on_reaction(&ReactionEvent::new(MESSAGE, ALICE, "🍕"));
    assert_eq!(stray, Step::Ignored(IgnoreReason::UnknownTrigger));

    let elsewhere = pending.on_reaction(&ReactionEvent::new(
        pickmote_core::MessageId::new(7),
        ALICE,
        "🟥",
    ));
    assert_eq!(elsewhere, Step::Ignored(IgnoreReason::WrongMessage));

    assert_eq!(pending.state(), SelectionState::Awaiting);
}

#[test]
fn lost_message_abandons_without_cleanup() {
    let pending = pending_colors(Duration::from_secs(60));
    let resolution = pending
        .report_failure(RuntimeError::MessageUnavailable(MESSAGE))
        .resolution()
        .unwrap();

    assert_eq!(resolution.outcome, SelectionOutcome::Abandoned);
    assert_eq!(resolution.cleanup, CleanupAction::None);
    assert_eq!(
        pending.on_reaction(&ReactionEvent::new(MESSAGE, UserId::new(42), "🟦")),
        Step::Ignored(IgnoreReason::AlreadyTerminal)
    );
}

#[test]
fn configured_timeout_never_overflows_deadline() {
    init_test_tracing();
    let defaults = MenuDefaults::from_toml_str("timeout_secs = 604800").unwrap();
    let pending = PendingSelection::new(color_spec(), MESSAGE, BOT, defaults.timeout());
    assert!(pending.remaining(std::time::Instant::now()) <= defaults.timeout());

    let huge = PendingSelection::new(color_spec(), MESSAGE, BOT, Duration::from_secs(u64::MAX));
    assert!(!huge.is_terminal());
}

#[test]
fn mention_keyed_option_resolves_on_custom_reaction() {
    let mut builder = SelectionBuilder::new();
    builder.option("<:vote:55>", "yes").users([ALICE]);
    let pending = PendingSelection::new(
        Arc::new(builder.build().unwrap()),
        MESSAGE,
        BOT,
        Duration::from_secs(60),
    );

    let step = pending.on_reaction(&ReactionEvent::new(
        MESSAGE,
        ALICE,
        Emote::animated(55, "vote_renamed"),
    ));
    assert_eq!(
        step.resolution().map(|r| r.outcome),
        Some(SelectionOutcome::Selected("yes"))
    );
}
