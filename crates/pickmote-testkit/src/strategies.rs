//! Property test strategies for pickmote types

use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

use pickmote_core::{Emote, UserId};

/// Unicode emotes that never collide with the default cancel trigger
const UNICODE_POOL: &[&str] = &[
    "🟥", "🟧", "🟨", "🟩", "🟦", "🟪", "🟫", "⬛", "⬜", "👍", "👎", "🎉", "🔥", "⭐", "🍕",
    "🍎", "🚀", "🎲", "🎵", "📌",
];

/// Strategy for a single trigger, unicode or custom
pub fn arb_emote() -> impl Strategy<Value = Emote> {
    prop_oneof![
        prop::sample::select(UNICODE_POOL).prop_map(Emote::unicode),
        (1u64..10_000, "[a-z_]{2,12}", any::<bool>()).prop_map(|(id, name, animated)| {
            if animated {
                Emote::animated(id, name)
            } else {
                Emote::custom(id, name)
            }
        }),
    ]
}

/// Strategy for snowflake user ids, excluding the reserved bot id `1`
pub fn arb_user_id() -> impl Strategy<Value = UserId> {
    (2u64..1_000_000).prop_map(UserId::new)
}

/// Strategy for a non-empty list of pairwise distinct triggers, each paired
/// with a short label
pub fn arb_option_set(max: usize) -> impl Strategy<Value = Vec<(Emote, String)>> {
    prop::collection::vec((arb_emote(), "[A-Za-z ]{1,16}"), 1..=max.max(1)).prop_map(|pairs| {
        let mut seen: Vec<Emote> = Vec::new();
        pairs
            .into_iter()
            .filter(|(emote, _)| {
                if seen.contains(emote) {
                    false
                } else {
                    seen.push(emote.clone());
                    true
                }
            })
            .collect()
    })
}

/// Strategy for a non-empty list of eligible users
pub fn arb_users(max: usize) -> impl Strategy<Value = Vec<UserId>> {
    prop::collection::vec(arb_user_id(), 1..=max.max(1))
}
