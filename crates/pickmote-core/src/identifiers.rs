//! Identifier types for chat entities
//!
//! Users, messages and channels are identified by the chat client's
//! 64-bit snowflakes. Selections get a local UUID so log lines from the
//! builder and the runtime can be correlated.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create from a raw snowflake
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw snowflake
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

snowflake_id!(
    /// A chat user allowed (or not) to answer a selection
    UserId
);

snowflake_id!(
    /// A posted chat message carrying a selection
    MessageId
);

snowflake_id!(
    /// The channel a selection is posted to
    ChannelId
);

/// Local identifier for one built selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectionId(pub Uuid);

impl SelectionId {
    /// Create a new random selection ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SelectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "selection-{}", self.0)
    }
}

impl From<Uuid> for SelectionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
