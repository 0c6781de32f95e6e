//! Trigger symbols
//!
//! An [`Emote`] is what a user reacts with to pick an option or cancel.
//! Unicode emotes compare by their exact text; custom guild emotes compare
//! by id only, since the name and the animation flag are presentation.

use crate::errors::EmoteParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Default cancel trigger: ❌
pub const DEFAULT_CANCEL_EMOTE: &str = "\u{274C}";

/// A reaction emote used as a trigger symbol
#[derive(Debug, Clone, Eq)]
pub enum Emote {
    /// A unicode emoji such as 🟥
    Unicode(String),
    /// A guild emote
    Custom {
        /// Snowflake of the emote
        id: u64,
        /// Display name
        name: String,
        /// Whether the emote is animated
        animated: bool,
    },
}

impl Emote {
    /// Create a unicode emote
    pub fn unicode(text: impl Into<String>) -> Self {
        Self::Unicode(text.into())
    }

    /// Create a static custom emote
    pub fn custom(id: u64, name: impl Into<String>) -> Self {
        Self::Custom {
            id,
            name: name.into(),
            animated: false,
        }
    }

    /// Create an animated custom emote
    pub fn animated(id: u64, name: impl Into<String>) -> Self {
        Self::Custom {
            id,
            name: name.into(),
            animated: true,
        }
    }

    /// The emote offered for cancelling a selection unless configured otherwise
    pub fn default_cancel() -> Self {
        Self::unicode(DEFAULT_CANCEL_EMOTE)
    }

    /// Whether this is a custom guild emote
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

impl PartialEq for Emote {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unicode(a), Self::Unicode(b)) => a == b,
            (Self::Custom { id: a, .. }, Self::Custom { id: b, .. }) => a == b,
            _ => false,
        }
    }
}

// Must agree with `PartialEq`: custom emotes hash by id alone.
impl Hash for Emote {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Unicode(text) => {
                0u8.hash(state);
                text.hash(state);
            }
            Self::Custom { id, .. } => {
                1u8.hash(state);
                id.hash(state);
            }
        }
    }
}

impl fmt::Display for Emote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(text) => f.write_str(text),
            Self::Custom {
                id,
                name,
                animated: true,
            } => write!(f, "<a:{name}:{id}>"),
            Self::Custom { id, name, .. } => write!(f, "<:{name}:{id}>"),
        }
    }
}

impl FromStr for Emote {
    type Err = EmoteParseError;

    /// Parses the chat mention form `<:name:id>` / `<a:name:id>` into a
    /// custom emote and anything else into a unicode emote.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EmoteParseError::Empty);
        }

        let Some(inner) = trimmed
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
        else {
            return Ok(Self::Unicode(trimmed.to_string()));
        };

        let mut parts = inner.splitn(3, ':');
        let (Some(flag), Some(name), Some(id)) = (parts.next(), parts.next(), parts.next()) else {
            return Ok(Self::Unicode(trimmed.to_string()));
        };
        if !(flag.is_empty() || flag == "a") || name.is_empty() {
            return Ok(Self::Unicode(trimmed.to_string()));
        }

        let id = id.parse::<u64>().map_err(|_| EmoteParseError::InvalidId {
            input: trimmed.to_string(),
        })?;

        Ok(Self::Custom {
            id,
            name: name.to_string(),
            animated: flag == "a",
        })
    }
}

// String keys take the same path as config and serde, so a mention string
// and the custom emote it names are one trigger.
impl From<&str> for Emote {
    fn from(text: &str) -> Self {
        text.parse()
            .unwrap_or_else(|_| Self::Unicode(text.to_string()))
    }
}

impl From<String> for Emote {
    fn from(text: String) -> Self {
        match text.parse() {
            Ok(emote) => emote,
            Err(_) => Self::Unicode(text),
        }
    }
}

impl From<char> for Emote {
    fn from(ch: char) -> Self {
        Self::Unicode(ch.to_string())
    }
}

impl From<&Emote> for Emote {
    fn from(emote: &Emote) -> Self {
        emote.clone()
    }
}

impl Serialize for Emote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Emote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
