//! Menu configuration
//!
//! Deployment-wide defaults for new selections, loadable from TOML:
//!
//! ```toml
//! title = "Pick one:"
//! cancel_emote = "<:nope:1234>"
//! accent_color = 0xE67E22
//! timeout_secs = 120
//! default_description = true
//! deletion_policy = "delete_message"
//! ```

use crate::builder::DEFAULT_TITLE;
use crate::errors::ConfigError;
use crate::spec::DeletionPolicy;
use pickmote_core::{Emote, DEFAULT_ACCENT_COLOR};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest wait a selection may be configured with: one week
pub const MAX_TIMEOUT_SECS: u64 = 7 * 24 * 60 * 60;

/// Defaults applied by [`SelectionBuilder::from_defaults`](crate::SelectionBuilder::from_defaults)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuDefaults {
    /// Label of the generated option listing
    pub title: String,
    /// Cancel trigger offered on every menu
    pub cancel_emote: Emote,
    /// Accent colour of the selection block
    pub accent_color: u32,
    /// Seconds a selection waits before timing out
    pub timeout_secs: u64,
    /// Whether the option listing is generated
    pub default_description: bool,
    /// Cleanup after resolution
    pub deletion_policy: DeletionPolicy,
}

impl Default for MenuDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            cancel_emote: Emote::default_cancel(),
            accent_color: DEFAULT_ACCENT_COLOR,
            timeout_secs: 60,
            default_description: true,
            deletion_policy: DeletionPolicy::default(),
        }
    }
}

impl MenuDefaults {
    /// Parse and validate a TOML document; missing keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let defaults: Self = toml::from_str(input)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("timeout_secs must be greater than zero"));
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::invalid(format!(
                "timeout_secs {} exceeds the maximum of {MAX_TIMEOUT_SECS}",
                self.timeout_secs
            )));
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::invalid("title must not be blank"));
        }
        if self.accent_color > 0xFF_FFFF {
            return Err(ConfigError::invalid(format!(
                "accent_color {:#x} is not a 24-bit colour",
                self.accent_color
            )));
        }
        Ok(())
    }

    /// How long a selection waits for a reaction
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_empty_document_keeps_defaults() {
        let defaults = MenuDefaults::from_toml_str("").unwrap();
        assert_eq!(defaults, MenuDefaults::default());
        assert_eq!(defaults.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_full_document() {
        let defaults = MenuDefaults::from_toml_str(
            r#"
            title = "Pick one:"
            cancel_emote = "<:nope:1234>"
            accent_color = 0xE67E22
            timeout_secs = 120
            default_description = false
            deletion_policy = "delete_message"
            "#,
        )
        .unwrap();

        assert_eq!(defaults.title, "Pick one:");
        assert_eq!(defaults.cancel_emote, Emote::custom(1234, "nope"));
        assert_eq!(defaults.accent_color, 0xE67E22);
        assert_eq!(defaults.timeout(), Duration::from_secs(120));
        assert!(!defaults.default_description);
        assert_eq!(defaults.deletion_policy, DeletionPolicy::DeleteMessage);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert_matches!(
            MenuDefaults::from_toml_str("timeout_secs = 0"),
            Err(ConfigError::Invalid { .. })
        );
    }

    #[test]
    fn test_timeout_upper_bound() {
        let at_limit = format!("timeout_secs = {MAX_TIMEOUT_SECS}");
        assert_eq!(
            MenuDefaults::from_toml_str(&at_limit).unwrap().timeout(),
            Duration::from_secs(MAX_TIMEOUT_SECS)
        );

        for input in [
            format!("timeout_secs = {}", MAX_TIMEOUT_SECS + 1),
            format!("timeout_secs = {}", i64::MAX),
        ] {
            assert_matches!(
                MenuDefaults::from_toml_str(&input),
                Err(ConfigError::Invalid { message }) if message.contains("timeout_secs")
            );
        }
    }

    #[test]
    fn test_malformed_document() {
        assert_matches!(
            MenuDefaults::from_toml_str("timeout_secs = \"soon\""),
            Err(ConfigError::Parse { .. })
        );
        assert_matches!(
            MenuDefaults::from_toml_str("deletion_policy = \"shred\""),
            Err(ConfigError::Parse { .. })
        );
    }
}
