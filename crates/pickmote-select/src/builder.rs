//! Selection builder
//!
//! [`SelectionBuilder`] accumulates configuration with safe defaults. Setters
//! never fail; every invariant is checked once, in [`SelectionBuilder::build`],
//! which either returns a complete [`SelectionSpec`] or the first violated
//! invariant. Checks run in a fixed order:
//!
//! 1. at least one option
//! 2. cancel trigger does not collide with an option trigger
//! 3. option triggers are pairwise distinct after conversion to [`Emote`]
//! 4. cancel trigger present when cancellation is allowed
//! 5. generated option listing appended to the selection block (if enabled)
//! 6. eligible users set
//! 7. selection block present and renderable
//! 8. cancelled / timed-out blocks rendered when present

use crate::config::MenuDefaults;
use crate::errors::{ContentSlot, SelectionError};
use crate::spec::{DeletionPolicy, Describer, Eligibility, SelectionSpec};
use indexmap::IndexMap;
use pickmote_core::{Content, ContentBuilder, Emote, SelectionId, UserId};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Label of the generated option listing unless another title is set
pub const DEFAULT_TITLE: &str = "Select one of these:";

/// Mutable selection configuration, frozen by [`build`](Self::build)
pub struct SelectionBuilder<T> {
    options: Vec<(Emote, T)>,
    users: Option<Eligibility>,
    describer: Describer<T>,
    title: String,
    allow_cancel: bool,
    cancel_trigger: Option<Emote>,
    selection_content: Option<ContentBuilder>,
    cancelled_content: Option<ContentBuilder>,
    timed_out_content: Option<ContentBuilder>,
    default_description: bool,
    deletion_policy: DeletionPolicy,
}

impl<T: Clone + fmt::Display> SelectionBuilder<T> {
    /// Create a builder that describes values by their `Display` form
    pub fn new() -> Self {
        Self::with_describer(|value: &T| value.to_string())
    }

    /// Create a builder seeded from deployment defaults
    pub fn from_defaults(defaults: &MenuDefaults) -> Self {
        let mut builder = Self::new();
        builder
            .title(defaults.title.clone())
            .cancel_trigger(defaults.cancel_emote.clone())
            .selection_content(ContentBuilder::new().color(defaults.accent_color))
            .default_description(defaults.default_description)
            .deletion_policy(defaults.deletion_policy);
        builder
    }
}

impl<T: Clone + fmt::Display> Default for SelectionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> SelectionBuilder<T> {
    /// Create a builder with a custom value → text conversion
    pub fn with_describer<F>(describer: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            options: Vec::new(),
            users: None,
            describer: Arc::new(describer),
            title: DEFAULT_TITLE.to_string(),
            allow_cancel: true,
            cancel_trigger: Some(Emote::default_cancel()),
            selection_content: Some(ContentBuilder::styled()),
            cancelled_content: None,
            timed_out_content: None,
            default_description: true,
            deletion_policy: DeletionPolicy::default(),
        }
    }

    /// Replace the option set; keys are converted into [`Emote`]s in order
    pub fn options<I, K>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Emote>,
    {
        self.options = options
            .into_iter()
            .map(|(trigger, value)| (trigger.into(), value))
            .collect();
        self
    }

    /// Append a single option
    pub fn option(&mut self, trigger: impl Into<Emote>, value: T) -> &mut Self {
        self.options.push((trigger.into(), value));
        self
    }

    /// Remove every option
    pub fn clear_options(&mut self) -> &mut Self {
        self.options.clear();
        self
    }

    /// Restrict answers to these users
    pub fn users<I, U>(&mut self, users: I) -> &mut Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        self.users = Some(Eligibility::Users(
            users.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Let anyone answer
    pub fn any_user(&mut self) -> &mut Self {
        self.users = Some(Eligibility::Anyone);
        self
    }

    /// Set the post-resolution cleanup policy
    pub fn deletion_policy(&mut self, policy: DeletionPolicy) -> &mut Self {
        self.deletion_policy = policy;
        self
    }

    /// Set the block shown while awaiting input
    pub fn selection_content(&mut self, content: ContentBuilder) -> &mut Self {
        self.selection_content = Some(content);
        self
    }

    /// Unset the selection block
    pub fn clear_selection_content(&mut self) -> &mut Self {
        self.selection_content = None;
        self
    }

    /// Set the block shown after cancellation
    pub fn cancelled_content(&mut self, content: ContentBuilder) -> &mut Self {
        self.cancelled_content = Some(content);
        self
    }

    /// Set the block shown after timeout
    pub fn timed_out_content(&mut self, content: ContentBuilder) -> &mut Self {
        self.timed_out_content = Some(content);
        self
    }

    /// Set the value → text conversion used by the generated listing
    pub fn describer<F>(&mut self, describer: F) -> &mut Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.describer = Arc::new(describer);
        self
    }

    /// Set the label of the generated listing
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Offer (or withhold) the cancel trigger
    pub fn allow_cancel(&mut self, allow: bool) -> &mut Self {
        self.allow_cancel = allow;
        self
    }

    /// Set the cancel trigger
    pub fn cancel_trigger(&mut self, trigger: impl Into<Emote>) -> &mut Self {
        self.cancel_trigger = Some(trigger.into());
        self
    }

    /// Unset the cancel trigger
    pub fn clear_cancel_trigger(&mut self) -> &mut Self {
        self.cancel_trigger = None;
        self
    }

    /// Generate the "trigger - text" listing on the selection block
    pub fn default_description(&mut self, enabled: bool) -> &mut Self {
        self.default_description = enabled;
        self
    }

    /// Validate and freeze into a [`SelectionSpec`]
    ///
    /// The builder itself is left untouched, so building twice yields
    /// specs with the same options, users, content and flags. Only the
    /// log correlation [`id`](SelectionSpec::id) is new per build.
    pub fn build(&self) -> Result<SelectionSpec<T>, SelectionError> {
        match self.assemble() {
            Ok(spec) => {
                debug!(
                    selection_id = %spec.id,
                    options = spec.options.len(),
                    allow_cancel = spec.allow_cancel,
                    "Selection built"
                );
                Ok(spec)
            }
            Err(err) => {
                warn!(error = %err, "Selection build rejected");
                Err(err)
            }
        }
    }

    fn assemble(&self) -> Result<SelectionSpec<T>, SelectionError> {
        if self.options.is_empty() {
            return Err(SelectionError::MissingOptions);
        }

        let cancel_trigger = self.cancel_trigger.as_ref().filter(|_| self.allow_cancel);
        if let Some(cancel) = cancel_trigger {
            if self.options.iter().any(|(trigger, _)| trigger == cancel) {
                return Err(SelectionError::DuplicateTrigger {
                    trigger: cancel.clone(),
                });
            }
        }

        let mut options = IndexMap::with_capacity(self.options.len());
        for (trigger, value) in &self.options {
            if options.insert(trigger.clone(), value.clone()).is_some() {
                return Err(SelectionError::DuplicateTrigger {
                    trigger: trigger.clone(),
                });
            }
        }

        if self.allow_cancel && self.cancel_trigger.is_none() {
            return Err(SelectionError::MissingCancelTrigger);
        }

        let mut selection_block = self.selection_content.clone();
        if self.default_description {
            if let Some(block) = selection_block.as_mut() {
                block.append_field(self.title.clone(), self.describe(&options), false);
            }
        }

        let users = match &self.users {
            Some(Eligibility::Users(users)) if users.is_empty() => {
                return Err(SelectionError::MissingUsers)
            }
            Some(users) => users.clone(),
            None => return Err(SelectionError::MissingUsers),
        };

        let selection_content = render(selection_block.as_ref(), ContentSlot::Selection)?
            .ok_or(SelectionError::MissingContent {
                slot: ContentSlot::Selection,
                source: None,
            })?;
        let cancelled_content = render(self.cancelled_content.as_ref(), ContentSlot::Cancelled)?;
        let timed_out_content = render(self.timed_out_content.as_ref(), ContentSlot::TimedOut)?;

        Ok(SelectionSpec {
            id: SelectionId::new(),
            options,
            users,
            selection_content,
            cancelled_content,
            timed_out_content,
            allow_cancel: self.allow_cancel,
            cancel_trigger: self.cancel_trigger.clone(),
            deletion_policy: self.deletion_policy,
        })
    }

    fn describe(&self, options: &IndexMap<Emote, T>) -> String {
        options
            .iter()
            .map(|(trigger, value)| format!("{trigger} - {}\n", (self.describer)(value)))
            .collect()
    }
}

fn render(
    block: Option<&ContentBuilder>,
    slot: ContentSlot,
) -> Result<Option<Content>, SelectionError> {
    block
        .map(|b| {
            b.render().map_err(|err| SelectionError::MissingContent {
                slot,
                source: Some(err),
            })
        })
        .transpose()
}

impl<T: fmt::Debug> fmt::Debug for SelectionBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionBuilder")
            .field("options", &self.options)
            .field("users", &self.users)
            .field("title", &self.title)
            .field("allow_cancel", &self.allow_cancel)
            .field("cancel_trigger", &self.cancel_trigger)
            .field("default_description", &self.default_description)
            .field("deletion_policy", &self.deletion_policy)
            .finish_non_exhaustive()
    }
}
