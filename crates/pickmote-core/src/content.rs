//! Content blocks
//!
//! A [`ContentBuilder`] accumulates the parts of a rich chat block (title,
//! description, colour, footer, labelled fields) and renders them into an
//! immutable [`Content`] once the chat client's size limits are checked.

use crate::errors::ContentError;
use serde::{Deserialize, Serialize};

/// Accent colour applied by [`ContentBuilder::styled`]
pub const DEFAULT_ACCENT_COLOR: u32 = 0x5865F2;

/// Maximum title length in characters
pub const MAX_TITLE_LEN: usize = 256;
/// Maximum description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 4096;
/// Maximum footer length in characters
pub const MAX_FOOTER_LEN: usize = 2048;
/// Maximum field label length in characters
pub const MAX_FIELD_LABEL_LEN: usize = 256;
/// Maximum field value length in characters
pub const MAX_FIELD_VALUE_LEN: usize = 1024;
/// Maximum number of fields
pub const MAX_FIELDS: usize = 25;
/// Maximum combined text length of the whole block
pub const MAX_TOTAL_LEN: usize = 6000;

/// A labelled field inside a content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentField {
    /// Field label
    pub label: String,
    /// Field body
    pub value: String,
    /// Whether the field may sit beside its neighbours
    pub inline: bool,
}

/// Mutable content block under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBuilder {
    title: Option<String>,
    description: Option<String>,
    color: Option<u32>,
    footer: Option<String>,
    fields: Vec<ContentField>,
}

impl ContentBuilder {
    /// Create an empty, unstyled block
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty block carrying the default accent colour
    pub fn styled() -> Self {
        Self::new().color(DEFAULT_ACCENT_COLOR)
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the accent colour
    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the footer text
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Append a labelled field (consuming form)
    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.append_field(label, value, inline);
        self
    }

    /// Append a labelled field in place
    pub fn append_field(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> &mut Self {
        self.fields.push(ContentField {
            label: label.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Fields appended so far
    pub fn fields(&self) -> &[ContentField] {
        &self.fields
    }

    /// Whether nothing renderable has been set
    ///
    /// Colour alone does not count: a coloured but otherwise blank block
    /// cannot be posted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.footer.is_none()
            && self.fields.is_empty()
    }

    /// Render into immutable content, checking the chat client's limits
    pub fn render(&self) -> Result<Content, ContentError> {
        if self.is_empty() {
            return Err(ContentError::Empty);
        }

        let mut total = 0;
        total += check_len("title", self.title.as_deref(), MAX_TITLE_LEN)?;
        total += check_len("description", self.description.as_deref(), MAX_DESCRIPTION_LEN)?;
        total += check_len("footer", self.footer.as_deref(), MAX_FOOTER_LEN)?;

        if self.fields.len() > MAX_FIELDS {
            return Err(ContentError::LimitExceeded {
                what: "field count",
                limit: MAX_FIELDS,
                actual: self.fields.len(),
            });
        }

        for (index, field) in self.fields.iter().enumerate() {
            if field.label.trim().is_empty() || field.value.trim().is_empty() {
                return Err(ContentError::EmptyField { index });
            }
            total += check_len("field label", Some(&field.label), MAX_FIELD_LABEL_LEN)?;
            total += check_len("field value", Some(&field.value), MAX_FIELD_VALUE_LEN)?;
        }

        if total > MAX_TOTAL_LEN {
            return Err(ContentError::LimitExceeded {
                what: "content",
                limit: MAX_TOTAL_LEN,
                actual: total,
            });
        }

        Ok(Content {
            title: self.title.clone(),
            description: self.description.clone(),
            color: self.color,
            footer: self.footer.clone(),
            fields: self.fields.clone(),
        })
    }
}

fn check_len(what: &'static str, text: Option<&str>, limit: usize) -> Result<usize, ContentError> {
    let actual = text.map_or(0, |t| t.chars().count());
    if actual > limit {
        return Err(ContentError::LimitExceeded {
            what,
            limit,
            actual,
        });
    }
    Ok(actual)
}

/// Rendered, immutable content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    title: Option<String>,
    description: Option<String>,
    color: Option<u32>,
    footer: Option<String>,
    fields: Vec<ContentField>,
}

impl Content {
    /// Title, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Accent colour, if any
    pub fn color(&self) -> Option<u32> {
        self.color
    }

    /// Footer text, if any
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Labelled fields in insertion order
    pub fn fields(&self) -> &[ContentField] {
        &self.fields
    }

    /// Look up the first field with the given label
    pub fn field(&self, label: &str) -> Option<&ContentField> {
        self.fields.iter().find(|f| f.label == label)
    }

    /// Reopen as a builder, e.g. to derive a follow-up block
    pub fn to_builder(&self) -> ContentBuilder {
        ContentBuilder {
            title: self.title.clone(),
            description: self.description.clone(),
            color: self.color,
            footer: self.footer.clone(),
            fields: self.fields.clone(),
        }
    }
}
