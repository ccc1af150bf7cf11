//! Typed Slack Block Kit payloads.
//!
//! Serialize-only: these types exist to build `views.open` and message
//! payloads. Every block, element and text object writes a fixed `type`
//! discriminant taken from its Rust type, never from field content.
//!
//! Reference: <https://api.slack.com/reference/block-kit/blocks>

pub mod elements;
pub mod objects;
pub mod view;

use serde::Serialize;

use elements::{ActionElement, ContextElement, InputElement, SectionElement};
use objects::{PlainText, Text};

pub use view::{Modal, ViewWrapper};

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "section")]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<SectionElement>,
}

impl Section {
    pub fn new(text: impl Into<Text>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_accessory(mut self, accessory: impl Into<SectionElement>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "divider")]
pub struct Divider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "image")]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub image_url: String,
    pub alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<PlainText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "actions")]
pub struct Actions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub elements: Vec<ActionElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "context")]
pub struct Context {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub elements: Vec<ContextElement>,
}

/// A labelled form field. Only valid inside modals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "input")]
pub struct Input {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub label: PlainText,
    pub element: InputElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<PlainText>,
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
}

impl Input {
    pub fn new(label: impl Into<String>, element: impl Into<InputElement>) -> Self {
        Self {
            block_id: None,
            label: PlainText::new(label),
            element: element.into(),
            hint: None,
            optional: false,
        }
    }

    #[must_use]
    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(PlainText::new(hint));
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A remote file. Cannot be added to modals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "file")]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub external_id: String,
    /// Always `remote` at the moment.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Block {
    Section(Section),
    Divider(Divider),
    Image(Image),
    Actions(Actions),
    Context(Context),
    Input(Input),
    File(File),
}

impl Block {
    /// The block's `block_id`, if one was assigned.
    pub fn block_id(&self) -> Option<&str> {
        match self {
            Self::Section(b) => b.block_id.as_deref(),
            Self::Divider(b) => b.block_id.as_deref(),
            Self::Image(b) => b.block_id.as_deref(),
            Self::Actions(b) => b.block_id.as_deref(),
            Self::Context(b) => b.block_id.as_deref(),
            Self::Input(b) => b.block_id.as_deref(),
            Self::File(b) => b.block_id.as_deref(),
        }
    }
}

macro_rules! impl_from_block {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Block {
                fn from(block: $variant) -> Self {
                    Self::$variant(block)
                }
            }
        )+
    };
}

impl_from_block!(Section, Divider, Image, Actions, Context, Input, File);

#[cfg(test)]
mod tests;
