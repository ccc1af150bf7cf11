//! Block Kit composition objects: text, options, option groups and
//! confirmation dialogs.
//!
//! Reference: <https://api.slack.com/reference/block-kit/composition-objects>

use serde::Serialize;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A `plain_text` text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "plain_text")]
pub struct PlainText {
    pub text: String,
    /// Whether emoji shortcodes in the text are rendered.
    #[serde(skip_serializing_if = "is_false")]
    pub emoji: bool,
}

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: false,
        }
    }

    #[must_use]
    pub fn with_emoji(mut self) -> Self {
        self.emoji = true;
        self
    }
}

impl From<&str> for PlainText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A `mrkdwn` text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "mrkdwn")]
pub struct Mrkdwn {
    pub text: String,
    /// Disables automatic link and mention parsing when set.
    #[serde(skip_serializing_if = "is_false")]
    pub verbatim: bool,
}

impl Mrkdwn {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verbatim: false,
        }
    }

    #[must_use]
    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }
}

/// Any text object. Each variant carries its own `type` discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Text {
    Plain(PlainText),
    Mrkdwn(Mrkdwn),
}

impl From<PlainText> for Text {
    fn from(text: PlainText) -> Self {
        Self::Plain(text)
    }
}

impl From<Mrkdwn> for Text {
    fn from(text: Mrkdwn) -> Self {
        Self::Mrkdwn(text)
    }
}

/// Dialog shown before an interactive element's action is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationDialog {
    pub title: PlainText,
    pub text: Text,
    pub confirm: PlainText,
    pub deny: PlainText,
}

/// A single choice in a select menu, overflow menu, checkbox or radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackOption {
    pub text: PlainText,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<PlainText>,
    /// Only honoured inside overflow menus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SlackOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: PlainText::new(text),
            value: value.into(),
            description: None,
            url: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(PlainText::new(description));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub label: PlainText,
    pub options: Vec<SlackOption>,
}
