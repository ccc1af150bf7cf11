//! Block Kit interactive elements.
//!
//! Every element serializes its own `type` discriminant. Which blocks may
//! hold which elements is expressed by the position enums at the bottom of
//! this module, so an invalid combination does not compile.
//!
//! Reference: <https://api.slack.com/reference/block-kit/block-elements>

use serde::Serialize;

use super::objects::{ConfirmationDialog, Mrkdwn, OptionGroup, PlainText, SlackOption, Text};

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Danger,
    /// Slack's neutral style, sent by leaving the field out.
    #[default]
    Default,
}

impl ButtonStyle {
    fn is_default(&self) -> bool {
        *self == Self::Default
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "button")]
pub struct Button {
    pub text: PlainText,
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "ButtonStyle::is_default")]
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

impl Button {
    pub fn new(text: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            text: PlainText::new(text),
            action_id: action_id.into(),
            url: None,
            value: None,
            style: ButtonStyle::Default,
            confirm: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "checkboxes")]
pub struct CheckboxGroup {
    pub action_id: String,
    pub options: Vec<SlackOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_options: Vec<SlackOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "datepicker")]
pub struct DatePicker {
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "image")]
pub struct Image {
    pub image_url: String,
    pub alt_text: String,
}

impl Image {
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "overflow")]
pub struct Overflow {
    pub action_id: String,
    pub options: Vec<SlackOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "plain_text_input")]
pub struct PlainTextInput {
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl PlainTextInput {
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "radio_buttons")]
pub struct RadioButtonGroup {
    pub action_id: String,
    pub options: Vec<SlackOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<SlackOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "static_select")]
pub struct StaticSelectMenu {
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlainText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SlackOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<OptionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<SlackOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

impl StaticSelectMenu {
    pub fn new(action_id: impl Into<String>, options: Vec<SlackOption>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            options,
            option_groups: Vec::new(),
            initial_option: None,
            confirm: None,
        }
    }

    /// Preselect `option`. It should be one of the menu's options, Slack
    /// rejects the view otherwise.
    #[must_use]
    pub fn with_initial_option(mut self, option: SlackOption) -> Self {
        self.initial_option = Some(option);
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(PlainText::new(placeholder));
        self
    }
}

// Other select menus (users, conversations, channels, external) are not
// modelled yet.

/// Elements allowed as a section block's accessory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionElement {
    Button(Button),
    Checkboxes(CheckboxGroup),
    DatePicker(DatePicker),
    Image(Image),
    Overflow(Overflow),
    RadioButtons(RadioButtonGroup),
    StaticSelect(StaticSelectMenu),
}

/// Elements allowed inside an actions block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionElement {
    Button(Button),
    Checkboxes(CheckboxGroup),
    DatePicker(DatePicker),
    Overflow(Overflow),
    RadioButtons(RadioButtonGroup),
    StaticSelect(StaticSelectMenu),
}

/// Elements allowed inside an input block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InputElement {
    Checkboxes(CheckboxGroup),
    DatePicker(DatePicker),
    PlainTextInput(PlainTextInput),
    RadioButtons(RadioButtonGroup),
    StaticSelect(StaticSelectMenu),
}

/// Elements allowed inside a context block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextElement {
    Image(Image),
    Text(Text),
}

macro_rules! impl_from_element {
    ($target:ident: $($variant:ident($element:ty)),+ $(,)?) => {
        $(
            impl From<$element> for $target {
                fn from(element: $element) -> Self {
                    Self::$variant(element)
                }
            }
        )+
    };
}

impl_from_element!(SectionElement:
    Button(Button),
    Checkboxes(CheckboxGroup),
    DatePicker(DatePicker),
    Image(Image),
    Overflow(Overflow),
    RadioButtons(RadioButtonGroup),
    StaticSelect(StaticSelectMenu),
);

impl_from_element!(ActionElement:
    Button(Button),
    Checkboxes(CheckboxGroup),
    DatePicker(DatePicker),
    Overflow(Overflow),
    RadioButtons(RadioButtonGroup),
    StaticSelect(StaticSelectMenu),
);

impl_from_element!(InputElement:
    Checkboxes(CheckboxGroup),
    DatePicker(DatePicker),
    PlainTextInput(PlainTextInput),
    RadioButtons(RadioButtonGroup),
    StaticSelect(StaticSelectMenu),
);

impl_from_element!(ContextElement:
    Image(Image),
    Text(Text),
);

impl From<PlainText> for ContextElement {
    fn from(text: PlainText) -> Self {
        Self::Text(text.into())
    }
}

impl From<Mrkdwn> for ContextElement {
    fn from(text: Mrkdwn) -> Self {
        Self::Text(text.into())
    }
}
