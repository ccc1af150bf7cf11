//! Inbound interactivity payloads.
//!
//! Slack posts `application/x-www-form-urlencoded` bodies with a single
//! `payload` field holding JSON. Only the parts the report flow reads are
//! modelled; everything else is ignored on deserialization.

use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::{ModeratorError, ModeratorResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    /// A message shortcut picked from a message's context menu.
    MessageAction(MessageAction),
    ViewSubmission(ViewSubmission),
    #[serde(other)]
    Unsupported,
}

impl Interaction {
    /// Callback id the interaction was routed by, if it has one.
    pub fn callback_id(&self) -> Option<&str> {
        match self {
            Self::MessageAction(action) => Some(&action.callback_id),
            Self::ViewSubmission(submission) => Some(&submission.view.callback_id),
            Self::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    /// Handle. `message_action` payloads carry it as `name`, view payloads
    /// as `username` (sometimes alongside `name`).
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    pub fn handle(&self) -> &str {
        self.username
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Absent for some bot messages.
    #[serde(default)]
    pub user: String,
    pub ts: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageAction {
    pub callback_id: String,
    pub trigger_id: String,
    pub user: User,
    pub channel: Channel,
    pub message: Message,
    #[serde(default)]
    pub response_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewSubmission {
    pub user: User,
    pub view: View,
    /// Only present when the modal has a block with `response_url_enabled`.
    #[serde(default)]
    pub response_urls: Vec<ResponseUrl>,
}

impl ViewSubmission {
    pub fn response_url(&self) -> Option<&str> {
        self.response_urls
            .first()
            .map(|r| r.response_url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseUrl {
    pub response_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct View {
    #[serde(default)]
    pub callback_id: String,
    #[serde(default)]
    pub private_metadata: String,
    #[serde(default)]
    pub state: ViewState,
}

/// Submitted input values, keyed by block id then action id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub values: HashMap<String, HashMap<String, StateValue>>,
}

impl ViewState {
    /// The single element of input block `block_id`, whatever its action id.
    fn element(&self, block_id: &str) -> Option<&StateValue> {
        self.values.get(block_id)?.values().next()
    }

    /// Text typed into a plain-text input.
    pub fn text_value(&self, block_id: &str) -> Option<&str> {
        self.element(block_id)?.value.as_deref()
    }

    /// Value of the option picked in a select menu.
    pub fn selected_value(&self, block_id: &str) -> Option<&str> {
        self.element(block_id)?
            .selected_option
            .as_ref()
            .map(|o| o.value.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateValue {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub selected_option: Option<SelectedOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOption {
    pub value: String,
}

/// Decode the JSON document in a form-encoded interactivity body.
pub fn parse_form_body(body: &[u8]) -> ModeratorResult<Interaction> {
    let payload = form_urlencoded::parse(body)
        .find(|(key, _)| key == "payload")
        .map(|(_, value)| value)
        .ok_or_else(|| ModeratorError::Payload("missing payload field".into()))?;
    parse_payload(&payload)
}

pub fn parse_payload(json: &str) -> ModeratorResult<Interaction> {
    serde_json::from_str(json).map_err(|e| ModeratorError::Payload(e.to_string()))
}

#[cfg(test)]
mod tests;
