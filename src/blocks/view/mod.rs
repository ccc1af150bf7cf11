//! Modal views and the `views.open` request body.

use serde::Serialize;

use super::Block;
use super::objects::PlainText;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Request body for `views.open`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewWrapper {
    pub trigger_id: String,
    pub view: Modal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "modal")]
pub struct Modal {
    pub title: PlainText,
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<PlainText>,
    /// Required by Slack whenever the modal contains input blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<PlainText>,
    /// Opaque string echoed back in `view_submission` payloads; Slack caps it
    /// at 3000 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub clear_on_close: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub notify_on_close: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl Modal {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: PlainText::new(title),
            blocks,
            close: None,
            submit: None,
            private_metadata: None,
            callback_id: None,
            clear_on_close: false,
            notify_on_close: false,
            external_id: None,
        }
    }

    #[must_use]
    pub fn with_buttons(mut self, submit: impl Into<String>, close: impl Into<String>) -> Self {
        self.submit = Some(PlainText::new(submit));
        self.close = Some(PlainText::new(close));
        self
    }

    #[must_use]
    pub fn with_callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.callback_id = Some(callback_id.into());
        self
    }

    #[must_use]
    pub fn with_private_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.private_metadata = Some(metadata.into());
        self
    }

    #[must_use]
    pub fn clear_on_close(mut self, clear: bool) -> Self {
        self.clear_on_close = clear;
        self
    }

    #[must_use]
    pub fn notify_on_close(mut self, notify: bool) -> Self {
        self.notify_on_close = notify;
        self
    }
}
