//! The report flow: a message shortcut opens a form, submitting the form
//! forwards the report to the moderators' webhook.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::blocks::elements::{PlainTextInput, StaticSelectMenu};
use crate::blocks::objects::SlackOption;
use crate::blocks::{Block, Input, Modal, ViewWrapper};
use crate::errors::{ModeratorError, ModeratorResult};
use crate::interactions::{Channel, MessageAction, User, ViewState, ViewSubmission};
use crate::slack::{Attachment, ResponseMessage, SlackClient, WebhookMessage};
use crate::utils::truncate_chars;

/// Callback id of the "Report message" shortcut configured for the app.
pub const REPORT_SHORTCUT_CALLBACK_ID: &str = "report_message";
/// Callback id of the report form.
pub const REPORT_FORM_CALLBACK_ID: &str = "send_report";
/// Channel name Slack reports for direct messages.
pub const DIRECT_MESSAGE_CHANNEL: &str = "directmessage";
/// Slack's limit on a view's `private_metadata`.
pub const MAX_METADATA_CHARS: usize = 3000;
/// Reported text kept in the form's private metadata. The encoded blob is
/// trimmed further if escaping or a long channel name pushes it past
/// [`MAX_METADATA_CHARS`].
pub const MAX_CONTENT_CHARS: usize = 2900;

const REASON_BLOCK_ID: &str = "message";
const REASON_ACTION_ID: &str = "reason";
const ANONYMITY_BLOCK_ID: &str = "anonymous";
const ANONYMITY_ACTION_ID: &str = "anonymity";
const ANONYMOUS_YES: &str = "yes";
const ANONYMOUS_NO: &str = "no";

const LINK_TEXT: &str = "message they reported";
const ACKNOWLEDGEMENT: &str = "Thank you! Your report has been submitted.";

/// What the form needs to remember about the reported message between
/// opening and submission. Keys are kept to one letter to leave room for
/// the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    #[serde(rename = "s")]
    pub sender: String,
    #[serde(rename = "t")]
    pub ts: String,
    #[serde(rename = "c")]
    pub content: String,
    #[serde(rename = "h", default, skip_serializing_if = "String::is_empty")]
    pub channel_id: String,
    #[serde(rename = "n", default, skip_serializing_if = "String::is_empty")]
    pub channel_name: String,
}

impl ReportContext {
    pub fn from_action(action: &MessageAction) -> Self {
        Self {
            sender: action.message.user.clone(),
            ts: action.message.ts.clone(),
            content: truncate_chars(&action.message.text, MAX_CONTENT_CHARS).to_string(),
            channel_id: action.channel.id.clone(),
            channel_name: action.channel.name.clone(),
        }
    }

    /// JSON for the form's private metadata, at most [`MAX_METADATA_CHARS`]
    /// long. Content is cut from the end until the escaped blob fits.
    pub fn encode(&self) -> ModeratorResult<String> {
        let encoded = serde_json::to_string(self)?;
        if fits_metadata(&encoded) {
            return Ok(encoded);
        }

        let with_content = |chars: usize| -> ModeratorResult<String> {
            let fitted = Self {
                content: truncate_chars(&self.content, chars).to_string(),
                ..self.clone()
            };
            Ok(serde_json::to_string(&fitted)?)
        };
        let mut best = with_content(0)?;
        if !fits_metadata(&best) {
            return Err(ModeratorError::Payload(format!(
                "report metadata exceeds {MAX_METADATA_CHARS} characters"
            )));
        }

        // Longest content prefix that fits: `lo` always fits, `hi + 1` never does.
        let (mut lo, mut hi) = (0, self.content.chars().count());
        while lo < hi {
            let mid = (lo + hi).div_ceil(2);
            let candidate = with_content(mid)?;
            if fits_metadata(&candidate) {
                lo = mid;
                best = candidate;
            } else {
                hi = mid - 1;
            }
        }
        debug!("reported content cut to {} chars to fit private_metadata", lo);
        Ok(best)
    }

    pub fn decode(metadata: &str) -> ModeratorResult<Self> {
        Ok(serde_json::from_str(metadata)?)
    }

    pub fn channel(&self) -> Channel {
        Channel {
            id: self.channel_id.clone(),
            name: self.channel_name.clone(),
        }
    }

    /// The message's timestamp as epoch seconds.
    pub fn timestamp(&self) -> ModeratorResult<f64> {
        self.ts
            .parse::<f64>()
            .map_err(|source| ModeratorError::Timestamp {
                value: self.ts.clone(),
                source,
            })
    }
}

fn fits_metadata(encoded: &str) -> bool {
    encoded.chars().count() <= MAX_METADATA_CHARS
}

/// The reporter's answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSubmission {
    pub reason: String,
    pub anonymous: bool,
}

impl ReportSubmission {
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            reason: state
                .text_value(REASON_BLOCK_ID)
                .unwrap_or_default()
                .to_string(),
            anonymous: state.selected_value(ANONYMITY_BLOCK_ID) == Some(ANONYMOUS_YES),
        }
    }
}

pub fn is_direct_message(channel: &Channel) -> bool {
    channel.name == DIRECT_MESSAGE_CHANNEL
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// The form shown when someone picks the shortcut on `action.message`.
pub fn build_report_modal(action: &MessageAction) -> ModeratorResult<ViewWrapper> {
    let reason = Input::new(
        "Why are you reporting this message?",
        PlainTextInput::new(REASON_ACTION_ID).multiline(),
    )
    .with_block_id(REASON_BLOCK_ID)
    .with_hint(
        "Moderators will see whatever you write here, along with the message being reported.",
    );

    let mut blocks: Vec<Block> = vec![reason.into()];

    // No anonymity choice in direct messages.
    if !is_direct_message(&action.channel) {
        let no = SlackOption::new("No, report with my username", ANONYMOUS_NO);
        let yes = SlackOption::new("Yes, report anonymously", ANONYMOUS_YES);
        let select = StaticSelectMenu::new(ANONYMITY_ACTION_ID, vec![no.clone(), yes])
            .with_initial_option(no);
        blocks.push(
            Input::new("Would you like to report anonymously?", select)
                .with_block_id(ANONYMITY_BLOCK_ID)
                .into(),
        );
    }

    let metadata = ReportContext::from_action(action).encode()?;
    let view = Modal::new("Report Message", blocks)
        .with_buttons("Report", "Cancel")
        .with_callback_id(REPORT_FORM_CALLBACK_ID)
        .with_private_metadata(metadata)
        .clear_on_close(true)
        .notify_on_close(false);

    Ok(ViewWrapper {
        trigger_id: action.trigger_id.clone(),
        view,
    })
}

pub async fn open_report_form(slack: &SlackClient, action: &MessageAction) -> ModeratorResult<()> {
    let wrapper = build_report_modal(action)?;
    slack.open_view(&wrapper).await?;
    debug!(
        "report form opened by {} for message {} in {}",
        action.user.id, action.message.ts, action.channel.id
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

pub fn describe_reporter(user: &User, anonymous: bool) -> String {
    if anonymous {
        "An anonymous user".to_string()
    } else {
        format!("<@{}|{}>", user.id, user.handle())
    }
}

pub fn describe_location(channel: &Channel) -> String {
    if is_direct_message(channel) {
        "a direct message".to_string()
    } else {
        format!("<#{}|{}>", channel.id, channel.name)
    }
}

/// `<permalink|message they reported>`, or the bare phrase without a link.
pub fn message_link(permalink: Option<&str>) -> String {
    match permalink {
        Some(link) => format!("<{link}|{LINK_TEXT}>"),
        None => LINK_TEXT.to_string(),
    }
}

pub fn describe_author(sender: &str, display_name: Option<&str>) -> String {
    match display_name {
        Some(name) => format!("<@{sender}|{name}>"),
        None => format!("<@{sender}>"),
    }
}

/// Inputs for the webhook message, with lookups already resolved.
#[derive(Debug, Clone)]
pub struct ReportDraft<'a> {
    pub reporter: &'a User,
    pub channel: &'a Channel,
    pub submission: &'a ReportSubmission,
    pub context: &'a ReportContext,
    pub ts: f64,
    pub permalink: Option<&'a str>,
    pub author_name: Option<&'a str>,
}

pub fn compose_report(draft: &ReportDraft<'_>) -> WebhookMessage {
    let summary = format!(
        "{} *reported a message* in {}:",
        describe_reporter(draft.reporter, draft.submission.anonymous),
        describe_location(draft.channel)
    );
    let reason = &draft.submission.reason;
    let content = &draft.context.content;

    WebhookMessage {
        text: summary,
        attachments: vec![
            Attachment {
                pretext: Some("They said:".to_string()),
                text: Some(reason.clone()),
                mrkdwn_in: vec!["text"],
                fallback: Some(format!("They said: {reason}")),
                ..Attachment::default()
            },
            Attachment {
                pretext: Some(format!("The {} was:", message_link(draft.permalink))),
                author_name: Some(describe_author(&draft.context.sender, draft.author_name)),
                text: Some(content.clone()),
                ts: Some(draft.ts),
                mrkdwn_in: vec!["text", "pretext", "author_name"],
                fallback: Some(format!("The message they reported was: {content}")),
            },
        ],
    }
}

/// Forward a submitted report form to the moderators and thank the reporter.
///
/// Permalink and author lookups degrade to unlinked text; metadata, timestamp
/// and webhook failures abort.
pub async fn submit_report(slack: &SlackClient, submission: &ViewSubmission) -> ModeratorResult<()> {
    let answers = ReportSubmission::from_state(&submission.view.state);
    let context = ReportContext::decode(&submission.view.private_metadata)?;
    let channel = context.channel();
    let ts = context.timestamp()?;

    let permalink = if is_direct_message(&channel) {
        None
    } else {
        match slack.get_permalink(&channel.id, &context.ts).await {
            Ok(link) => Some(link),
            Err(e) => {
                warn!(
                    "failed to get permalink for {} in {}: {}",
                    context.ts, channel.id, e
                );
                None
            }
        }
    };

    let author_name = match slack.get_display_name(&context.sender).await {
        Ok(name) => Some(name),
        Err(e) => {
            warn!("failed to look up sender {}: {}", context.sender, e);
            None
        }
    };

    let report = compose_report(&ReportDraft {
        reporter: &submission.user,
        channel: &channel,
        submission: &answers,
        context: &context,
        ts,
        permalink: permalink.as_deref(),
        author_name: author_name.as_deref(),
    });
    slack.post_to_webhook(&report).await?;
    info!(
        "report on message {} in {} forwarded (anonymous: {})",
        context.ts, channel.id, answers.anonymous
    );

    // Acknowledgement is best-effort from here on.
    let acknowledged = match submission.response_url() {
        Some(url) => {
            slack
                .post_to_url(url, &ResponseMessage::ephemeral(ACKNOWLEDGEMENT))
                .await
        }
        None if !channel.id.is_empty() => {
            slack
                .post_ephemeral(&channel.id, &submission.user.id, ACKNOWLEDGEMENT)
                .await
        }
        None => {
            warn!("no channel or response_url on submission, skipping acknowledgement");
            return Ok(());
        }
    };
    if let Err(e) = acknowledged {
        error!("failed to acknowledge report: {}", e);
    }
    Ok(())
}
