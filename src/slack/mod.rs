use crate::blocks::ViewWrapper;
use crate::config::SlackConfig;
use crate::errors::{ModeratorError, ModeratorResult};
use crate::utils::http::{ERROR_BODY_SNIPPET_BYTES, body_snippet, default_http_client};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Legacy message attachment, as accepted by incoming webhooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Epoch seconds shown in the attachment footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// Body posted to an incoming webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// Body posted to an interaction's `response_url`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseMessage {
    pub text: String,
    pub response_type: &'static str,
    pub replace_original: bool,
}

impl ResponseMessage {
    /// A reply only the interacting user sees, leaving the original message alone.
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            response_type: "ephemeral",
            replace_original: false,
        }
    }
}

/// Thin Slack Web API client.
///
/// One instance is shared by every request handler; `reqwest::Client` pools
/// connections internally.
#[derive(Clone)]
pub struct SlackClient {
    client: reqwest::Client,
    bot_token: String,
    api_base: String,
    webhook_url: String,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    pub fn new(config: &SlackConfig) -> Self {
        Self::with_client(default_http_client(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &SlackConfig) -> Self {
        Self {
            client,
            bot_token: config.bot_token.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            webhook_url: config.webhook_url.clone(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_base, method)
    }

    /// Call a Web API method with a JSON body and bearer auth.
    pub async fn call_method<T: Serialize + ?Sized>(
        &self,
        method: &str,
        body: &T,
    ) -> ModeratorResult<Value> {
        let response = self
            .client
            .post(self.method_url(method))
            .bearer_auth(&self.bot_token)
            .json(body)
            .send()
            .await?;
        check_ok(method, response).await
    }

    /// Call a Web API method with a form-encoded body, token included in the form.
    pub async fn call_form_method(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> ModeratorResult<Value> {
        let mut form: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        form.push(("token", self.bot_token.as_str()));
        form.extend_from_slice(params);

        let response = self
            .client
            .post(self.method_url(method))
            .form(&form)
            .send()
            .await?;
        check_ok(method, response).await
    }

    /// POST JSON to a webhook or response URL. Any non-2xx status is an error.
    pub async fn post_to_url<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> ModeratorResult<()> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let snippet = body_snippet(response, ERROR_BODY_SNIPPET_BYTES).await;
            let target = url::Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| "url".to_string());
            return Err(ModeratorError::slack_api(
                target,
                format!("status {}: {}", status.as_u16(), snippet),
            ));
        }
        Ok(())
    }

    /// Deliver a message to the moderators' incoming webhook.
    pub async fn post_to_webhook(&self, message: &WebhookMessage) -> ModeratorResult<()> {
        self.post_to_url(&self.webhook_url, message).await
    }

    pub async fn open_view(&self, view: &ViewWrapper) -> ModeratorResult<()> {
        self.call_method("views.open", view).await?;
        debug!("opened view for trigger {}", view.trigger_id);
        Ok(())
    }

    /// Show `text` to `user` alone in `channel`.
    pub async fn post_ephemeral(
        &self,
        channel: &str,
        user: &str,
        text: &str,
    ) -> ModeratorResult<()> {
        let body = serde_json::json!({
            "channel": channel,
            "user": user,
            "text": text,
        });
        self.call_method("chat.postEphemeral", &body).await?;
        debug!("posted ephemeral message to {} in {}", user, channel);
        Ok(())
    }

    /// Permanent URL of the message `ts` in `channel`.
    pub async fn get_permalink(&self, channel: &str, ts: &str) -> ModeratorResult<String> {
        let json = self
            .call_form_method("chat.getPermalink", &[("channel", channel), ("message_ts", ts)])
            .await?;
        json.get("permalink")
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ModeratorError::slack_api("chat.getPermalink", "missing_permalink"))
    }

    /// Human-readable name of `user`: display name, then real name, then handle.
    pub async fn get_display_name(&self, user: &str) -> ModeratorResult<String> {
        let json = self
            .call_form_method("users.info", &[("user", user)])
            .await?;
        let info = json.get("user");
        let profile = info.and_then(|u| u.get("profile"));
        [
            profile.and_then(|p| p.get("display_name")),
            profile.and_then(|p| p.get("real_name")),
            info.and_then(|u| u.get("name")),
        ]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ModeratorError::slack_api("users.info", "missing_name"))
    }
}

async fn check_ok(method: &str, response: reqwest::Response) -> ModeratorResult<Value> {
    let status = response.status();
    if !status.is_success() {
        let snippet = body_snippet(response, ERROR_BODY_SNIPPET_BYTES).await;
        return Err(ModeratorError::slack_api(
            method,
            format!("status {}: {}", status.as_u16(), snippet),
        ));
    }
    let json: Value = response.json().await?;
    if json.get("ok").and_then(Value::as_bool) != Some(true) {
        let error = json
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        return Err(ModeratorError::slack_api(method, error));
    }
    Ok(json)
}
