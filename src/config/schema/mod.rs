use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ModeratorError;

/// Generates a `Debug` impl that redacts secret fields.
///
/// Field specifiers:
/// - `field_name`: printed normally via `&self.field_name`
/// - `redact(field_name)`: `String` field, shows `[empty]` or `[REDACTED]`
macro_rules! redact_debug {
    (@field $builder:ident, $self:ident, redact($field:ident)) => {
        $builder.field(
            stringify!($field),
            &if $self.$field.is_empty() {
                "[empty]"
            } else {
                "[REDACTED]"
            },
        );
    };
    (@field $builder:ident, $self:ident, $field:ident) => {
        $builder.field(stringify!($field), &$self.$field);
    };

    (@fields $builder:ident, $self:ident,) => {};
    (@fields $builder:ident, $self:ident, redact($field:ident), $($rest:tt)*) => {
        redact_debug!(@field $builder, $self, redact($field));
        redact_debug!(@fields $builder, $self, $($rest)*);
    };
    (@fields $builder:ident, $self:ident, $field:ident, $($rest:tt)*) => {
        redact_debug!(@field $builder, $self, $field);
        redact_debug!(@fields $builder, $self, $($rest)*);
    };

    ($struct_name:ident, $($fields:tt)*) => {
        impl std::fmt::Debug for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut builder = f.debug_struct(stringify!($struct_name));
                redact_debug!(@fields builder, self, $($fields)*);
                builder.finish()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Slack
// ---------------------------------------------------------------------------

pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";

fn default_api_base() -> String {
    DEFAULT_SLACK_API_BASE.to_string()
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bot User OAuth token (`xoxb-...`), needs `chat:write`, `users:read`
    /// and the `commands` scope for the message shortcut.
    #[serde(default, rename = "botToken")]
    pub bot_token: String,
    /// App signing secret used to verify inbound interaction requests.
    #[serde(default, rename = "signingSecret")]
    pub signing_secret: String,
    /// Incoming webhook that delivers reports to the moderators' channel.
    /// The URL embeds a credential, so it is treated as a secret.
    #[serde(default, rename = "webhookUrl")]
    pub webhook_url: String,
    #[serde(default = "default_api_base", rename = "apiBase")]
    pub api_base: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            signing_secret: String::new(),
            webhook_url: String::new(),
            api_base: default_api_base(),
        }
    }
}

redact_debug!(
    SlackConfig,
    redact(bot_token),
    redact(signing_secret),
    redact(webhook_url),
    api_base,
);

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_path() -> String {
    "/slack/interactions".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request URL configured under the app's "Interactivity & Shortcuts".
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ModeratorError> {
        self.validate_slack()?;
        self.validate_gateway()?;
        Ok(())
    }

    fn validate_slack(&self) -> Result<(), ModeratorError> {
        let s = &self.slack;

        if s.bot_token.is_empty() {
            return Err(ModeratorError::Config(
                "slack.botToken is required".into(),
            ));
        }
        if !s.bot_token.starts_with("xoxb-") {
            warn!("slack.botToken does not look like a bot token (expected xoxb- prefix)");
        }
        if s.webhook_url.is_empty() {
            return Err(ModeratorError::Config(
                "slack.webhookUrl is required".into(),
            ));
        }
        require_http_url("slack.webhookUrl", &s.webhook_url)?;
        require_http_url("slack.apiBase", &s.api_base)?;
        if s.signing_secret.is_empty() {
            warn!("slack.signingSecret is empty, inbound requests will not be verified");
        }
        Ok(())
    }

    fn validate_gateway(&self) -> Result<(), ModeratorError> {
        let g = &self.gateway;

        if g.port == 0 {
            return Err(ModeratorError::Config("gateway.port must be > 0".into()));
        }
        if g.port < 1024 {
            warn!(
                "gateway.port {} is a privileged port (< 1024), may require elevated permissions",
                g.port
            );
        }
        if !g.path.starts_with('/') {
            return Err(ModeratorError::Config(
                "gateway.path must start with '/'".into(),
            ));
        }
        if g.path == crate::gateway::HEALTH_PATH {
            return Err(ModeratorError::Config(format!(
                "gateway.path must not be {}",
                crate::gateway::HEALTH_PATH
            )));
        }
        Ok(())
    }
}

fn require_http_url(key: &str, value: &str) -> Result<(), ModeratorError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ModeratorError::Config(format!("{key} is not a valid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ModeratorError::Config(format!(
            "{key} must use http or https, got {other}"
        ))),
    }
}
