use super::schema::Config;

macro_rules! define_credentials {
    ($( $name:literal, $env:literal => $($path:ident).+ );* $(;)?) => {
        /// (slot name, env var name) pairs.
        pub const CREDENTIAL_ENV_VARS: &[(&str, &str)] = &[$(($name, $env)),*];

        /// Get the current value of a credential field by slot name.
        pub fn get_credential_value<'a>(config: &'a Config, name: &str) -> Option<&'a str> {
            match name {
                $($name => Some(config.$($path).+.as_str()),)*
                _ => None,
            }
        }

        /// Apply overrides from `lookup`, which maps an env var name to its value.
        ///
        /// Set, non-empty values overwrite the corresponding config field.
        pub fn apply_overrides_from(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
            $(
                if let Some(val) = lookup($env) {
                    if !val.is_empty() {
                        config.$($path).+ = val;
                    }
                }
            )*
        }
    };
}

define_credentials! {
    "slack-bot-token",      "SLACK_MODERATOR_BOT_TOKEN"      => slack.bot_token;
    "slack-signing-secret", "SLACK_MODERATOR_SIGNING_SECRET" => slack.signing_secret;
    "slack-webhook-url",    "SLACK_MODERATOR_WEBHOOK_URL"    => slack.webhook_url;
}

/// Apply environment variable overrides.
///
/// Lets secrets be injected without touching the config file (useful for
/// containers and CI).
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides_from(config, |name| std::env::var(name).ok());
}
