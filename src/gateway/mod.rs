//! HTTP front door for Slack's interactivity requests.
//!
//! Verifies Slack's request signature, decodes the `payload` form field and
//! hands message shortcuts and form submissions to the report flow.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::errors::ModeratorResult;
use crate::interactions::{Interaction, parse_form_body};
use crate::report::{
    REPORT_FORM_CALLBACK_ID, REPORT_SHORTCUT_CALLBACK_ID, open_report_form, submit_report,
};
use crate::slack::SlackClient;

type HmacSha256 = Hmac<Sha256>;

pub const HEALTH_PATH: &str = "/api/health";

/// Max interactivity payload size: 1 MB.
const MAX_BODY_BYTES: usize = 1_048_576;

/// Requests signed further than this from our clock are rejected as replays.
const MAX_SIGNATURE_AGE_SECS: u64 = 5 * 60;

const SIGNATURE_HEADER: &str = "X-Slack-Signature";
const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";

/// Shared, read-only state of every request handler.
pub struct AppState {
    pub slack: SlackClient,
    /// Empty disables signature verification.
    pub signing_secret: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            slack: SlackClient::new(&config.slack),
            signing_secret: config.slack.signing_secret.clone(),
        }
    }
}

/// Build the HTTP router with the interactivity endpoint mounted at `path`.
pub fn build_router(state: Arc<AppState>, path: &str) -> Router {
    Router::new()
        .route(path, post(interactions_handler))
        .route(HEALTH_PATH, get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// GET /api/health
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// `v0=` followed by the hex HMAC-SHA256 of `v0:{timestamp}:{body}`.
pub fn compute_slack_signature(secret: &str, timestamp: &str, body: &[u8]) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    Some(format!("v0={}", hex::encode(mac.finalize().into_bytes())))
}

/// Check a request against Slack's signing scheme, `now` being the current
/// Unix time in seconds.
pub fn verify_slack_signature(
    secret: &str,
    timestamp: &str,
    signature: &str,
    body: &[u8],
    now: i64,
) -> bool {
    let Ok(sent_at) = timestamp.parse::<i64>() else {
        return false;
    };
    if now.abs_diff(sent_at) > MAX_SIGNATURE_AGE_SECS {
        return false;
    }
    let Some(expected) = compute_slack_signature(secret, timestamp, body) else {
        return false;
    };
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

fn check_signature(secret: &str, headers: &HeaderMap, body: &[u8]) -> bool {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    let (Some(timestamp), Some(signature)) = (header(TIMESTAMP_HEADER), header(SIGNATURE_HEADER))
    else {
        warn!("interaction rejected: missing signature headers");
        return false;
    };
    if !verify_slack_signature(
        secret,
        timestamp,
        signature,
        body,
        chrono::Utc::now().timestamp(),
    ) {
        warn!("interaction rejected: invalid or stale signature");
        return false;
    }
    true
}

/// POST {gateway.path}
async fn interactions_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !state.signing_secret.is_empty() && !check_signature(&state.signing_secret, &headers, &body)
    {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let interaction = match parse_form_body(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            warn!("interaction rejected: {}", e);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match dispatch(&state, &interaction).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            error!(
                "handling {:?} interaction failed (retryable: {}): {}",
                interaction.callback_id().unwrap_or_default(),
                e.is_retryable(),
                e
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn dispatch(state: &AppState, interaction: &Interaction) -> ModeratorResult<()> {
    match interaction {
        Interaction::MessageAction(action) if action.callback_id == REPORT_SHORTCUT_CALLBACK_ID => {
            open_report_form(&state.slack, action).await
        }
        Interaction::ViewSubmission(submission)
            if submission.view.callback_id == REPORT_FORM_CALLBACK_ID =>
        {
            submit_report(&state.slack, submission).await
        }
        other => {
            debug!(
                "ignoring interaction with callback id {:?}",
                other.callback_id()
            );
            Ok(())
        }
    }
}

/// Bind `host:port` and serve in a background task. Returns the task handle
/// and the bound address (useful with port 0).
pub async fn start(
    host: &str,
    port: u16,
    path: &str,
    state: AppState,
) -> Result<(tokio::task::JoinHandle<()>, SocketAddr)> {
    if state.signing_secret.is_empty() {
        warn!("no signing secret configured, interaction requests are NOT verified");
    }

    let app = build_router(Arc::new(state), path);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;
    info!("listening for Slack interactions on http://{}{}", local_addr, path);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("HTTP server error: {}", e);
        }
    });

    Ok((handle, local_addr))
}
