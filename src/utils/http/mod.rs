use reqwest::{Client, Response};
use std::time::Duration;

/// How much of an error response body ends up in logs and error messages.
pub const ERROR_BODY_SNIPPET_BYTES: usize = 512;

/// Build a `reqwest::Client` with standard timeouts (10 s connect, 30 s overall).
///
/// Falls back to the default client if the builder fails.
pub fn default_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Read at most `max_bytes` of a response body as lossy UTF-8.
///
/// Only used on error paths, so a read failure just ends the snippet early.
pub async fn body_snippet(mut resp: Response, max_bytes: usize) -> String {
    let mut buf = Vec::new();
    let mut truncated = false;
    while let Ok(Some(chunk)) = resp.chunk().await {
        if buf.len() + chunk.len() > max_bytes {
            let remaining = max_bytes.saturating_sub(buf.len());
            buf.extend_from_slice(&chunk[..remaining]);
            truncated = true;
            break;
        }
        buf.extend_from_slice(&chunk);
    }
    let mut text = String::from_utf8_lossy(&buf).trim().to_string();
    if truncated {
        text.push_str(" [truncated]");
    }
    text
}
