pub mod http;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Directory holding `config.json`. `SLACK_MODERATOR_HOME` wins over
/// `~/.slack-moderator`.
pub fn get_moderator_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("SLACK_MODERATOR_HOME") {
        return Ok(PathBuf::from(home));
    }
    Ok(dirs::home_dir()
        .context("Could not determine home directory")?
        .join(".slack-moderator"))
}

/// Keep at most `max_chars` characters of `s`. Counts `char`s, so a code
/// point is never split.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests;
