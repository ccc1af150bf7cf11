#![warn(clippy::pedantic)]
// Noisy doc/signature lints on a small pub API
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
// Style preference: format!("{}", x) over format!("{x}") for complex exprs
#![allow(clippy::uninlined_format_args)]
// blocks::elements::ButtonStyle and friends
#![allow(clippy::module_name_repetitions)]

pub mod blocks;
pub mod cli;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod interactions;
pub mod report;
pub mod slack;
pub(crate) mod utils;

/// Re-exports for fuzz targets. Not part of the public API.
#[doc(hidden)]
pub mod fuzz_api {
    pub use crate::config::loader::parse_config;
    pub use crate::gateway::{compute_slack_signature, verify_slack_signature};
    pub use crate::interactions::parse_form_body;
    pub use crate::report::{MAX_METADATA_CHARS, ReportContext};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
