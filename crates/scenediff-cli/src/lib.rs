//! Scenediff CLI library
//!
//! Compares a directory of freshly captured scene PNG files against approved
//! baselines, writes per-scene composites under `<output>/diff-images`, and
//! emits JSON and Markdown summaries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg};
pub use config::{
    is_truthy, CliConfig, ColorChoice, RunConfig, Verbosity, DIFF_IMAGES_DIR, SUMMARY_JSON_NAME,
    SUMMARY_MD_NAME,
};
pub use error::{CliError, CliResult};
pub use output::ProgressReporter;
pub use runner::SceneRunner;

/// Message printed to stderr when enforcement rejects the run
pub const ENFORCEMENT_FAILED_MESSAGE: &str =
    "Scene capture diff enforcement failed due to severe regressions.";
