//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use scenediff::{DEFAULT_FAIL_THRESHOLD, DEFAULT_WARN_THRESHOLD};
use std::path::PathBuf;

/// Scenediff: compare scene captures against approved baseline PNG files
#[derive(Parser, Debug)]
#[command(name = "scenediff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing approved baseline PNG files
    #[arg(long)]
    pub baseline_dir: PathBuf,

    /// Directory containing newly captured PNG files
    #[arg(long)]
    pub capture_dir: PathBuf,

    /// Output directory for diff artifacts and summary files
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Warn threshold for mean absolute pixel delta ratio
    #[arg(long, default_value_t = DEFAULT_WARN_THRESHOLD, allow_negative_numbers = true)]
    pub warn_threshold: f64,

    /// Fail threshold for mean absolute pixel delta ratio
    #[arg(long, default_value_t = DEFAULT_FAIL_THRESHOLD, allow_negative_numbers = true)]
    pub fail_threshold: f64,

    /// If true, exit non-zero on severe regressions (1, true, yes, on)
    #[arg(long, default_value = "false")]
    pub enforce: String,

    /// Path for the summary JSON [default: <output-dir>/scene_capture_diff_summary.json]
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Path for the summary Markdown [default: <output-dir>/scene_capture_diff_summary.md]
    #[arg(long)]
    pub summary_md: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorArg,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
