//! CLI configuration

use crate::commands::Cli;
use scenediff::Thresholds;
use std::path::PathBuf;

/// Subdirectory of the output directory that receives composites
pub const DIFF_IMAGES_DIR: &str = "diff-images";

/// Default summary JSON file name
pub const SUMMARY_JSON_NAME: &str = "scene_capture_diff_summary.json";

/// Default summary Markdown file name
pub const SUMMARY_MD_NAME: &str = "scene_capture_diff_summary.md";

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - minimal output
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

/// Console presentation settings
#[derive(Debug, Clone, Copy, Default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

/// Interpret a loosely-typed boolean flag; `1`, `true`, `yes` and `on` are
/// truthy (trimmed, case-insensitive), anything else is false.
#[must_use]
pub fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Everything one comparison run needs
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Approved baselines
    pub baseline_dir: PathBuf,
    /// Fresh captures
    pub capture_dir: PathBuf,
    /// Root for composites and summaries
    pub output_dir: PathBuf,
    /// Normalized thresholds
    pub thresholds: Thresholds,
    /// Fail the process on severe outcomes
    pub enforce: bool,
    summary_json: Option<PathBuf>,
    summary_md: Option<PathBuf>,
}

impl RunConfig {
    /// Create a configuration with default thresholds and no enforcement
    #[must_use]
    pub fn new(
        baseline_dir: impl Into<PathBuf>,
        capture_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            baseline_dir: baseline_dir.into(),
            capture_dir: capture_dir.into(),
            output_dir: output_dir.into(),
            thresholds: Thresholds::default(),
            enforce: false,
            summary_json: None,
            summary_md: None,
        }
    }

    /// Build from parsed arguments
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::new(&cli.baseline_dir, &cli.capture_dir, &cli.output_dir)
            .with_thresholds(Thresholds::new(cli.warn_threshold, cli.fail_threshold))
            .with_enforce(is_truthy(&cli.enforce));
        config.summary_json.clone_from(&cli.summary_json);
        config.summary_md.clone_from(&cli.summary_md);
        config
    }

    /// Set thresholds
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set enforcement
    #[must_use]
    pub const fn with_enforce(mut self, enforce: bool) -> Self {
        self.enforce = enforce;
        self
    }

    /// Override the summary JSON location
    #[must_use]
    pub fn with_summary_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary_json = Some(path.into());
        self
    }

    /// Override the summary Markdown location
    #[must_use]
    pub fn with_summary_md(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary_md = Some(path.into());
        self
    }

    /// Directory receiving composites
    #[must_use]
    pub fn diff_dir(&self) -> PathBuf {
        self.output_dir.join(DIFF_IMAGES_DIR)
    }

    /// Effective summary JSON path
    #[must_use]
    pub fn summary_json_path(&self) -> PathBuf {
        self.summary_json
            .clone()
            .unwrap_or_else(|| self.output_dir.join(SUMMARY_JSON_NAME))
    }

    /// Effective summary Markdown path
    #[must_use]
    pub fn summary_md_path(&self) -> PathBuf {
        self.summary_md
            .clone()
            .unwrap_or_else(|| self.output_dir.join(SUMMARY_MD_NAME))
    }

    /// Baseline directory as recorded in the summary
    #[must_use]
    pub fn baseline_label(&self) -> String {
        self.baseline_dir.display().to_string()
    }

    /// Capture directory as recorded in the summary
    #[must_use]
    pub fn capture_label(&self) -> String {
        self.capture_dir.display().to_string()
    }
}
