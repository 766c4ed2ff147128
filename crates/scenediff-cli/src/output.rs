//! Console progress reporting on stderr

use console::{style, Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use scenediff::{DiffResult, SceneStatus, SummaryReport};
use std::time::Duration;

/// Progress reporter for a comparison run
#[derive(Debug)]
pub struct ProgressReporter {
    term: Term,
    progress_bar: Option<ProgressBar>,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl ProgressReporter {
    /// Create a new progress reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            progress_bar: None,
            use_color,
            quiet,
        }
    }

    /// Start a progress bar over `total` scenes
    pub fn start_progress(&mut self, total: u64, message: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message(message.to_string());
        self.progress_bar = Some(pb);
    }

    /// Increment progress
    pub fn increment(&self, delta: u64) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(delta);
        }
    }

    /// Update progress message
    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    /// Finish progress bar
    pub fn finish(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }

    fn line(&self, symbol: &str, plain: &str, paint: fn(&str) -> String, message: &str) {
        let prefix = if self.use_color {
            paint(symbol)
        } else {
            plain.to_string()
        };
        let text = format!("{prefix} {message}");
        match self.progress_bar {
            Some(ref pb) => pb.suspend(|| {
                let _ = self.term.write_line(&text);
            }),
            None => {
                let _ = self.term.write_line(&text);
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line("✓", "PASS", |s| style(s).green().bold().to_string(), message);
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // failures are printed even in quiet mode
        self.line("✗", "FAIL", |s| style(s).red().bold().to_string(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line("⚠", "WARN", |s| style(s).yellow().bold().to_string(), message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line("ℹ", "INFO", |s| style(s).blue().bold().to_string(), message);
    }

    /// Print the line for one scene result
    pub fn scene(&self, result: &DiffResult) {
        let message = if result.note.is_empty() {
            format!("{} ({}, diff {:.6})", result.scene, result.status, result.diff_ratio)
        } else {
            format!("{} ({}): {}", result.scene, result.status, result.note)
        };
        match result.status {
            SceneStatus::Pass => self.success(&message),
            SceneStatus::Warn => self.warning(&message),
            _ => self.failure(&message),
        }
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if self.quiet {
            return;
        }

        let styled = if self.use_color {
            style(title).bold().underlined().to_string()
        } else {
            format!("=== {title} ===")
        };

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&styled);
    }

    /// Print the run summary line
    pub fn summary(&self, report: &SummaryReport, duration: Duration) {
        let severe = report.severe_count;
        if self.quiet && severe == 0 {
            return;
        }

        let total = report.results.len();
        let passed = report.count(SceneStatus::Pass);
        let warned = report.count(SceneStatus::Warn);
        let secs = duration.as_secs_f64();

        let _ = self.term.write_line("");
        if self.use_color {
            let passed_style = Style::new().green().bold();
            let warn_style = Style::new().yellow();
            let severe_style = Style::new().red().bold();

            let status = if severe > 0 {
                severe_style.apply_to("REGRESSED")
            } else {
                passed_style.apply_to("CLEAN")
            };
            let _ = self.term.write_line(&format!(
                "{} {} scenes in {:.2}s ({} passed, {} warned, {} severe)",
                status,
                total,
                secs,
                passed_style.apply_to(passed),
                warn_style.apply_to(warned),
                if severe > 0 {
                    severe_style.apply_to(severe).to_string()
                } else {
                    severe.to_string()
                },
            ));
        } else {
            let status = if severe > 0 { "REGRESSED" } else { "CLEAN" };
            let _ = self.term.write_line(&format!(
                "{status} {total} scenes in {secs:.2}s ({passed} passed, {warned} warned, {severe} severe)"
            ));
        }
    }
}
