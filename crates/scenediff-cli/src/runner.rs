//! Comparison run orchestration

use crate::config::{CliConfig, RunConfig};
use crate::error::{CliError, CliResult};
use crate::output::ProgressReporter;
use scenediff::{SceneComparator, SceneIndex, SummaryReport};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Drives one comparison run end to end
#[derive(Debug)]
pub struct SceneRunner {
    config: RunConfig,
    reporter: ProgressReporter,
}

impl SceneRunner {
    /// Create a new runner
    #[must_use]
    pub fn new(config: RunConfig, cli: &CliConfig) -> Self {
        let reporter = ProgressReporter::new(cli.color.should_color(), cli.verbosity.is_quiet());
        Self { config, reporter }
    }

    /// Compare every scene, then write both summary files.
    ///
    /// # Errors
    ///
    /// Returns error if a directory cannot be read, an image cannot be
    /// decoded, or an output file cannot be written
    pub fn run(&mut self) -> CliResult<SummaryReport> {
        let start = Instant::now();
        let diff_dir = self.config.diff_dir();
        create_dir(&diff_dir)?;

        let index = SceneIndex::scan(&self.config.baseline_dir, &self.config.capture_dir)?;
        info!(
            scenes = index.len(),
            baseline_dir = %self.config.baseline_dir.display(),
            capture_dir = %self.config.capture_dir.display(),
            "comparing scenes"
        );

        let mut comparator = SceneComparator::on_disk(self.config.thresholds, &diff_dir);
        let pairs = index.pairs();
        let mut results = Vec::with_capacity(pairs.len());

        self.reporter.header("Scene Capture Diff");
        self.reporter.start_progress(pairs.len() as u64, "Comparing scenes");
        for pair in &pairs {
            self.reporter.set_message(&pair.name);
            let result = match comparator.compare(pair) {
                Ok(result) => result,
                Err(e) => {
                    self.reporter.finish();
                    return Err(e.into());
                }
            };
            self.reporter.scene(&result);
            self.reporter.increment(1);
            results.push(result);
        }
        self.reporter.finish();

        let report = SummaryReport::new(
            self.config.baseline_label(),
            self.config.capture_label(),
            &self.config.thresholds,
            self.config.enforce,
            results,
        );
        self.write_summaries(&report)?;
        self.reporter.summary(&report, start.elapsed());
        Ok(report)
    }

    fn write_summaries(&self, report: &SummaryReport) -> CliResult<()> {
        let json = report
            .to_json()
            .map_err(|e| CliError::report_generation(e.to_string()))?;
        let json_path = self.config.summary_json_path();
        write_file(&json_path, &json)?;

        let md_path = self.config.summary_md_path();
        write_file(&md_path, &report.to_markdown())?;

        self.reporter.info(&format!("Summary written to {}", json_path.display()));
        self.reporter.info(&format!("Summary written to {}", md_path.display()));
        Ok(())
    }
}

fn create_dir(path: &Path) -> CliResult<()> {
    std::fs::create_dir_all(path).map_err(|e| CliError::write(path, e))
}

fn write_file(path: &Path, contents: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }
    debug!(path = %path.display(), bytes = contents.len(), "writing summary");
    std::fs::write(path, contents).map_err(|e| CliError::write(path, e))
}
