//! Report aggregation: per-status counts, the severe total, the enforcement
//! decision, and the JSON / Markdown renderings of a run.

use crate::comparator::DiffResult;
use crate::result::ScenediffResult;
use crate::status::SceneStatus;
use crate::thresholds::Thresholds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Occurrences of each status; statuses that never occurred are absent
pub type StatusCounts = BTreeMap<SceneStatus, usize>;

/// Count statuses across `results`
#[must_use]
pub fn count_statuses(results: &[DiffResult]) -> StatusCounts {
    let mut counts = StatusCounts::new();
    for result in results {
        *counts.entry(result.status).or_insert(0) += 1;
    }
    counts
}

/// Sum of fail, missing and mismatch occurrences
#[must_use]
pub fn severe_count(counts: &StatusCounts) -> usize {
    counts
        .iter()
        .filter(|(status, _)| status.is_severe())
        .map(|(_, n)| n)
        .sum()
}

/// Summary of one comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Baseline directory as given
    pub baseline_dir: String,
    /// Capture directory as given
    pub capture_dir: String,
    /// Normalized warn threshold
    pub warn_threshold: f64,
    /// Normalized fail threshold
    pub fail_threshold: f64,
    /// Whether severe outcomes should fail the run
    pub enforce: bool,
    /// Per-status counts
    pub counts: StatusCounts,
    /// fail + missing_capture + missing_baseline + dimension_mismatch
    pub severe_count: usize,
    /// One record per scene, in scene order
    pub results: Vec<DiffResult>,
}

impl SummaryReport {
    /// Aggregate `results`
    #[must_use]
    pub fn new(
        baseline_dir: impl Into<String>,
        capture_dir: impl Into<String>,
        thresholds: &Thresholds,
        enforce: bool,
        results: Vec<DiffResult>,
    ) -> Self {
        let counts = count_statuses(&results);
        let severe_count = severe_count(&counts);
        Self {
            baseline_dir: baseline_dir.into(),
            capture_dir: capture_dir.into(),
            warn_threshold: thresholds.warn(),
            fail_threshold: thresholds.fail(),
            enforce,
            counts,
            severe_count,
            results,
        }
    }

    /// Occurrences of `status`
    #[must_use]
    pub fn count(&self, status: SceneStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Whether the caller should exit non-zero
    #[must_use]
    pub const fn should_fail(&self) -> bool {
        self.enforce && self.severe_count > 0
    }

    /// Pretty JSON payload
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> ScenediffResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Markdown table plus per-status summary
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("## Scene Capture Visual Diff\n\n");
        let _ = writeln!(md, "- Warn threshold: `{:.4}`", self.warn_threshold);
        let _ = writeln!(md, "- Fail threshold: `{:.4}`", self.fail_threshold);
        let _ = writeln!(md, "- Enforce fail mode: `{}`", self.enforce);
        md.push('\n');
        md.push_str("| Scene | Status | Mean Diff Ratio | Changed Pixel Ratio | Notes |\n");
        md.push_str("|---|---|---:|---:|---|\n");

        for result in &self.results {
            let note = if result.note.is_empty() {
                "-"
            } else {
                result.note.as_str()
            };
            let _ = writeln!(
                md,
                "| `{}` | `{}` | `{:.6}` | `{:.6}` | {} |",
                result.scene, result.status, result.diff_ratio, result.changed_pixel_ratio, note
            );
        }

        md.push_str("\nSummary:\n");
        for status in SceneStatus::ALL {
            let _ = writeln!(md, "- {status}: {}", self.count(status));
        }
        md
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn result(scene: &str, status: SceneStatus, ratio: f64, note: &str) -> DiffResult {
        DiffResult {
            scene: scene.to_string(),
            status,
            diff_ratio: ratio,
            changed_pixel_ratio: ratio,
            baseline_path: String::new(),
            capture_path: String::new(),
            diff_image_path: String::new(),
            note: note.to_string(),
        }
    }

    fn sample(enforce: bool) -> SummaryReport {
        SummaryReport::new(
            "baselines",
            "captures",
            &Thresholds::default(),
            enforce,
            vec![
                result("a.png", SceneStatus::Pass, 0.0, ""),
                result("b.png", SceneStatus::Warn, 0.02, ""),
                result("c.png", SceneStatus::MissingBaseline, 1.0, "Capture exists without baseline file."),
                result("d.png", SceneStatus::Pass, 0.001, ""),
            ],
        )
    }

    mod count_tests {
        use super::*;

        #[test]
        fn test_counts_only_present_statuses() {
            let report = sample(false);
            assert_eq!(report.counts.len(), 3);
            assert_eq!(report.count(SceneStatus::Pass), 2);
            assert_eq!(report.count(SceneStatus::Warn), 1);
            assert_eq!(report.count(SceneStatus::Fail), 0);
        }

        #[test]
        fn test_severe_count_sums_severe_buckets() {
            let results = vec![
                result("a", SceneStatus::Fail, 1.0, ""),
                result("b", SceneStatus::MissingCapture, 1.0, ""),
                result("c", SceneStatus::MissingBaseline, 1.0, ""),
                result("d", SceneStatus::DimensionMismatch, 1.0, ""),
                result("e", SceneStatus::Warn, 0.02, ""),
                result("f", SceneStatus::Pass, 0.0, ""),
            ];
            assert_eq!(severe_count(&count_statuses(&results)), 4);
        }

        #[test]
        fn test_empty_run() {
            let report = SummaryReport::new("b", "c", &Thresholds::default(), true, vec![]);
            assert!(report.counts.is_empty());
            assert_eq!(report.severe_count, 0);
            assert!(!report.should_fail());
        }
    }

    mod enforce_tests {
        use super::*;

        #[test]
        fn test_enforce_with_severe_fails() {
            assert!(sample(true).should_fail());
        }

        #[test]
        fn test_no_enforce_never_fails() {
            let report = sample(false);
            assert_eq!(report.severe_count, 1);
            assert!(!report.should_fail());
        }

        #[test]
        fn test_enforce_with_only_warnings_passes() {
            let report = SummaryReport::new(
                "b",
                "c",
                &Thresholds::default(),
                true,
                vec![result("w.png", SceneStatus::Warn, 0.02, "")],
            );
            assert!(!report.should_fail());
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_json_payload_shape() {
            let json: serde_json::Value = serde_json::from_str(&sample(true).to_json().unwrap()).unwrap();
            assert_eq!(json["baseline_dir"], "baselines");
            assert_eq!(json["capture_dir"], "captures");
            assert_eq!(json["enforce"], true);
            assert_eq!(json["counts"]["pass"], 2);
            assert_eq!(json["counts"]["missing_baseline"], 1);
            assert!(json["counts"].get("fail").is_none());
            assert_eq!(json["severe_count"], 1);
            assert_eq!(json["results"].as_array().unwrap().len(), 4);
            assert_eq!(json["results"][2]["status"], "missing_baseline");
        }

        #[test]
        fn test_json_key_order() {
            let text = sample(false).to_json().unwrap();
            let keys = [
                "\"baseline_dir\"",
                "\"capture_dir\"",
                "\"warn_threshold\"",
                "\"fail_threshold\"",
                "\"enforce\"",
                "\"counts\"",
                "\"severe_count\"",
                "\"results\"",
            ];
            let positions: Vec<_> = keys.iter().map(|k| text.find(k).unwrap()).collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn test_markdown_layout() {
            let md = sample(false).to_markdown();
            assert!(md.starts_with("## Scene Capture Visual Diff\n\n"));
            assert!(md.contains("- Warn threshold: `0.0150`\n"));
            assert!(md.contains("- Fail threshold: `0.0300`\n"));
            assert!(md.contains("- Enforce fail mode: `false`\n"));
            assert!(md.contains("|---|---|---:|---:|---|\n"));
            assert!(md.contains("| `a.png` | `pass` | `0.000000` | `0.000000` | - |\n"));
            assert!(md.contains(
                "| `c.png` | `missing_baseline` | `1.000000` | `1.000000` | Capture exists without baseline file. |\n"
            ));
            assert!(md.ends_with(
                "Summary:\n- pass: 2\n- warn: 1\n- fail: 0\n- missing_baseline: 1\n- missing_capture: 0\n- dimension_mismatch: 0\n"
            ));
        }
    }
}
