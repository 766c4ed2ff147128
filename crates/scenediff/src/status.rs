//! Scene status and the classifier that assigns it.

use crate::thresholds::Thresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing one scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStatus {
    /// Capture matches the baseline within the warn threshold
    Pass,
    /// Diff ratio reached the warn threshold but not the fail threshold
    Warn,
    /// Diff ratio reached the fail threshold
    Fail,
    /// Capture exists without a baseline
    MissingBaseline,
    /// Baseline exists without a capture
    MissingCapture,
    /// Both exist but their sizes differ
    DimensionMismatch,
}

impl SceneStatus {
    /// Every status, in report order
    pub const ALL: [Self; 6] = [
        Self::Pass,
        Self::Warn,
        Self::Fail,
        Self::MissingBaseline,
        Self::MissingCapture,
        Self::DimensionMismatch,
    ];

    /// Wire name used in JSON and Markdown output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
            Self::MissingBaseline => "missing_baseline",
            Self::MissingCapture => "missing_capture",
            Self::DimensionMismatch => "dimension_mismatch",
        }
    }

    /// Severity rank: pass < warn < everything else
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Pass => 0,
            Self::Warn => 1,
            Self::Fail | Self::MissingBaseline | Self::MissingCapture | Self::DimensionMismatch => 2,
        }
    }

    /// Whether this status counts toward the severe total
    #[must_use]
    pub const fn is_severe(self) -> bool {
        self.severity() >= 2
    }
}

impl fmt::Display for SceneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the comparator observed about a scene's inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation {
    /// Only the capture is present
    CaptureOnly,
    /// Only the baseline is present
    BaselineOnly,
    /// Both are present with different dimensions
    SizeMismatch,
    /// Both are present, same size, and were diffed
    Compared {
        /// Mean normalized channel delta
        diff_ratio: f64,
    },
}

/// Map an observation to a status.
///
/// Thresholds are checked fail-first so a ratio equal to a threshold lands in
/// the stricter bucket.
#[must_use]
pub fn classify(observation: Observation, thresholds: &Thresholds) -> SceneStatus {
    match observation {
        Observation::CaptureOnly => SceneStatus::MissingBaseline,
        Observation::BaselineOnly => SceneStatus::MissingCapture,
        Observation::SizeMismatch => SceneStatus::DimensionMismatch,
        Observation::Compared { diff_ratio } => {
            if diff_ratio >= thresholds.fail() {
                SceneStatus::Fail
            } else if diff_ratio >= thresholds.warn() {
                SceneStatus::Warn
            } else {
                SceneStatus::Pass
            }
        }
    }
}
