//! Warn/fail tolerance applied uniformly to every scene in a run.

use serde::{Deserialize, Serialize};

/// Default mean-delta ratio at which a scene starts to warn
pub const DEFAULT_WARN_THRESHOLD: f64 = 0.015;

/// Default mean-delta ratio at which a scene fails
pub const DEFAULT_FAIL_THRESHOLD: f64 = 0.03;

/// Ordered pair of diff-ratio thresholds.
///
/// Construction always normalizes: both values are clamped to be non-negative
/// and `fail` is raised to at least `warn`. Invalid input never errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    warn: f64,
    fail: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DEFAULT_WARN_THRESHOLD, DEFAULT_FAIL_THRESHOLD)
    }
}

impl Thresholds {
    /// Create normalized thresholds
    #[must_use]
    pub fn new(warn: f64, fail: f64) -> Self {
        // f64::max discards NaN, so a NaN input collapses to the lower bound
        let warn = warn.max(0.0);
        let fail = fail.max(warn);
        Self { warn, fail }
    }

    /// Replace the warn threshold, re-normalizing the pair
    #[must_use]
    pub fn with_warn(self, warn: f64) -> Self {
        Self::new(warn, self.fail)
    }

    /// Replace the fail threshold, re-normalizing the pair
    #[must_use]
    pub fn with_fail(self, fail: f64) -> Self {
        Self::new(self.warn, fail)
    }

    /// Warn threshold
    #[must_use]
    pub const fn warn(&self) -> f64 {
        self.warn
    }

    /// Fail threshold
    #[must_use]
    pub const fn fail(&self) -> f64 {
        self.fail
    }
}
