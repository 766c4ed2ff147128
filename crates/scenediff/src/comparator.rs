//! Scene comparator: runs loader output through the diff engine, classifier
//! and visualizer and produces one [`DiffResult`] per scene.

use crate::composite::{composite_file_name, mismatch_panel, CompositeSink, PngFileSink, VisualDiff};
use crate::loader::ScenePair;
use crate::pixel_diff::PixelDiff;
use crate::result::{ScenediffError, ScenediffResult};
use crate::status::{classify, Observation, SceneStatus};
use crate::thresholds::Thresholds;
use image::{ImageReader, RgbImage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Note recorded for a capture with no baseline
pub const NOTE_MISSING_BASELINE: &str = "Capture exists without baseline file.";

/// Note recorded for a baseline with no capture
pub const NOTE_MISSING_CAPTURE: &str = "Baseline exists but capture output is missing.";

/// Comparison record for one scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Scene name
    pub scene: String,
    /// Outcome
    pub status: SceneStatus,
    /// Mean normalized channel delta in `[0, 1]`
    pub diff_ratio: f64,
    /// Fraction of changed pixels in `[0, 1]`
    pub changed_pixel_ratio: f64,
    /// Baseline location, empty when absent
    pub baseline_path: String,
    /// Capture location, empty when absent
    pub capture_path: String,
    /// Composite location, empty when none was generated
    pub diff_image_path: String,
    /// Explanation for anomalous outcomes, otherwise empty
    pub note: String,
}

impl DiffResult {
    /// Whether the outcome counts as severe
    #[must_use]
    pub const fn is_severe(&self) -> bool {
        self.status.is_severe()
    }
}

fn path_string(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

/// Decodes an image file into 8-bit RGB
pub trait ImageDecoder {
    /// Decode `path`
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or decoded
    fn decode(&self, path: &Path) -> ScenediffResult<RgbImage>;
}

/// Decodes files from disk with the `image` crate.
///
/// The format is sniffed from the file contents, not the extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> ScenediffResult<RgbImage> {
        let reader = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| ScenediffError::decode(path, e.to_string()))?;
        reader
            .decode()
            .map(|img| img.to_rgb8())
            .map_err(|e| ScenediffError::decode(path, e.to_string()))
    }
}

/// Serves pre-decoded images keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryDecoder {
    images: HashMap<PathBuf, RgbImage>,
}

impl MemoryDecoder {
    /// Create an empty decoder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `image` under `path`
    #[must_use]
    pub fn with_image(mut self, path: impl Into<PathBuf>, image: RgbImage) -> Self {
        self.images.insert(path.into(), image);
        self
    }
}

impl ImageDecoder for MemoryDecoder {
    fn decode(&self, path: &Path) -> ScenediffResult<RgbImage> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| ScenediffError::decode(path, "no image registered for path"))
    }
}

/// Compares scenes one at a time
#[derive(Debug)]
pub struct SceneComparator<D = FileDecoder, S = PngFileSink> {
    decoder: D,
    sink: S,
    thresholds: Thresholds,
    diff_dir: PathBuf,
}

impl SceneComparator {
    /// Comparator that decodes from disk and writes PNG composites into `diff_dir`
    #[must_use]
    pub fn on_disk(thresholds: Thresholds, diff_dir: impl Into<PathBuf>) -> Self {
        Self::new(FileDecoder, PngFileSink, thresholds, diff_dir)
    }
}

impl<D: ImageDecoder, S: CompositeSink> SceneComparator<D, S> {
    /// Create a comparator from its collaborators
    #[must_use]
    pub fn new(decoder: D, sink: S, thresholds: Thresholds, diff_dir: impl Into<PathBuf>) -> Self {
        Self {
            decoder,
            sink,
            thresholds,
            diff_dir: diff_dir.into(),
        }
    }

    /// Thresholds applied to every scene
    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Composite sink
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Where the composite for `scene` is written
    #[must_use]
    pub fn diff_path(&self, scene: &str) -> PathBuf {
        self.diff_dir.join(composite_file_name(scene))
    }

    /// Compare one scene.
    ///
    /// # Errors
    ///
    /// Returns error if an image cannot be decoded or a composite cannot be
    /// written. Missing files and size mismatches are not errors.
    #[tracing::instrument(skip(self, pair), fields(scene = %pair.name))]
    pub fn compare(&mut self, pair: &ScenePair) -> ScenediffResult<DiffResult> {
        let (baseline_path, capture_path) = match (&pair.baseline, &pair.capture) {
            (Some(b), Some(c)) => (b, c),
            (None, capture) => {
                warn!("capture has no baseline");
                return Ok(self.unscored(pair, Observation::CaptureOnly, None, capture.as_deref()));
            }
            (Some(baseline), None) => {
                warn!("baseline has no capture");
                return Ok(self.unscored(
                    pair,
                    Observation::BaselineOnly,
                    Some(baseline.as_path()),
                    None,
                ));
            }
        };

        let baseline = self.decoder.decode(baseline_path)?;
        let capture = self.decoder.decode(capture_path)?;
        let diff_path = self.diff_path(&pair.name);

        if baseline.dimensions() != capture.dimensions() {
            let panel = mismatch_panel(&baseline, &capture);
            self.sink.write_composite(&panel, &diff_path)?;

            let (bw, bh) = baseline.dimensions();
            let (cw, ch) = capture.dimensions();
            warn!(baseline = ?(bw, bh), capture = ?(cw, ch), "dimension mismatch");

            let mut result = self.unscored(
                pair,
                Observation::SizeMismatch,
                Some(baseline_path.as_path()),
                Some(capture_path.as_path()),
            );
            result.diff_image_path = diff_path.display().to_string();
            result.note = format!("Baseline size=({bw}, {bh}), capture size=({cw}, {ch}).");
            return Ok(result);
        }

        let diff = PixelDiff::compute(&baseline, &capture)?;
        let status = classify(
            Observation::Compared {
                diff_ratio: diff.diff_ratio,
            },
            &self.thresholds,
        );
        debug!(
            diff_ratio = diff.diff_ratio,
            changed_pixel_ratio = diff.changed_pixel_ratio,
            "pixel diff computed"
        );

        let visual = VisualDiff::from_diff(&baseline, &capture, &diff);
        self.sink.write_composite(&visual.panel, &diff_path)?;

        if status.is_severe() {
            warn!(%status, diff_ratio = diff.diff_ratio, "scene regressed");
        } else {
            info!(%status, "scene compared");
        }

        Ok(DiffResult {
            scene: pair.name.clone(),
            status,
            diff_ratio: diff.diff_ratio,
            changed_pixel_ratio: diff.changed_pixel_ratio,
            baseline_path: baseline_path.display().to_string(),
            capture_path: capture_path.display().to_string(),
            diff_image_path: diff_path.display().to_string(),
            note: String::new(),
        })
    }

    /// Compare every pair, in lexicographic scene order.
    ///
    /// # Errors
    ///
    /// Stops at the first hard error
    pub fn compare_all(&mut self, pairs: &[ScenePair]) -> ScenediffResult<Vec<DiffResult>> {
        let mut ordered: Vec<&ScenePair> = pairs.iter().collect();
        ordered.sort_by(|a, b| a.name.cmp(&b.name));
        ordered.into_iter().map(|pair| self.compare(pair)).collect()
    }

    /// Record for an outcome that could not be scored; both ratios are 1.0
    fn unscored(
        &self,
        pair: &ScenePair,
        observation: Observation,
        baseline: Option<&Path>,
        capture: Option<&Path>,
    ) -> DiffResult {
        let status = classify(observation, &self.thresholds);
        let note = match status {
            SceneStatus::MissingBaseline => NOTE_MISSING_BASELINE,
            SceneStatus::MissingCapture => NOTE_MISSING_CAPTURE,
            _ => "",
        };
        DiffResult {
            scene: pair.name.clone(),
            status,
            diff_ratio: 1.0,
            changed_pixel_ratio: 1.0,
            baseline_path: path_string(baseline),
            capture_path: path_string(capture),
            diff_image_path: String::new(),
            note: note.to_string(),
        }
    }
}
