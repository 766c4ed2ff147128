//! Composite visualizer: change mask, red-highlighted baseline, and the
//! side-by-side panels written for human review.
//!
//! ```text
//! ┌──────────┬──────────┬──────────────┐
//! │ baseline │ capture  │ highlighted  │   equal sizes: 3 × width
//! └──────────┴──────────┴──────────────┘
//! ┌────────────┬────────────┐
//! │ baseline   │ capture    │              size mismatch: 2 × max width
//! └────────────┴────────────┘
//! ```

use crate::pixel_diff::PixelDiff;
use crate::result::{ScenediffError, ScenediffResult};
use image::{imageops, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Color painted over changed pixels
pub const MARKER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Canvas fill for any area not covered by a panel
pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// One flag per pixel, set wherever any channel delta is nonzero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl DiffMask {
    /// Build the mask from a per-channel delta image
    #[must_use]
    pub fn from_delta(delta: &RgbImage) -> Self {
        let (width, height) = delta.dimensions();
        let bits = delta.pixels().map(|p| p.0.iter().any(|&c| c != 0)).collect();
        Self {
            width,
            height,
            bits,
        }
    }

    /// Mask dimensions
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the pixel at `(x, y)` changed. Out of bounds reads as unchanged.
    #[must_use]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Number of set pixels
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Black/white overlay: 255 where changed, 0 elsewhere
    #[must_use]
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.is_set(x, y) {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }
}

/// Everything the visualizer derives from an equal-size pair
#[derive(Debug, Clone)]
pub struct VisualDiff {
    /// Changed-pixel mask
    pub mask: DiffMask,
    /// Baseline with changed pixels painted [`MARKER_COLOR`]
    pub highlighted: RgbImage,
    /// baseline | capture | highlighted
    pub panel: RgbImage,
}

impl VisualDiff {
    /// Build from two equal-size images.
    ///
    /// # Errors
    ///
    /// Returns [`ScenediffError::DimensionMismatch`] if the sizes differ.
    pub fn from_images(baseline: &RgbImage, capture: &RgbImage) -> ScenediffResult<Self> {
        let diff = PixelDiff::compute(baseline, capture)?;
        Ok(Self::from_diff(baseline, capture, &diff))
    }

    /// Build from a diff already computed for `baseline` and `capture`
    #[must_use]
    pub fn from_diff(baseline: &RgbImage, capture: &RgbImage, diff: &PixelDiff) -> Self {
        let mask = DiffMask::from_delta(&diff.delta);
        let highlighted = highlight(baseline, &mask);
        let panel = three_panel(baseline, capture, &highlighted);
        Self {
            mask,
            highlighted,
            panel,
        }
    }
}

/// Baseline copy with masked pixels replaced by [`MARKER_COLOR`]
#[must_use]
pub fn highlight(baseline: &RgbImage, mask: &DiffMask) -> RgbImage {
    let mut out = baseline.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if mask.is_set(x, y) {
            *pixel = MARKER_COLOR;
        }
    }
    out
}

/// Three panels side by side; all inputs share the baseline's size
#[must_use]
pub fn three_panel(baseline: &RgbImage, capture: &RgbImage, highlighted: &RgbImage) -> RgbImage {
    let (width, height) = baseline.dimensions();
    let mut canvas = RgbImage::from_pixel(width.saturating_mul(3), height, BACKGROUND_COLOR);
    let step = i64::from(width);
    imageops::replace(&mut canvas, baseline, 0, 0);
    imageops::replace(&mut canvas, capture, step, 0);
    imageops::replace(&mut canvas, highlighted, step * 2, 0);
    canvas
}

/// Degraded two-panel composite for pairs whose sizes differ.
///
/// Each half is as wide as the wider input and as tall as the taller one;
/// both images sit at the top-left of their half on a white fill.
#[must_use]
pub fn mismatch_panel(baseline: &RgbImage, capture: &RgbImage) -> RgbImage {
    let half = baseline.width().max(capture.width());
    let height = baseline.height().max(capture.height());
    let mut canvas = RgbImage::from_pixel(half.saturating_mul(2), height, BACKGROUND_COLOR);
    imageops::replace(&mut canvas, baseline, 0, 0);
    imageops::replace(&mut canvas, capture, i64::from(half), 0);
    canvas
}

/// Composite file name for a scene: extension stripped, `_diff.png` appended
#[must_use]
pub fn composite_file_name(scene: &str) -> String {
    let stem = scene.rsplit_once('.').map_or(scene, |(stem, _)| stem);
    format!("{stem}_diff.png")
}

/// Capability to render a composite to a destination
pub trait CompositeSink {
    /// Persist `image` at `destination`
    ///
    /// # Errors
    ///
    /// Returns error if the composite cannot be encoded or stored
    fn write_composite(&mut self, image: &RgbImage, destination: &Path) -> ScenediffResult<()>;
}

/// Writes composites as PNG files
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFileSink;

impl CompositeSink for PngFileSink {
    fn write_composite(&mut self, image: &RgbImage, destination: &Path) -> ScenediffResult<()> {
        image
            .save_with_format(destination, ImageFormat::Png)
            .map_err(|e| ScenediffError::encode(destination, e.to_string()))
    }
}

/// Keeps composites in memory, keyed by destination
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    images: BTreeMap<PathBuf, RgbImage>,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite written to `destination`, if any
    #[must_use]
    pub fn get(&self, destination: &Path) -> Option<&RgbImage> {
        self.images.get(destination)
    }

    /// Number of composites written
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether nothing was written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl CompositeSink for MemorySink {
    fn write_composite(&mut self, image: &RgbImage, destination: &Path) -> ScenediffResult<()> {
        self.images.insert(destination.to_path_buf(), image.clone());
        Ok(())
    }
}
