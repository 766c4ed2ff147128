//! Pixel diff engine: per-channel absolute deltas and the two scalar metrics
//! derived from them.

use crate::result::{ScenediffError, ScenediffResult};
use image::{Rgb, RgbImage};

/// Number of color channels compared per pixel
pub const CHANNELS: usize = 3;

/// Clamp a ratio into `[0, 1]`. NaN maps to 0.
#[must_use]
pub fn clamp_ratio(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Result of diffing two equally-sized images
#[derive(Debug, Clone)]
pub struct PixelDiff {
    /// Per-channel absolute difference image
    pub delta: RgbImage,
    /// Mean normalized channel delta in `[0, 1]`
    pub diff_ratio: f64,
    /// Fraction of pixels with any nonzero channel delta, in `[0, 1]`
    pub changed_pixel_ratio: f64,
    /// Number of pixels with any nonzero channel delta
    pub changed_pixels: u64,
}

impl PixelDiff {
    /// Diff `baseline` against `capture`.
    ///
    /// # Errors
    ///
    /// Returns [`ScenediffError::DimensionMismatch`] if the images differ in size.
    pub fn compute(baseline: &RgbImage, capture: &RgbImage) -> ScenediffResult<Self> {
        let (width, height) = baseline.dimensions();
        let (cap_width, cap_height) = capture.dimensions();
        if width != cap_width || height != cap_height {
            return Err(ScenediffError::DimensionMismatch {
                baseline_width: width,
                baseline_height: height,
                capture_width: cap_width,
                capture_height: cap_height,
            });
        }

        let mut delta = RgbImage::new(width, height);
        let mut channel_sums = [0u64; CHANNELS];
        let mut changed_pixels = 0u64;

        for ((out, a), b) in delta
            .pixels_mut()
            .zip(baseline.pixels())
            .zip(capture.pixels())
        {
            let Rgb(a) = *a;
            let Rgb(b) = *b;
            let d = [a[0].abs_diff(b[0]), a[1].abs_diff(b[1]), a[2].abs_diff(b[2])];

            for (sum, value) in channel_sums.iter_mut().zip(d) {
                *sum += u64::from(value);
            }
            if d.iter().any(|&v| v != 0) {
                changed_pixels += 1;
            }
            *out = Rgb(d);
        }

        let total_pixels = u64::from(width) * u64::from(height);
        let (diff_ratio, changed_pixel_ratio) = if total_pixels == 0 {
            (0.0, 0.0)
        } else {
            let pixels = total_pixels as f64;
            let mean_sum: f64 = channel_sums.iter().map(|&s| s as f64 / pixels).sum();
            (
                clamp_ratio(mean_sum / CHANNELS as f64 / 255.0),
                clamp_ratio(changed_pixels as f64 / pixels),
            )
        };

        Ok(Self {
            delta,
            diff_ratio,
            changed_pixel_ratio,
            changed_pixels,
        })
    }

    /// Whether the two inputs were pixel-identical
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.changed_pixels == 0
    }
}
