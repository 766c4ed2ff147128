//! Scenediff: scene capture visual regression against approved baselines.
//!
//! Given a directory of approved baseline PNGs and a directory of fresh
//! captures, every scene in the union of both listings is compared and
//! classified, and a three-panel composite is written for human review.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌────────────────┐
//! │ SceneIndex   │──►│ SceneComparator  │──►│ SummaryReport  │
//! │ (loader)     │   │                  │   │ (JSON / MD)    │
//! └──────────────┘   │  PixelDiff       │   └────────────────┘
//!                    │  classify        │
//!                    │  VisualDiff ─────┼──► CompositeSink
//!                    └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use scenediff::{SceneComparator, SceneIndex, SummaryReport, Thresholds};
//! use std::path::Path;
//!
//! # fn main() -> scenediff::ScenediffResult<()> {
//! let thresholds = Thresholds::new(0.015, 0.03);
//! let index = SceneIndex::scan(Path::new("baselines"), Path::new("captures"))?;
//! let mut comparator = SceneComparator::on_disk(thresholds, "out/diff-images");
//! let results = comparator.compare_all(&index.pairs())?;
//! let report = SummaryReport::new("baselines", "captures", &thresholds, true, results);
//! println!("{}", report.to_markdown());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod comparator;
pub mod composite;
pub mod loader;
pub mod pixel_diff;
pub mod report;
mod result;
pub mod status;
pub mod thresholds;

pub use comparator::{
    DiffResult, FileDecoder, ImageDecoder, MemoryDecoder, SceneComparator, NOTE_MISSING_BASELINE,
    NOTE_MISSING_CAPTURE,
};
pub use composite::{
    composite_file_name, highlight, mismatch_panel, three_panel, CompositeSink, DiffMask,
    MemorySink, PngFileSink, VisualDiff, BACKGROUND_COLOR, MARKER_COLOR,
};
pub use loader::{collect_scenes, SceneIndex, SceneMap, ScenePair};
pub use pixel_diff::{clamp_ratio, PixelDiff};
pub use report::{count_statuses, severe_count, StatusCounts, SummaryReport};
pub use result::{ScenediffError, ScenediffResult};
pub use status::{classify, Observation, SceneStatus};
pub use thresholds::{Thresholds, DEFAULT_FAIL_THRESHOLD, DEFAULT_WARN_THRESHOLD};
