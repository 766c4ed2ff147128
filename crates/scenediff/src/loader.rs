//! Image pair loader: maps scene names to the baseline and capture files that
//! exist for them.

use crate::result::ScenediffResult;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the files considered scenes
pub const SCENE_EXTENSION: &str = "png";

/// Scene name to file path for one directory
pub type SceneMap = BTreeMap<String, PathBuf>;

/// Collect `*.png` files in `dir`, keyed by file name.
///
/// Names that are not valid UTF-8 are keyed lossily. A directory that does not
/// exist is treated as empty.
///
/// # Errors
///
/// Returns error if the directory exists but cannot be read
pub fn collect_scenes(dir: &Path) -> ScenediffResult<SceneMap> {
    let mut scenes = SceneMap::new();
    if !dir.is_dir() {
        return Ok(scenes);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(SCENE_EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_name() {
            scenes.insert(name.to_string_lossy().into_owned(), path.clone());
        }
    }
    Ok(scenes)
}

/// A scene with whichever of its two files exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenePair {
    /// Scene name
    pub name: String,
    /// Approved baseline, if present
    pub baseline: Option<PathBuf>,
    /// Fresh capture, if present
    pub capture: Option<PathBuf>,
}

/// Baseline and capture listings for one run
#[derive(Debug, Clone, Default)]
pub struct SceneIndex {
    baselines: SceneMap,
    captures: SceneMap,
}

impl SceneIndex {
    /// Build from already collected listings
    #[must_use]
    pub const fn new(baselines: SceneMap, captures: SceneMap) -> Self {
        Self {
            baselines,
            captures,
        }
    }

    /// Scan both directories
    ///
    /// # Errors
    ///
    /// Returns error if an existing directory cannot be read
    pub fn scan(baseline_dir: &Path, capture_dir: &Path) -> ScenediffResult<Self> {
        Ok(Self::new(
            collect_scenes(baseline_dir)?,
            collect_scenes(capture_dir)?,
        ))
    }

    /// Union of scene names, sorted lexicographically
    #[must_use]
    pub fn scene_names(&self) -> Vec<String> {
        self.baselines
            .keys()
            .chain(self.captures.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolve one scene name
    #[must_use]
    pub fn resolve(&self, name: &str) -> ScenePair {
        ScenePair {
            name: name.to_string(),
            baseline: self.baselines.get(name).cloned(),
            capture: self.captures.get(name).cloned(),
        }
    }

    /// Every scene in lexicographic order
    #[must_use]
    pub fn pairs(&self) -> Vec<ScenePair> {
        self.scene_names()
            .iter()
            .map(|name| self.resolve(name))
            .collect()
    }

    /// Number of scenes in the union
    #[must_use]
    pub fn len(&self) -> usize {
        self.scene_names().len()
    }

    /// Whether neither directory holds a scene
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty() && self.captures.is_empty()
    }
}
