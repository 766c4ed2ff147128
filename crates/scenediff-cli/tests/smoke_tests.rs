//! Smoke tests for the scenediff binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn scenediff() -> Command {
    Command::cargo_bin("scenediff").expect("scenediff binary should exist")
}

struct Dirs {
    root: TempDir,
}

impl Dirs {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("baseline")).unwrap();
        fs::create_dir_all(root.path().join("capture")).unwrap();
        Self { root }
    }

    fn baseline(&self) -> PathBuf {
        self.root.path().join("baseline")
    }

    fn capture(&self) -> PathBuf {
        self.root.path().join("capture")
    }

    fn output(&self) -> PathBuf {
        self.root.path().join("out")
    }

    fn command(&self) -> Command {
        let mut cmd = scenediff();
        cmd.arg("--baseline-dir")
            .arg(self.baseline())
            .arg("--capture-dir")
            .arg(self.capture())
            .arg("--output-dir")
            .arg(self.output())
            .arg("--color")
            .arg("never")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn save(dir: &Path, name: &str, color: [u8; 3]) {
    RgbImage::from_pixel(8, 8, Rgb(color))
        .save(dir.join(name))
        .unwrap();
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    scenediff()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    scenediff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--baseline-dir"))
        .stdout(predicate::str::contains("--warn-threshold"))
        .stdout(predicate::str::contains("--enforce"));
}

#[test]
fn test_missing_required_args() {
    scenediff().assert().failure();
}

// ============================================================================
// Comparison Runs
// ============================================================================

#[test]
fn test_identical_scenes_pass() {
    let dirs = Dirs::new();
    save(&dirs.baseline(), "menu.png", [40, 80, 120]);
    save(&dirs.capture(), "menu.png", [40, 80, 120]);

    dirs.command()
        .args(["--enforce", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Scene Capture Visual Diff"))
        .stdout(predicate::str::contains(
            "| `menu.png` | `pass` | `0.000000` | `0.000000` | - |",
        ))
        .stdout(predicate::str::contains("- pass: 1"));

    assert!(dirs.output().join("diff-images/menu_diff.png").exists());
    assert!(dirs.output().join("scene_capture_diff_summary.json").exists());
    assert!(dirs.output().join("scene_capture_diff_summary.md").exists());
}

#[test]
fn test_enforced_regression_exits_nonzero() {
    let dirs = Dirs::new();
    save(&dirs.baseline(), "title.png", [0, 0, 0]);
    save(&dirs.capture(), "title.png", [255, 255, 255]);

    dirs.command()
        .args(["--enforce", "yes"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("`fail` | `1.000000` | `1.000000`"))
        .stderr(predicate::str::contains(
            "Scene capture diff enforcement failed due to severe regressions.",
        ));
}

#[test]
fn test_regression_without_enforce_succeeds() {
    let dirs = Dirs::new();
    save(&dirs.baseline(), "title.png", [0, 0, 0]);
    save(&dirs.capture(), "title.png", [255, 255, 255]);

    dirs.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("- fail: 1"))
        .stderr(predicate::str::contains("enforcement failed").not());
}

#[test]
fn test_missing_capture_reported() {
    let dirs = Dirs::new();
    save(&dirs.baseline(), "intro.png", [1, 2, 3]);

    dirs.command()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Baseline exists but capture output is missing.",
        ))
        .stdout(predicate::str::contains("- missing_capture: 1"));

    let json = fs::read_to_string(dirs.output().join("scene_capture_diff_summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["severe_count"], 1);
    assert_eq!(value["results"][0]["status"], "missing_capture");
    assert_eq!(value["results"][0]["diff_image_path"], "");
}

#[test]
fn test_custom_summary_paths() {
    let dirs = Dirs::new();
    let json = dirs.root.path().join("reports/summary.json");
    let md = dirs.root.path().join("reports/summary.md");

    dirs.command()
        .arg("--summary-json")
        .arg(&json)
        .arg("--summary-md")
        .arg(&md)
        .assert()
        .success();

    assert!(json.exists());
    assert!(md.exists());
    assert!(!dirs.output().join("scene_capture_diff_summary.json").exists());
}

#[test]
fn test_corrupt_image_is_an_error() {
    let dirs = Dirs::new();
    save(&dirs.baseline(), "broken.png", [0, 0, 0]);
    fs::write(dirs.capture().join("broken.png"), b"garbage").unwrap();

    dirs.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("broken.png"));
}
