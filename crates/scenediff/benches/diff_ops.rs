//! Diff Engine Benchmarks
//!
//! Benchmarks for pixel diffing and composite synthesis.
//!
//! Run with: `cargo bench --bench diff_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{Rgb, RgbImage};
use scenediff::{mismatch_panel, PixelDiff, VisualDiff};

fn noisy_pair(width: u32, height: u32) -> (RgbImage, RgbImage) {
    let baseline = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let capture = RgbImage::from_fn(width, height, |x, y| {
        let p = baseline.get_pixel(x, y).0;
        if (x * 7 + y * 13) % 17 == 0 {
            Rgb([p[0].wrapping_add(9), p[1], p[2]])
        } else {
            Rgb(p)
        }
    });
    (baseline, capture)
}

fn bench_pixel_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_diff");

    for (w, h, name) in [(64, 64, "64x64"), (640, 360, "640x360"), (1920, 1080, "1920x1080")] {
        let pair = noisy_pair(w, h);
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &pair,
            |bench, (a, b): &(RgbImage, RgbImage)| {
                bench.iter(|| {
                    let diff = PixelDiff::compute(black_box(a), black_box(b)).unwrap();
                    black_box(diff.diff_ratio);
                });
            },
        );
    }

    group.finish();
}

fn bench_visual_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("visual_diff");

    for (w, h, name) in [(64, 64, "64x64"), (640, 360, "640x360")] {
        let pair = noisy_pair(w, h);
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &pair,
            |bench, (a, b): &(RgbImage, RgbImage)| {
                bench.iter(|| {
                    let visual = VisualDiff::from_images(black_box(a), black_box(b)).unwrap();
                    black_box(visual.panel.width());
                });
            },
        );
    }

    group.finish();
}

fn bench_mismatch_panel(c: &mut Criterion) {
    let (small, _) = noisy_pair(320, 180);
    let (large, _) = noisy_pair(640, 360);

    c.bench_function("mismatch_panel_320x180_vs_640x360", |bench| {
        bench.iter(|| {
            let panel = mismatch_panel(black_box(&small), black_box(&large));
            black_box(panel.width());
        });
    });
}

criterion_group!(
    benches,
    bench_pixel_diff,
    bench_visual_diff,
    bench_mismatch_panel
);
criterion_main!(benches);
