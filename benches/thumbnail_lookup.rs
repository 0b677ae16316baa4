// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for hover preview resolution.
//!
//! Measures the performance of:
//! - Building the thumbnail index from a long cue list
//! - Looking up the cue under the pointer
//! - Full preview computation (lookup + label)

use criterion::{criterion_group, criterion_main, Criterion};
use player_overlay::media::Fraction;
use player_overlay::thumbnails::{preview_at, RawCue, ThumbnailIndex};
use std::hint::black_box;

/// Two hours of 5-second thumbnails on a 10-column sprite sheet.
const CUE_COUNT: usize = 1440;
const CUE_SECS: f64 = 5.0;

fn cues() -> Vec<RawCue> {
    (0..CUE_COUNT)
        .map(|i| {
            let start = i as f64 * CUE_SECS;
            let (x, y) = ((i % 10) * 160, (i / 10) * 90);
            RawCue::new(
                start,
                start + CUE_SECS,
                format!("sprite.jpg#xywh={x},{y},160,90"),
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail_lookup");
    let raw = cues();

    group.bench_function("build_index", |b| {
        b.iter(|| black_box(ThumbnailIndex::build(black_box(&raw))));
    });

    group.finish();
}

/// Lookups are on the hover path, run once per pointer sample.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail_lookup");
    let Some(index) = ThumbnailIndex::build(&cues()) else {
        panic!("benchmark cues should build an index");
    };
    let duration = CUE_COUNT as f64 * CUE_SECS;

    group.bench_function("lookup", |b| {
        let mut t = 0.0;
        b.iter(|| {
            t = (t + 37.3) % duration;
            black_box(index.lookup(black_box(t)));
        });
    });

    group.bench_function("preview_at", |b| {
        let mut fraction = 0.0;
        b.iter(|| {
            fraction = (fraction + 0.013) % 1.0;
            black_box(preview_at(
                Fraction::new(black_box(fraction)),
                duration,
                Some(&index),
            ));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
