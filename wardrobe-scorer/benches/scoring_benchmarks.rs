//! Criterion benchmarks for batch compatibility scoring.
//!
//! Measures scoring time across candidate set sizes (50, 200, 1000) against a
//! fixed four-garment selection.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package wardrobe-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wardrobe_core::test_support::sample_wardrobe;
use wardrobe_core::{Garment, OutfitContext, Season, WeatherContext};
use wardrobe_scorer::CompatibilityScorer;

/// Candidate set sizes to benchmark.
const CANDIDATE_COUNTS: &[usize] = &[50, 200, 1000];

const COLORS: [&str; 6] = ["navy", "white", "red", "green", "olive", "black"];
const TAGS: [&str; 3] = ["city", "weekend", "tailored"];

/// Build a deterministic candidate set by cycling through fixed attributes.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "Modulo for cyclic assignment is intentional"
)]
fn generate_candidates(count: usize) -> Vec<Garment> {
    (0..count)
        .map(|index| {
            let color = COLORS.get(index % COLORS.len()).copied().unwrap_or("navy");
            let tag = TAGS.get(index % TAGS.len()).copied().unwrap_or("city");
            let season = Season::ALL
                .get(index % Season::ALL.len())
                .copied()
                .unwrap_or(Season::Spring);
            let formality = u8::try_from(index % 10 + 1).unwrap_or(5);
            let weight = u8::try_from(index % 4).unwrap_or(0);
            Garment::new(format!("candidate-{index}"), "Layer")
                .with_color(color)
                .with_capsule_tag(tag)
                .with_formality(formality)
                .with_weather_weight(weight)
                .with_season(season)
        })
        .collect()
}

fn bench_score_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_candidates");
    let weather = WeatherContext::from_readings(58.0, 66.0, 49.0, 0.4);
    let selected: Vec<Garment> = sample_wardrobe().into_iter().take(4).collect();
    let outfit = OutfitContext::new(&weather, &selected);
    let scorer = CompatibilityScorer::default();

    for &count in CANDIDATE_COUNTS {
        let candidates = generate_candidates(count);
        group.throughput(Throughput::Elements(u64::try_from(count).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::new("candidates", count), &count, |b, _| {
            b.iter(|| black_box(scorer.score_candidates(black_box(&candidates), &outfit)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_candidates);
criterion_main!(benches);
