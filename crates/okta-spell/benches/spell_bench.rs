//! Benchmarks for spell decoding, encoding and scene building.
//!
//! Run with: cargo bench -p okta-spell --bench spell_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use okta_core::geometry::{OctagonLayout, Size};
use okta_spell::codec::{self, SpellCode};
use okta_spell::vocabulary::{BuiltinVocabulary, PRESENTATION_ORDER};
use okta_spell::{SceneConfig, Session, build_scene};
use std::hint::black_box;

const CODES: [&str; 4] = ["81234567", "88000000", "30555077", "15263748"];

fn loaded(code: &SpellCode) -> Session {
    let mut session = Session::new();
    for step in codec::decode(code) {
        let _ = session.record_decoded(&step, &BuiltinVocabulary);
    }
    session
}

// =============================================================================
// Codec
// =============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell/codec");

    for s in CODES {
        group.bench_with_input(BenchmarkId::new("parse", s), &s, |b, s| {
            b.iter(|| black_box(s.parse::<SpellCode>()))
        });

        let code: SpellCode = s.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("load", s), &code, |b, code| {
            b.iter(|| black_box(loaded(code)))
        });

        let session = loaded(&code);
        group.bench_with_input(BenchmarkId::new("encode", s), &session, |b, session| {
            b.iter(|| black_box(codec::encode(session.log(), &PRESENTATION_ORDER)))
        });
    }

    group.finish();
}

// =============================================================================
// Scene
// =============================================================================

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell/scene");
    let config = SceneConfig::default();

    for side in [300.0f32, 600.0, 1200.0] {
        let layout = OctagonLayout::compute(Size::square(side), 0.34);
        let session = loaded(&"81122100".parse().unwrap());
        group.bench_with_input(
            BenchmarkId::new("build", format!("{side}")),
            &(layout, session),
            |b, (layout, session)| {
                b.iter(|| black_box(build_scene(layout, session.log(), None, &config)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_scene);
criterion_main!(benches);
