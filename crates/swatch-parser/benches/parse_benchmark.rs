//! Parser benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swatch_core::ParseOptions;
use swatch_parser::parse_theme;

const SIMPLE_THEME: &str = r#"
@theme inline { --color-fill-danger: var(--fill-danger); }
:root, .light { --fill-danger: var(--color-red-500); }
.dark { --fill-danger: --alpha(var(--color-red-700) / 90%); }
"#;

const MEDIUM_THEME: &str = include_str!("../../../tests/fixtures/danger.css");

fn parse_simple(c: &mut Criterion) {
    let options = ParseOptions::default();
    c.bench_function("parse_simple", |b| {
        b.iter(|| parse_theme(black_box(SIMPLE_THEME), &options))
    });
}

fn parse_medium(c: &mut Criterion) {
    let options = ParseOptions::default();
    c.bench_function("parse_medium", |b| {
        b.iter(|| parse_theme(black_box(MEDIUM_THEME), &options))
    });
}

criterion_group!(benches, parse_simple, parse_medium);
criterion_main!(benches);
