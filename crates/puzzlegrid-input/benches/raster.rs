//! Benchmarks for turning input lines into rasters and grids.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench raster
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use puzzlegrid_core::Boundary;
use puzzlegrid_input::Lines;

fn square_input(size: usize) -> Lines {
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| char::from(b'0' + u8::try_from((x * 7 + y * 3) % 10).unwrap()))
                .collect::<String>()
        })
        .collect()
}

fn bench_char_raster(c: &mut Criterion) {
    for size in [16, 64, 140] {
        let lines = square_input(size);
        c.bench_with_input(BenchmarkId::new("char_raster", size), &lines, |b, lines| {
            b.iter(|| hint::black_box(lines.to_char_raster().unwrap()));
        });
    }
}

fn bench_digit_grid(c: &mut Criterion) {
    for size in [16, 64, 140] {
        let lines = square_input(size);
        c.bench_with_input(BenchmarkId::new("digit_grid", size), &lines, |b, lines| {
            b.iter(|| hint::black_box(lines.digit_grid(Boundary::Wrap).unwrap()));
        });
    }
}

fn bench_mapped_raster(c: &mut Criterion) {
    for size in [16, 64, 140] {
        let lines = square_input(size);
        c.bench_with_input(BenchmarkId::new("mapped_raster", size), &lines, |b, lines| {
            b.iter(|| hint::black_box(lines.to_mapped_raster(|ch| u32::from(ch).pow(2)).unwrap()));
        });
    }
}

criterion_group!(benches, bench_char_raster, bench_digit_grid, bench_mapped_raster);
criterion_main!(benches);
