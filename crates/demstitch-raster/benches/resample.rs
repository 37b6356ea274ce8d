//! Benchmarks for tile decoding and block-average resampling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use demstitch_raster::{Grid, Header, ResampleOptions};

/// Synthetic tile with rolling terrain and a sprinkling of nodata cells.
fn synthetic_tile(rows: usize, cols: usize) -> (Header, Vec<u8>) {
    let header = Header::parse(&format!(
        "NROWS {rows}\nNCOLS {cols}\nXLLCORNER 0\nYLLCORNER 0\nXDIM 0.01\nYDIM 0.01\nNODATA -500\n"
    ))
    .expect("synthetic header should parse");

    let mut buf = Vec::with_capacity(rows * cols * 2);
    for row in 0..rows {
        for col in 0..cols {
            let sample = (((row * 31 + col * 17) % 4000) as i16) - 500;
            buf.extend_from_slice(&sample.to_le_bytes());
        }
    }
    (header, buf)
}

fn bench_decode(c: &mut Criterion) {
    let (header, buf) = synthetic_tile(1200, 1200);
    c.bench_function("decode_i16_le_1200x1200", |b| {
        b.iter(|| Grid::decode_i16_le(black_box(&header), black_box(&buf)).unwrap())
    });
}

fn bench_block_average(c: &mut Criterion) {
    let (header, buf) = synthetic_tile(1200, 1200);
    let grid = Grid::decode_i16_le(&header, &buf).unwrap();
    let opts = ResampleOptions::with_factor(10);
    c.bench_function("block_average_1200x1200_factor10", |b| {
        b.iter(|| black_box(&grid).block_average(&opts).unwrap())
    });
}

criterion_group!(benches, bench_decode, bench_block_average);
criterion_main!(benches);
