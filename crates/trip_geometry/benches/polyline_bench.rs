use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use trip_geometry::{GeoPoint, decode_polyline, encode_polyline};

fn long_route(len: usize) -> Vec<GeoPoint> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            GeoPoint::new(12.9 + 0.0003 * t + 0.001 * (t * 0.05).sin(), 77.5 + 0.0002 * t)
        })
        .collect()
}

fn polyline_benchmark(c: &mut Criterion) {
    let route = long_route(10_000);
    let encoded = encode_polyline(&route);

    c.bench_function("decode 10k points", |b| {
        b.iter(|| decode_polyline(black_box(&encoded)))
    });

    c.bench_function("encode 10k points", |b| {
        b.iter(|| encode_polyline(black_box(&route)))
    });
}

criterion_group!(benches, polyline_benchmark);
criterion_main!(benches);
