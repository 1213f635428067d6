// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use yardmap_geo::{GeoPoint, ReferenceFrame, is_inside};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

fn notched_yard() -> ReferenceFrame {
    let pt = GeoPoint::new;
    ReferenceFrame::new(pt(-6.2000, 106.8000), pt(-6.2100, 106.8100), 1200.0, 800.0)
        .unwrap()
        .with_polygon(vec![
            pt(-6.2000, 106.8000),
            pt(-6.2000, 106.8040),
            pt(-6.2010, 106.8040),
            pt(-6.2010, 106.8060),
            pt(-6.2000, 106.8060),
            pt(-6.2000, 106.8100),
            pt(-6.2100, 106.8100),
            pt(-6.2100, 106.8000),
        ])
}

fn gen_points(count: usize) -> Vec<GeoPoint> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            GeoPoint::new(
                -6.2110 + rng.next_f64() * 0.0120,
                106.7990 + rng.next_f64() * 0.0120,
            )
        })
        .collect()
}

fn bench_containment(c: &mut Criterion) {
    let polygon = notched_yard();
    let boxed = ReferenceFrame::new(
        GeoPoint::new(-6.2000, 106.8000),
        GeoPoint::new(-6.2100, 106.8100),
        1200.0,
        800.0,
    )
    .unwrap();
    let points = gen_points(10_000);

    let mut group = c.benchmark_group("containment");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("polygon", |b| {
        b.iter(|| black_box(points.iter().filter(|&&p| is_inside(p, &polygon)).count()));
    });
    group.bench_function("bounding_box", |b| {
        b.iter(|| black_box(points.iter().filter(|&&p| is_inside(p, &boxed)).count()));
    });
    group.bench_function("to_pixel", |b| {
        b.iter(|| {
            let sum = points
                .iter()
                .map(|&p| polygon.to_pixel(p).x)
                .sum::<f64>();
            black_box(sum)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_containment);
criterion_main!(benches);
