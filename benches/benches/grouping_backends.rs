// Copyright 2025 the Yardmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use yardmap_geo::GeoPoint;
use yardmap_stack::{
    LinearScan, NeighborSearch, PositionedEntity, Rotation, StackMember, UniformGrid,
    group_by_partition, group_by_proximity_with,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

#[derive(Clone)]
struct Slot {
    zone: u32,
    level: u32,
}

impl StackMember for Slot {
    type Key = u32;

    fn partition_key(&self) -> u32 {
        self.zone
    }

    fn rank(&self) -> u32 {
        self.level
    }
}

fn entity(rng: &mut Rng, x: f64, y: f64) -> PositionedEntity<Slot> {
    let slot = Slot {
        zone: (rng.next_u64() % 64) as u32,
        level: (rng.next_u64() % 5) as u32 + 1,
    };
    let rotation = if rng.next_u64() % 2 == 0 {
        Rotation::Deg0
    } else {
        Rotation::Deg90
    };
    PositionedEntity::new(slot, GeoPoint::default(), Point::new(x, y), rotation)
}

/// Containers scattered uniformly over a 1200x800 canvas.
fn gen_scattered(count: usize) -> Vec<PositionedEntity<Slot>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * 1200.0;
            let y = rng.next_f64() * 800.0;
            entity(&mut rng, x, y)
        })
        .collect()
}

/// Containers piled into tight stacks, a few pixels of GPS jitter each.
fn gen_stacked(stacks: usize, per_stack: usize) -> Vec<PositionedEntity<Slot>> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(stacks * per_stack);
    for _ in 0..stacks {
        let cx = rng.next_f64() * 1200.0;
        let cy = rng.next_f64() * 800.0;
        for _ in 0..per_stack {
            let dx = (rng.next_f64() - 0.5) * 10.0;
            let dy = (rng.next_f64() - 0.5) * 10.0;
            out.push(entity(&mut rng, cx + dx, cy + dy));
        }
    }
    out
}

fn bench_backend<B: NeighborSearch>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for &n in &[100usize, 1_000, 5_000] {
        let scattered = gen_scattered(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("scattered_n{n}"), |b| {
            b.iter(|| {
                let groups = group_by_proximity_with::<B, _>(&scattered, 35.0).unwrap();
                black_box(groups.len());
            });
        });
        let stacked = gen_stacked(n / 4, 4);
        group.bench_function(format!("stacked_n{n}"), |b| {
            b.iter(|| {
                let groups = group_by_proximity_with::<B, _>(&stacked, 35.0).unwrap();
                black_box(groups.len());
            });
        });
    }
    group.finish();
}

fn bench_linear(c: &mut Criterion) {
    bench_backend::<LinearScan>(c, "proximity_linear");
}

fn bench_grid(c: &mut Criterion) {
    bench_backend::<UniformGrid>(c, "proximity_grid");
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for &n in &[1_000usize, 10_000] {
        let entities = gen_scattered(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("zones_n{n}"), |b| {
            b.iter(|| black_box(group_by_partition(&entities).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_linear, bench_grid, bench_partition);
criterion_main!(benches);
