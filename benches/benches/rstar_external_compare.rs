// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rstar::{AABB, RTree};
use waypoint_geo::{GeoBounds, GeoPoint};
use waypoint_index::{BkdForest, BoxQuery, GeoRecord};

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

fn gen_records(n: usize, seed: u64) -> Vec<GeoRecord> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|i| {
            GeoRecord::new(
                format!("r{i}"),
                rng.next_f64() * 360.0 - 180.0,
                rng.next_f64() * 180.0 - 90.0,
            )
        })
        .collect()
}

/// Plain (non-crossing) boxes only: rstar has no longitude wrap.
fn gen_plain_queries(count: usize, seed: u64) -> Vec<GeoBounds> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let (lon_a, lon_b) = (
                rng.next_f64() * 360.0 - 180.0,
                rng.next_f64() * 360.0 - 180.0,
            );
            let (lat_a, lat_b) = (
                rng.next_f64() * 180.0 - 90.0,
                rng.next_f64() * 180.0 - 90.0,
            );
            GeoBounds::new(
                GeoPoint::new(lon_a.max(lon_b), lat_a.max(lat_b)),
                GeoPoint::new(lon_a.min(lon_b), lat_a.min(lat_b)),
            )
        })
        .collect()
}

fn bench_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    let queries = gen_plain_queries(64, 0xF00D);
    for &n in &[10_000usize, 100_000] {
        let mut records = gen_records(n, 0xDECAF);
        let forest = BkdForest::new(&mut records, 1024);
        let points: Vec<[f64; 2]> = records.iter().map(|r| [r.point.lon, r.point.lat]).collect();
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("waypoint_query_n{n}"), |b| {
            let mut hits = Vec::new();
            b.iter(|| {
                let mut total = 0usize;
                for query in &queries {
                    forest.query(&records, query, &mut hits);
                    total += hits.len();
                    hits.clear();
                }
                black_box(total);
            })
        });

        group.bench_function(format!("rstar_build_n{n}"), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    black_box(tree.size());
                },
                BatchSize::LargeInput,
            )
        });

        let tree = RTree::bulk_load(points.clone());
        group.bench_function(format!("rstar_query_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for query in &queries {
                    let envelope = AABB::from_corners(
                        [query.lower.lon, query.lower.lat],
                        [query.upper.lon, query.upper.lat],
                    );
                    total += tree.locate_in_envelope(&envelope).count();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_external_compare);
criterion_main!(benches);
