//! Criterion benchmarks for validation and reordering.
//!
//! Uses random acyclic rule sets (edges only point from smaller to larger
//! ids) and random updates drawn from the same id range.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use u_precedence::ordering::{EngineConfig, OrderingEngine, PositionLookup};
use u_precedence::rules::{NodeId, RuleSet};

// ===========================================================================
// Input generation
// ===========================================================================

fn random_rules(rng: &mut StdRng, nodes: u32, count: usize) -> RuleSet {
    RuleSet::from_pairs((0..count).map(|_| {
        let a = rng.random_range(0..nodes);
        let b = rng.random_range(0..nodes);
        (a.min(b), a.max(b) + u32::from(a == b))
    }))
}

fn random_updates(rng: &mut StdRng, nodes: u32, count: usize, len: usize) -> Vec<Vec<NodeId>> {
    let ids: Vec<NodeId> = (0..nodes).collect();
    (0..count)
        .map(|_| {
            let mut pick = ids.clone();
            pick.shuffle(rng);
            pick.truncate(len);
            pick
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_is_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid");
    let mut rng = StdRng::seed_from_u64(42);

    for (rules_n, len) in [(1_200usize, 23usize), (5_000, 100)] {
        let rules = random_rules(&mut rng, 100, rules_n);
        let updates = random_updates(&mut rng, 100, 200, len);

        for lookup in [PositionLookup::Indexed, PositionLookup::LinearScan] {
            let engine = OrderingEngine::new(&rules)
                .with_config(EngineConfig::default().with_position_lookup(lookup));
            group.bench_with_input(
                BenchmarkId::new(format!("{lookup:?}"), format!("{rules_n}x{len}")),
                &updates,
                |b, updates| {
                    b.iter(|| {
                        updates
                            .iter()
                            .filter(|u| engine.is_valid(black_box(u)))
                            .count()
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_canonical_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_order");
    let mut rng = StdRng::seed_from_u64(7);

    for len in [10usize, 50, 200] {
        let rules = random_rules(&mut rng, 400, 4_000);
        let updates = random_updates(&mut rng, 400, 50, len);
        let engine = OrderingEngine::new(&rules);

        group.bench_with_input(BenchmarkId::from_parameter(len), &updates, |b, updates| {
            b.iter(|| {
                for u in updates {
                    let _ = black_box(engine.canonical_order(u));
                }
            })
        });
    }

    group.finish();
}

fn bench_evaluate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_all");
    group.sample_size(20);
    let mut rng = StdRng::seed_from_u64(1);
    let rules = random_rules(&mut rng, 100, 1_200);
    let updates = random_updates(&mut rng, 100, 1_000, 23);

    for parallel in [false, true] {
        let engine = OrderingEngine::new(&rules)
            .with_config(EngineConfig::default().with_parallel(parallel));
        group.bench_with_input(
            BenchmarkId::new("parallel", parallel),
            &updates,
            |b, updates| b.iter(|| black_box(engine.evaluate_all(updates))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_is_valid,
    bench_canonical_order,
    bench_evaluate_all
);
criterion_main!(benches);
