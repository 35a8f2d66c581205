// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use std::time::Duration;
use understory_outline::{Hierarchy, NodeId, Outline, RowLayout, visible_nodes};
use understory_selection::{Selection, SelectionConfig, SelectionStore};

/// A balanced outline with `fanout` children per node, `depth` levels deep,
/// everything expanded and laid out.
fn expanded_outline(fanout: usize, depth: usize) -> Outline {
    let mut outline = Outline::new();
    let mut level = vec![outline.root()];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fanout);
        for &parent in &level {
            outline.expand(parent);
            for _ in 0..fanout {
                next.push(outline.insert(parent).unwrap());
            }
        }
        level = next;
    }
    RowLayout::default().apply(&mut outline);
    outline
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/replace");

    // `replace_with` scans for duplicates and is quadratic; the hashed variant
    // is linear. Keys repeat twice to model merged selections.
    for len in [128usize, 1_024, 8_192] {
        let outline = expanded_outline(len, 1);
        let keys: Vec<NodeId> = visible_nodes(&outline)
            .flat_map(|k| core::iter::repeat_n(k, 2))
            .collect();
        group.throughput(Throughput::Elements(keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("replace_with", len), &keys, |b, keys| {
            b.iter_batched(
                Selection::<NodeId>::new,
                |mut sel| {
                    sel.replace_with(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("replace_with_hashed", len),
            &keys,
            |b, keys| {
                b.iter_batched(
                    Selection::<NodeId>::new,
                    |mut sel| {
                        sel.replace_with_hashed(keys.iter().copied());
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_select_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/select_range");
    group.sample_size(30);
    group.measurement_time(Duration::from_secs(3));

    // Range from the first row to the middle row, so half the tree is pruned.
    // Each iteration resets to a single selection first.
    for (fanout, depth) in [(8usize, 3usize), (16, 3), (10, 4)] {
        let mut outline = expanded_outline(fanout, depth);
        let rows: Vec<NodeId> = visible_nodes(&outline).collect();
        let (first, middle) = (rows[0], rows[rows.len() / 2]);
        group.throughput(Throughput::Elements(rows.len() as u64));

        let mut store = SelectionStore::new(SelectionConfig::multi());
        group.bench_function(BenchmarkId::new("first_to_middle", rows.len()), |b| {
            b.iter(|| {
                store.select_single(&mut outline, first).unwrap();
                store.select_range(&mut outline, middle).unwrap();
                black_box(store.len());
            });
        });
    }

    group.finish();
}

fn bench_select_all_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/select_all_visible");

    for (fanout, depth) in [(8usize, 3usize), (16, 3), (10, 4)] {
        let mut outline = expanded_outline(fanout, depth);
        // Collapse every other top-level node to exercise subtree skipping.
        let top: Vec<NodeId> = outline.children(outline.root()).to_vec();
        for &node in top.iter().step_by(2) {
            outline.collapse(node);
        }
        let visible = visible_nodes(&outline).count();
        group.throughput(Throughput::Elements(visible as u64));

        group.bench_function(BenchmarkId::new("half_collapsed", visible), |b| {
            b.iter_batched(
                || SelectionStore::new(SelectionConfig::multi()),
                |mut store| {
                    store.select_all_visible(&outline);
                    black_box(store.len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_replace,
    bench_select_range,
    bench_select_all_visible
);
criterion_main!(benches);
