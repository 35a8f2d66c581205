// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_outline::{Hierarchy, NodeId, Outline};
use understory_tree::{DownExit, down_target, up_target};

/// A chain of last children `depth` levels deep under the first of two
/// top-level nodes, all expanded. Returns the outline and the deepest leaf.
fn last_child_chain(depth: usize) -> (Outline, NodeId) {
    let mut outline = Outline::new();
    let root = outline.root();
    let mut node = outline.insert(root).unwrap();
    outline.insert(root).unwrap();
    for _ in 0..depth {
        outline.expand(node);
        node = outline.insert(node).unwrap();
    }
    (outline, node)
}

fn bench_vertical_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation/targets");

    // Worst cases: Down from the deepest leaf climbs the whole chain, and Up
    // from the next top-level row descends it.
    for depth in [8usize, 64, 512] {
        let (outline, leaf) = last_child_chain(depth);
        let below = outline.children(outline.root())[1];
        group.throughput(Throughput::Elements(depth as u64));

        group.bench_with_input(BenchmarkId::new("down_exit", depth), &leaf, |b, &leaf| {
            b.iter(|| black_box(down_target(&outline, leaf, DownExit::NearestAncestor)));
        });

        group.bench_with_input(BenchmarkId::new("up_descend", depth), &below, |b, &below| {
            b.iter(|| black_box(up_target(&outline, below)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_vertical_targets);
criterion_main!(benches);
