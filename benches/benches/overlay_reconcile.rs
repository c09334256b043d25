// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gloss_overlay::{OpenOutcome, RegionKind, RegionMap, TooltipStack};
use kurbo::{Point, Rect};

/// A stack of `depth` nested tooltips plus a region map holding every anchor
/// and panel, laid out in a diagonal cascade.
fn build_scene(depth: usize) -> (TooltipStack, RegionMap) {
    let mut stack = TooltipStack::new();
    let mut map = RegionMap::new();
    for level in 0..depth {
        let term = format!("term{level}");
        let offset = level as f64 * 40.0;
        let anchor = Rect::new(offset, offset, offset + 60.0, offset + 16.0);
        map.insert(
            anchor,
            level as i32 * 2,
            RegionKind::Anchor {
                term: term.clone(),
                level,
            },
        );
        let OpenOutcome::Opened(id) = stack.open(&term, "definition text", anchor, level) else {
            unreachable!("scripted opens never collide");
        };
        map.insert(
            Rect::new(offset, offset + 20.0, offset + 200.0, offset + 120.0),
            level as i32 * 2 + 1,
            RegionKind::Panel { id },
        );
    }
    (stack, map)
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    for &depth in &[1usize, 4, 8] {
        let (stack, map) = build_scene(depth);
        // Pointer deep inside the bottom panel: the covered fast path.
        let inside = Point::new(
            (depth - 1) as f64 * 40.0 + 100.0,
            (depth - 1) as f64 * 40.0 + 60.0,
        );
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("covered_depth{}", depth), |b| {
            let mut stack = stack.clone();
            stack.set_pointer(inside);
            let mut tick = 0u64;
            b.iter(|| {
                tick += 1;
                black_box(stack.reconcile(&map, Duration::from_millis(tick)));
            })
        });
        group.bench_function(format!("prune_depth{}", depth), |b| {
            b.iter_batched(
                || {
                    let (mut stack, map) = build_scene(depth);
                    stack.set_pointer(Point::new(-100.0, -100.0));
                    (stack, map)
                },
                |(mut stack, map)| {
                    // No grace credit exists, so this prunes the whole chain.
                    black_box(stack.reconcile(&map, Duration::from_millis(1)));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_open_branch_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("open");
    let depth = 6;
    group.bench_function("branch_switch_mid_stack", |b| {
        b.iter_batched(
            || build_scene(depth).0,
            |mut stack| {
                let out = stack.open("sibling", "definition text", Rect::ZERO, 3);
                black_box(out);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_reconcile, bench_open_branch_switch);
criterion_main!(benches);
