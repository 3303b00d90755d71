//! Container-index and commit-path benchmarks.
//!
//! The index is rebuilt from scratch on every transition, so its build time
//! bounds the per-event cost of the whole engine. The dispatch benchmark
//! covers the worst-case drag-end branch (cross-group move plus prune).
//!
//! Run with: cargo bench --bench index_build

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dropgrid::index::ContainerIndex;
use dropgrid::model::{Column, Element, Group, NodeId, Tree};
use dropgrid::state::{dispatch, CountingGroups, EditorState, SensorEvent};
use dropgrid::target::column_indicator_id;

/// Tree with `groups` groups of `columns` columns each.
fn synthetic_tree(groups: usize, columns: usize) -> Tree {
    let groups = (0..groups)
        .map(|i| {
            Group::new(
                NodeId::new(format!("grp{i}")).expect("valid id"),
                Element::null(),
                (0..columns)
                    .map(|j| {
                        Column::new(
                            NodeId::new(format!("col{i}x{j}")).expect("valid id"),
                            Element::null(),
                        )
                    })
                    .collect(),
            )
        })
        .collect();
    Tree::new(groups)
}

fn benchmark_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for (groups, columns) in [(10, 4), (100, 8), (1_000, 8)] {
        let tree = synthetic_tree(groups, columns);
        group.bench_with_input(
            BenchmarkId::new("build", groups * columns),
            &tree,
            |b, tree| b.iter(|| ContainerIndex::build(black_box(tree))),
        );
    }
    group.finish();
}

fn benchmark_drag_end_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_end");
    for (groups, columns) in [(10, 4), (100, 8)] {
        let tree = synthetic_tree(groups, columns);
        // Cross-group precise move: first column into the last group's slot.
        let target = column_indicator_id(
            &NodeId::new(format!("grp{}", groups - 1)).expect("valid id"),
            columns / 2,
        );
        group.bench_with_input(
            BenchmarkId::new("cross_group_move", groups * columns),
            &tree,
            |b, tree| {
                b.iter(|| {
                    let mut factory = CountingGroups::new("split");
                    let state = dispatch(
                        EditorState::new(tree.clone()),
                        SensorEvent::Start {
                            active: "col0x0".to_string(),
                        },
                        &mut factory,
                    );
                    dispatch(
                        state,
                        SensorEvent::End {
                            over: Some(target.clone()),
                        },
                        &mut factory,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_index_build, benchmark_drag_end_dispatch);
criterion_main!(benches);
