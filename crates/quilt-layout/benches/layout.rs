//! Benchmark tests for layout engine operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quilt_core::Size;
use quilt_layout::{Element, ElementId, ElementTree, GridPolicy, StackPolicy};

fn wide_stack(children: usize) -> (ElementTree, ElementId) {
    let mut tree = ElementTree::new();
    let root = tree.insert(Element::new().fixed_size(800.0, 600.0).with_policy(StackPolicy::new()));
    for _ in 0..children {
        tree.insert_child(root, Element::new().size(100.0, 20.0));
    }
    (tree, root)
}

fn nested_stacks(depth: usize) -> (ElementTree, ElementId) {
    let mut tree = ElementTree::new();
    let root = tree.insert(Element::new().fixed_size(800.0, 600.0).with_policy(StackPolicy::new()));
    let mut current = root;
    for _ in 0..depth {
        current = tree.insert_child(current, Element::new().with_policy(StackPolicy::new()));
        tree.insert_child(current, Element::new().size(50.0, 10.0));
    }
    (tree, root)
}

fn bench_intrinsic_pass(c: &mut Criterion) {
    c.bench_function("intrinsic_100_children", |b| {
        let (mut tree, root) = wide_stack(100);
        b.iter(|| black_box(tree.calculate_intrinsic_size(root)));
    });

    c.bench_function("intrinsic_depth_50", |b| {
        let (mut tree, root) = nested_stacks(50);
        b.iter(|| black_box(tree.calculate_intrinsic_size(root)));
    });
}

fn bench_full_layout(c: &mut Criterion) {
    c.bench_function("layout_100_children", |b| {
        let (mut tree, root) = wide_stack(100);
        b.iter(|| {
            tree.invalidate_layout_recursive(root);
            tree.calculate_intrinsic_size(root);
            tree.resolve_layout(root, black_box(Size::new(800.0, 600.0)));
        });
    });

    c.bench_function("layout_grid_10x10", |b| {
        let mut tree = ElementTree::new();
        let root = tree.insert(
            Element::new()
                .fixed_size(800.0, 600.0)
                .with_policy(GridPolicy::new(10).with_rows(10)),
        );
        for _ in 0..100 {
            tree.insert_child(root, Element::new().size(20.0, 20.0));
        }
        b.iter(|| {
            tree.invalidate_layout_recursive(root);
            tree.calculate_intrinsic_size(root);
            tree.resolve_layout(root, black_box(Size::new(800.0, 600.0)));
        });
    });
}

fn bench_incremental_invalidation(c: &mut Criterion) {
    c.bench_function("invalidate_leaf_depth_50", |b| {
        let (mut tree, root) = nested_stacks(50);
        tree.calculate_intrinsic_size(root);
        tree.resolve_layout(root, Size::new(800.0, 600.0));
        let leaf = *tree.children(root).first().expect("child");
        b.iter(|| {
            tree.invalidate_layout(black_box(leaf));
        });
    });
}

criterion_group!(
    benches,
    bench_intrinsic_pass,
    bench_full_layout,
    bench_incremental_invalidation
);
criterion_main!(benches);
