//! Performance benchmarks for dirtree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirtree::test_utils::TestTree;
use dirtree::tree::read_sorted_entries;
use dirtree::{StreamingFormatter, TreeWalker, WalkerConfig, render_tree};
use std::io;

fn create_wide_tree(files: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..files {
        tree.add_file(&format!("file_{}.txt", i), "");
    }
    tree
}

fn create_deep_tree(depth: usize, width: usize) -> TestTree {
    let tree = TestTree::new();
    tree.populate(depth, width);
    tree
}

fn bench_read_sorted_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_sorted_entries");

    let small = create_wide_tree(10);
    group.bench_function("10_entries", |b| {
        b.iter(|| read_sorted_entries(black_box(small.path())))
    });

    let large = create_wide_tree(1000);
    group.bench_function("1000_entries", |b| {
        b.iter(|| read_sorted_entries(black_box(large.path())))
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let shallow = create_deep_tree(2, 100);
    group.bench_function("shallow_200_files", |b| {
        b.iter(|| {
            let mut formatter = StreamingFormatter::new(io::sink());
            TreeWalker::new(WalkerConfig::default()).walk(black_box(shallow.path()), &mut formatter)
        })
    });

    let deep = create_deep_tree(50, 4);
    group.bench_function("deep_50_levels", |b| {
        b.iter(|| {
            let mut formatter = StreamingFormatter::new(io::sink());
            TreeWalker::new(WalkerConfig::default()).walk(black_box(deep.path()), &mut formatter)
        })
    });

    group.bench_function("render_to_string", |b| {
        b.iter(|| render_tree(black_box(shallow.path()), WalkerConfig::default()))
    });

    group.finish();
}

criterion_group!(benches, bench_read_sorted_entries, bench_walk);
criterion_main!(benches);
