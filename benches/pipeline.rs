//! Benchmarks for the sprig pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sprig::{normalize, serialize, serialize_tree, Attrs, Component, Node};

/// A table-like tree with shorthand tags, attribute maps, and iterables.
fn wide_tree(rows: usize) -> Node {
    Node::seq([
        Node::from("table#data.grid"),
        Node::list((0..rows).map(|r| {
            Node::seq([
                Node::from("tr"),
                Node::list((0..8).map(move |c| {
                    Node::seq([
                        Node::from("td.cell"),
                        Attrs::new().set("data-col", c as i32).into(),
                        Node::from(format!("r{r}c{c}")),
                    ])
                })),
            ])
        })),
    ])
}

/// A deeply nested chain of single-child elements.
fn deep_tree(depth: usize) -> Node {
    let mut node = Node::from("leaf");
    for _ in 0..depth {
        node = Node::seq([Node::from("div"), node]);
    }
    node
}

/// A tree where every row comes from a component call.
fn component_tree(rows: usize) -> Node {
    let row = Component::new(|args| {
        Node::seq([
            Node::from("li"),
            args.first().cloned().unwrap_or(Node::Empty),
        ])
    });
    Node::seq([
        Node::from("ul"),
        Node::list(
            (0..rows).map(move |i| Node::seq([Node::Func(row.clone()), Node::from(i)])),
        ),
    ])
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let wide = wide_tree(64);
    group.bench_function("wide_table", |b| {
        b.iter(|| normalize(black_box(&wide)).unwrap())
    });

    let deep = deep_tree(256);
    group.bench_function("deep_chain", |b| {
        b.iter(|| normalize(black_box(&deep)).unwrap())
    });

    let components = component_tree(128);
    group.bench_function("component_rows", |b| {
        b.iter(|| normalize(black_box(&components)).unwrap())
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let wide = normalize(&wide_tree(64)).unwrap().unwrap();
    group.bench_function("wide_table", |b| {
        b.iter(|| serialize(black_box(&wide), false))
    });
    group.bench_function("wide_table_escaped", |b| {
        b.iter(|| serialize(black_box(&wide), true))
    });

    let deep = normalize(&deep_tree(256)).unwrap().unwrap();
    group.bench_function("deep_chain", |b| {
        b.iter(|| serialize(black_box(&deep), false))
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let wide = wide_tree(64);
    c.bench_function("serialize_tree/wide_table", |b| {
        b.iter(|| serialize_tree(black_box(&wide), true).unwrap())
    });
}

criterion_group!(benches, bench_normalize, bench_serialize, bench_pipeline);
criterion_main!(benches);
