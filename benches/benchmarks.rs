//! Criterion benchmarks for graph-model.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use graph_model::{
    adjacency_matrix, from_string, is_connected, markov_blanket, neighbor_map, BasicFactory,
    BasicGraph, EdgeDirection, GraphBuilder,
};

/// Build a random graph through the builder.
fn make_graph(node_count: u64, edges_per_node: usize) -> BasicGraph<u64> {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new(BasicFactory::new());
    for i in 0..node_count {
        builder.node(i);
        for _ in 0..edges_per_node {
            builder.edge(i, rng.gen_range(0..node_count));
        }
    }
    builder.build()
}

/// A chain description `n0->n1->...` for parser benchmarks.
fn make_chain(len: usize) -> String {
    (0..len)
        .map(|i| format!("n{}", i))
        .collect::<Vec<_>>()
        .join("->")
}

fn bench_builder(c: &mut Criterion) {
    c.bench_function("build_1k_nodes_3_edges", |b| {
        b.iter(|| make_graph(black_box(1_000), 3))
    });
}

fn bench_from_string(c: &mut Criterion) {
    let text = make_chain(1_000);
    c.bench_function("parse_chain_1k", |b| {
        b.iter(|| from_string(BasicFactory::<String>::new(), black_box(&text)))
    });
}

fn bench_adjacency_matrix(c: &mut Criterion) {
    let graph = make_graph(500, 4);
    c.bench_function("adjacency_matrix_500", |b| {
        b.iter(|| adjacency_matrix(black_box(&graph), None))
    });
}

fn bench_markov_blanket(c: &mut Criterion) {
    let graph = make_graph(2_000, 3);
    c.bench_function("markov_blanket_2k", |b| {
        b.iter(|| markov_blanket(black_box(&graph), &0))
    });
}

fn bench_reachability(c: &mut Criterion) {
    let graph = make_graph(5_000, 2);
    c.bench_function("neighbor_map_5k", |b| {
        b.iter(|| neighbor_map(black_box(&graph), EdgeDirection::Undirected))
    });
    c.bench_function("is_connected_5k", |b| {
        b.iter(|| is_connected(black_box(&graph), &0, &4_999, EdgeDirection::Directed))
    });
}

criterion_group!(
    benches,
    bench_builder,
    bench_from_string,
    bench_adjacency_matrix,
    bench_markov_blanket,
    bench_reachability
);
criterion_main!(benches);
