use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use netgraph_renderer::ir::{EdgeRow, NodeRow};
use netgraph_renderer::{
    Dimension, LayoutAlgorithm, NetworkGraph, Positions, RenderOptions, build_figure,
};
use std::hint::black_box;

/// Ring of `nodes` nodes where every third edge also runs backwards,
/// so the bidirectional paths get exercised.
fn ring_graph(nodes: usize, axes: usize) -> (NetworkGraph, Positions) {
    let mut edges = Vec::new();
    let mut node_rows = Vec::new();
    let mut positions = Positions::new();

    for i in 0..nodes {
        let id = format!("n{i}");
        node_rows.push(NodeRow {
            node_id: id.clone(),
            node_label: format!("Node {i}"),
            node_color: "#1f77b4".to_string(),
        });
        let angle = 2.0 * std::f64::consts::PI * i as f64 / nodes as f64;
        let mut coords = vec![angle.cos(), angle.sin()];
        if axes == 3 {
            coords.push(i as f64 / nodes as f64);
        }
        positions.insert(id, coords);
    }

    for i in 0..nodes {
        let next = (i + 1) % nodes;
        edges.push(EdgeRow {
            source_id: format!("n{i}"),
            target_id: format!("n{next}"),
            weights: (i % 9 + 1) as f64,
        });
        if i % 3 == 0 {
            edges.push(EdgeRow {
                source_id: format!("n{next}"),
                target_id: format!("n{i}"),
                weights: (i % 5 + 1) as f64,
            });
        }
    }

    (NetworkGraph::new(edges, node_rows), positions)
}

fn options() -> RenderOptions {
    RenderOptions {
        node_radius: 15.0,
        parallel_shift: 0.01,
        midpoint_shift: 0.35,
        node_size_3d: 15.0,
        line_width_3d: 5.0,
        midpoint_shift_3d: 0.04,
        cone_size: 0.12,
    }
}

fn bench_build_figure(c: &mut Criterion) {
    let options = options();
    let mut group = c.benchmark_group("build_figure");

    for size in [50usize, 200, 800] {
        let (graph, positions) = ring_graph(size, 2);
        group.bench_with_input(BenchmarkId::new("2d", size), &size, |b, _| {
            b.iter(|| {
                build_figure(
                    black_box(&graph),
                    black_box(&positions),
                    Dimension::Two,
                    LayoutAlgorithm::Spring,
                    &options,
                )
                .unwrap()
            })
        });

        let (graph, positions) = ring_graph(size, 3);
        group.bench_with_input(BenchmarkId::new("3d", size), &size, |b, _| {
            b.iter(|| {
                build_figure(
                    black_box(&graph),
                    black_box(&positions),
                    Dimension::Three,
                    LayoutAlgorithm::Spring,
                    &options,
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_figure);
criterion_main!(benches);
