use std::path::{Path, PathBuf};

use netgraph_renderer::figure::Trace;
use netgraph_renderer::tables::{load_network, load_positions};
use netgraph_renderer::{
    Dimension, LayoutAlgorithm, NetworkGraph, Positions, RenderOptions, build_figure,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
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

fn load_fixture_graph() -> (NetworkGraph, Positions, Positions) {
    let graph = load_network(&fixture("edges.csv"), &fixture("nodes.csv")).expect("tables");
    let layout_2d = load_positions(&fixture("layout_2d.json")).expect("2d layout");
    let layout_3d = load_positions(&fixture("layout_3d.json")).expect("3d layout");
    (graph, layout_2d, layout_3d)
}

#[test]
fn fixture_2d_figure() {
    let (graph, layout_2d, _) = load_fixture_graph();
    let figure = build_figure(
        &graph,
        &layout_2d,
        Dimension::Two,
        LayoutAlgorithm::Circular,
        &options(),
    )
    .expect("build")
    .expect("supported selection");

    // three connected nodes; the isolated attribute row never renders
    let markers = figure
        .traces
        .iter()
        .filter(|trace| matches!(trace, Trace::Marker2d(_)))
        .count();
    assert_eq!(markers, 3);

    // one arrow and one weight label per directed edge, no dedup in 2D
    let arrows = figure
        .traces
        .iter()
        .filter(|trace| matches!(trace, Trace::Arrow(_)))
        .count();
    let labels = figure
        .traces
        .iter()
        .filter(|trace| matches!(trace, Trace::Label(_)))
        .count();
    assert_eq!(arrows, 3);
    assert_eq!(labels, 3);

    assert_eq!(figure.layout.title, "Network Graph");
    assert_eq!(figure.layout.width, 800.0);
    assert_eq!(figure.layout.height, 800.0);
    assert!(!figure.layout.show_legend);
}

#[test]
fn fixture_3d_figure_dedups_the_bidirectional_pair() {
    let (graph, _, layout_3d) = load_fixture_graph();
    let figure = build_figure(
        &graph,
        &layout_3d,
        Dimension::Three,
        LayoutAlgorithm::Spring,
        &options(),
    )
    .expect("build")
    .expect("supported selection");

    let lines: Vec<_> = figure
        .traces
        .iter()
        .filter_map(|trace| match trace {
            Trace::Line3d(line) => Some(line),
            _ => None,
        })
        .collect();
    // alpha<->beta collapses into one segment, beta->gamma stays
    assert_eq!(lines.len(), 2);
    let combined = lines
        .iter()
        .find(|line| line.hover.contains("<br>"))
        .expect("combined hover for the bidirectional pair");
    assert!(combined.hover.contains("Alpha -> Beta: 5"));
    assert!(combined.hover.contains("Beta -> Alpha: 3"));

    let cones = figure
        .traces
        .iter()
        .filter(|trace| matches!(trace, Trace::Cone(_)))
        .count();
    // two for the bidirectional pair, one for beta->gamma
    assert_eq!(cones, 3);

    // weights span 2..=5, so the shared scale domain is 1..=6
    assert!(lines.iter().all(|line| line.color_min == 1.0));
    assert!(lines.iter().all(|line| line.color_max == 6.0));
    assert_eq!(
        lines.iter().filter(|line| line.show_scale).count(),
        1,
        "exactly one segment carries the colorbar"
    );
}

#[test]
fn unsupported_selection_yields_no_figure() {
    let (graph, _, layout_3d) = load_fixture_graph();
    let result = build_figure(
        &graph,
        &layout_3d,
        Dimension::Three,
        LayoutAlgorithm::Circular,
        &options(),
    )
    .expect("gate is not an error");
    assert!(result.is_none());
}

#[test]
fn figure_json_is_serializable() {
    let (graph, layout_2d, _) = load_fixture_graph();
    let figure = build_figure(
        &graph,
        &layout_2d,
        Dimension::Two,
        LayoutAlgorithm::Spring,
        &options(),
    )
    .expect("build")
    .expect("supported selection");

    let json = serde_json::to_string_pretty(&figure).expect("serialize");
    assert!(json.contains("\"title\": \"Network Graph\""));
    assert!(json.contains("\"type\": \"marker2d\""));
    assert!(json.contains("\"type\": \"arrow\""));
}

#[test]
fn missing_attribute_row_aborts_the_render() {
    let (mut graph, layout_2d, _) = load_fixture_graph();
    graph.nodes.retain(|row| row.node_id != "gamma");
    let err = build_figure(
        &graph,
        &layout_2d,
        Dimension::Two,
        LayoutAlgorithm::Spring,
        &options(),
    )
    .expect_err("gamma has edges but no attributes");
    assert!(err.to_string().contains("gamma"));
}
