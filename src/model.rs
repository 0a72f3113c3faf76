//! The plot model: one immutable per-node record map built in a single
//! pass over the edge table, shared by both scene builders.

use std::collections::{BTreeMap, HashSet};

use crate::error::FigureError;
use crate::ir::{Dimension, NetworkGraph, Positions};

/// Per-node record. Built once, read-only afterwards. `targets` and
/// `target_weights` are parallel lists.
#[derive(Debug, Clone)]
pub struct PlotNode {
    pub id: String,
    pub label: String,
    pub color: String,
    /// Coordinate from the external layout, length equal to the model's
    /// dimension axis count.
    pub position: Vec<f64>,
    pub targets: Vec<String>,
    pub target_weights: Vec<f64>,
}

impl PlotNode {
    pub(crate) fn pos2(&self) -> [f64; 2] {
        [self.position[0], self.position[1]]
    }

    pub(crate) fn pos3(&self) -> [f64; 3] {
        [self.position[0], self.position[1], self.position[2]]
    }
}

/// Node records keyed by id, plus the first-appearance order the
/// renderers iterate in and a pair set for O(1) reverse-edge lookups.
#[derive(Debug, Clone)]
pub struct PlotModel {
    dimension: Dimension,
    nodes: BTreeMap<String, PlotNode>,
    order: Vec<String>,
    edge_pairs: HashSet<(String, String)>,
    weight_range: (f64, f64),
}

impl PlotModel {
    /// Single pass over the edge rows in table order. Each endpoint is
    /// seeded from the layout and the node attribute table the first
    /// time it appears; nodes without any incident edge never enter the
    /// model. Missing attributes or positions abort the build.
    pub fn build(
        graph: &NetworkGraph,
        positions: &Positions,
        dimension: Dimension,
    ) -> Result<Self, FigureError> {
        if graph.edges.is_empty() {
            return Err(FigureError::EmptyEdgeTable);
        }

        let mut nodes: BTreeMap<String, PlotNode> = BTreeMap::new();
        let mut order = Vec::new();
        let mut edge_pairs = HashSet::new();
        let mut weight_range = (f64::INFINITY, f64::NEG_INFINITY);

        for row in &graph.edges {
            for id in [&row.source_id, &row.target_id] {
                if nodes.contains_key(id.as_str()) {
                    continue;
                }
                let position = positions
                    .get(id.as_str())
                    .ok_or_else(|| FigureError::MissingLayoutEntry(id.clone()))?;
                if position.len() != dimension.axes() {
                    return Err(FigureError::DimensionMismatch {
                        id: id.clone(),
                        got: position.len(),
                        expected: dimension.axes(),
                    });
                }
                let attrs = graph
                    .node_attrs(id)
                    .ok_or_else(|| FigureError::MissingNodeAttrs(id.clone()))?;
                nodes.insert(
                    id.clone(),
                    PlotNode {
                        id: id.clone(),
                        label: attrs.node_label.clone(),
                        color: attrs.node_color.clone(),
                        position: position.clone(),
                        targets: Vec::new(),
                        target_weights: Vec::new(),
                    },
                );
                order.push(id.clone());
            }

            let source = nodes
                .get_mut(&row.source_id)
                .expect("source seeded above");
            source.targets.push(row.target_id.clone());
            source.target_weights.push(row.weights);
            edge_pairs.insert((row.source_id.clone(), row.target_id.clone()));

            weight_range.0 = weight_range.0.min(row.weights);
            weight_range.1 = weight_range.1.max(row.weights);
        }

        Ok(Self {
            dimension,
            nodes,
            order,
            edge_pairs,
            weight_range,
        })
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn node(&self, id: &str) -> Option<&PlotNode> {
        self.nodes.get(id)
    }

    /// Nodes in first-appearance order from the edge table.
    pub fn iter(&self) -> impl Iterator<Item = &PlotNode> {
        self.order.iter().map(|id| &self.nodes[id])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when the directed edge `from -> to` exists in the input.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_pairs
            .contains(&(from.to_string(), to.to_string()))
    }

    /// (min, max) over all edge weights. Fixes the shared 3D color
    /// scale domain.
    pub fn weight_range(&self) -> (f64, f64) {
        self.weight_range
    }
}
