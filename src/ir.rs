use serde::Deserialize;
use std::collections::BTreeMap;

/// One row of the edge table: a single directed, weighted edge.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRow {
    pub source_id: String,
    pub target_id: String,
    pub weights: f64,
}

/// One row of the node attribute table.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRow {
    pub node_id: String,
    pub node_label: String,
    pub node_color: String,
}

/// Externally computed layout: node id to coordinate. Coordinate length
/// must match the requested [`Dimension`] for every node an edge
/// touches.
pub type Positions = BTreeMap<String, Vec<f64>>;

/// The raw graph input, straight from the two tables. Edges stay in
/// table order; node rows are attribute lookup only.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    pub edges: Vec<EdgeRow>,
    pub nodes: Vec<NodeRow>,
}

impl NetworkGraph {
    pub fn new(edges: Vec<EdgeRow>, nodes: Vec<NodeRow>) -> Self {
        Self { edges, nodes }
    }

    /// Attribute row for a node id, if the node table has one.
    pub fn node_attrs(&self, id: &str) -> Option<&NodeRow> {
        self.nodes.iter().find(|row| row.node_id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "2D" | "2d" => Some(Self::Two),
            "3D" | "3d" => Some(Self::Three),
            _ => None,
        }
    }

    /// Number of coordinate axes.
    pub fn axes(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Layout algorithm selection token. The algorithms themselves run in
/// an external collaborator; this crate only gates which selections
/// produce a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAlgorithm {
    Spring,
    Random,
    Bipartite,
    Circular,
}

impl LayoutAlgorithm {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Spring Layout" | "spring" => Some(Self::Spring),
            "Random Layout" | "random" => Some(Self::Random),
            "Bipartite Layout" | "bipartite" => Some(Self::Bipartite),
            "Circular Layout" | "circular" => Some(Self::Circular),
            _ => None,
        }
    }

    /// The shell's dropdown table: every algorithm works in 2D, only
    /// spring and random exist in 3D.
    pub fn supported_in(self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Two => true,
            Dimension::Three => matches!(self, Self::Spring | Self::Random),
        }
    }
}
