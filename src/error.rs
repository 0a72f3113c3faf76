use thiserror::Error;

/// Failures that abort a single figure build. There is no partial
/// output: a build either returns a complete figure or one of these.
#[derive(Debug, Error)]
pub enum FigureError {
    /// A node id appears in the edge table but has no row in the node
    /// attribute table.
    #[error("node `{0}` appears in the edge table but has no attribute row")]
    MissingNodeAttrs(String),

    /// The supplied layout has no position for a node referenced by an
    /// edge.
    #[error("node `{0}` has no position in the supplied layout")]
    MissingLayoutEntry(String),

    /// A layout position has the wrong number of coordinates for the
    /// requested dimension.
    #[error("node `{id}` has a {got}-dimensional position, expected {expected}")]
    DimensionMismatch {
        id: String,
        got: usize,
        expected: usize,
    },

    /// Both endpoints of an edge coincide, so no direction vector can
    /// be derived for the arrow or cone.
    #[error("degenerate edge `{from}` -> `{to}`: endpoints coincide")]
    DegenerateEdge { from: String, to: String },

    /// The edge table contains no rows at all.
    #[error("edge table is empty, nothing to draw")]
    EmptyEdgeTable,
}
