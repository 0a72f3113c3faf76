use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rendering knobs consumed by the scene builders. Every field is
/// required: the core defines no defaults, the hosting shell owns its
/// constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    /// Node marker radius in 2D; markers are drawn at `2 * node_radius`
    /// and arrows stand off by `node_radius` at both ends.
    pub node_radius: f64,
    /// Orthogonal offset applied to both endpoints of a bidirectional
    /// 2D edge.
    pub parallel_shift: f64,
    /// 2D weight-label bias along the edge, 0..=1. 0 is the target
    /// endpoint, 1 the source.
    pub midpoint_shift: f64,
    /// 3D node marker size.
    pub node_size_3d: f64,
    /// 3D line segment width.
    pub line_width_3d: f64,
    /// Absolute distance each 3D endpoint moves inward before the
    /// segment and cones are drawn.
    pub midpoint_shift_3d: f64,
    /// Scale applied to the unit direction of each arrow cone.
    pub cone_size: f64,
}

/// Reads render options from a JSON file. All seven fields must be
/// present; there is nothing to merge them over.
pub fn load_options(path: &Path) -> anyhow::Result<RenderOptions> {
    let contents = std::fs::read_to_string(path)?;
    let parsed: RenderOptions = serde_json::from_str(&contents)?;
    Ok(parsed)
}
