//! Pure vector math for the edge primitives: parallel offsets for
//! bidirectional 2D edges, label interpolation, and 3D segment
//! shortening with the direction vector that orients the arrow cone.

use crate::error::FigureError;

/// Norms below this are treated as a coincident endpoint pair.
const NORM_EPSILON: f64 = 1e-12;

fn degenerate(from: &str, to: &str) -> FigureError {
    FigureError::DegenerateEdge {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// Translates both endpoints by `shift` along the unit vector
/// orthogonal to `p2 - p1` (the 90-degree rotation `(dx, dy) ->
/// (-dy, dx)`). Keeps the two arrows of a bidirectional pair from
/// overlapping. Coincident endpoints are a [`FigureError::DegenerateEdge`].
pub fn parallel_shift(
    p1: [f64; 2],
    p2: [f64; 2],
    shift: f64,
    from: &str,
    to: &str,
) -> Result<([f64; 2], [f64; 2]), FigureError> {
    let dx = p2[0] - p1[0];
    let dy = p2[1] - p1[1];
    let norm = (dx * dx + dy * dy).sqrt();
    if norm < NORM_EPSILON {
        return Err(degenerate(from, to));
    }
    let ortho = [-dy / norm, dx / norm];
    Ok((
        [p1[0] + shift * ortho[0], p1[1] + shift * ortho[1]],
        [p2[0] + shift * ortho[0], p2[1] + shift * ortho[1]],
    ))
}

/// Linear interpolation `t * p1 + (1 - t) * p2`. `t = 0` lands on
/// `p2`, `t = 1` on `p1`; the weight label uses `t = 0.35` style
/// values to sit closer to the target.
pub fn midpoint_shift(p1: [f64; 2], p2: [f64; 2], t: f64) -> [f64; 2] {
    [
        t * p1[0] + (1.0 - t) * p2[0],
        t * p1[1] + (1.0 - t) * p2[1],
    ]
}

/// Moves both 3D endpoints inward along the connecting unit direction
/// by `distance`, so line segments and cones stand off the node
/// markers. Returns the shortened segment and the unit direction from
/// `p1` to `p2`.
pub fn move_middle_points(
    p1: [f64; 3],
    p2: [f64; 3],
    distance: f64,
    from: &str,
    to: &str,
) -> Result<([f64; 3], [f64; 3], [f64; 3]), FigureError> {
    let delta = [p2[0] - p1[0], p2[1] - p1[1], p2[2] - p1[2]];
    let norm = (delta[0] * delta[0] + delta[1] * delta[1] + delta[2] * delta[2]).sqrt();
    if norm < NORM_EPSILON {
        return Err(degenerate(from, to));
    }
    let unit = [delta[0] / norm, delta[1] / norm, delta[2] / norm];
    let p1_new = [
        p1[0] + unit[0] * distance,
        p1[1] + unit[1] * distance,
        p1[2] + unit[2] * distance,
    ];
    let p2_new = [
        p2[0] - unit[0] * distance,
        p2[1] - unit[1] * distance,
        p2[2] - unit[2] * distance,
    ];
    Ok((p1_new, p2_new, unit))
}
