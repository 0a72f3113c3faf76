#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod ir;
pub mod model;
pub mod scene2d;
pub mod scene3d;
pub mod tables;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::RenderOptions;
pub use error::FigureError;
pub use figure::{Figure, Trace, write_figure_json};
pub use ir::{Dimension, LayoutAlgorithm, NetworkGraph, Positions};
pub use model::PlotModel;

/// Builds the figure for one render request, or `Ok(None)` when the
/// dimension/algorithm selection has no chart (the caller decides what
/// an unsupported selection means; it is not an error here).
pub fn build_figure(
    graph: &NetworkGraph,
    positions: &Positions,
    dimension: Dimension,
    algorithm: LayoutAlgorithm,
    options: &RenderOptions,
) -> Result<Option<Figure>, FigureError> {
    if !algorithm.supported_in(dimension) {
        return Ok(None);
    }
    let model = PlotModel::build(graph, positions, dimension)?;
    let figure = match dimension {
        Dimension::Two => scene2d::build_scene_2d(&model, options)?,
        Dimension::Three => scene3d::build_scene_3d(&model, options)?,
    };
    Ok(Some(figure))
}
