use crate::build_figure;
use crate::config::{RenderOptions, load_options};
use crate::figure::write_figure_json;
use crate::ir::{Dimension, LayoutAlgorithm};
use crate::tables::{load_network, load_positions};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ngr", version, about = "Network graph figures from tabular edge data (2D arrows, 3D cones)")]
pub struct Args {
    /// Edge table CSV (source_id,target_id,weights)
    #[arg(long = "edges")]
    pub edges: PathBuf,

    /// Node attribute table CSV (node_id,node_label,node_color)
    #[arg(long = "nodes")]
    pub nodes: PathBuf,

    /// Layout JSON mapping node id to a coordinate array
    #[arg(long = "positions")]
    pub positions: PathBuf,

    /// Figure dimensionality
    #[arg(short = 'd', long = "dimension", value_enum, default_value = "2d")]
    pub dimension: DimensionArg,

    /// Layout algorithm the positions came from
    #[arg(short = 'a', long = "algorithm", value_enum, default_value = "spring")]
    pub algorithm: AlgorithmArg,

    /// Render options JSON (all seven knobs). Defaults to the stock
    /// constants if omitted.
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Output file for the figure JSON. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DimensionArg {
    #[value(name = "2d")]
    Two,
    #[value(name = "3d")]
    Three,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Two => Dimension::Two,
            DimensionArg::Three => Dimension::Three,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum AlgorithmArg {
    Spring,
    Random,
    Bipartite,
    Circular,
}

impl From<AlgorithmArg> for LayoutAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Spring => LayoutAlgorithm::Spring,
            AlgorithmArg::Random => LayoutAlgorithm::Random,
            AlgorithmArg::Bipartite => LayoutAlgorithm::Bipartite,
            AlgorithmArg::Circular => LayoutAlgorithm::Circular,
        }
    }
}

/// Stock constants used when no config file is given. The library
/// itself carries no defaults; these belong to the shell.
fn stock_options() -> RenderOptions {
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

pub fn run() -> Result<()> {
    let args = Args::parse();
    let options = match args.config.as_deref() {
        Some(path) => load_options(path)?,
        None => stock_options(),
    };

    let graph = load_network(&args.edges, &args.nodes)?;
    let positions = load_positions(&args.positions)?;
    let dimension = Dimension::from(args.dimension);
    let algorithm = LayoutAlgorithm::from(args.algorithm);

    match build_figure(&graph, &positions, dimension, algorithm, &options)? {
        Some(figure) => write_figure_json(&figure, args.output.as_deref())?,
        None => {
            eprintln!("no figure for this dimension/algorithm selection");
        }
    }
    Ok(())
}
