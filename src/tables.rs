//! Tabular input loading: CSV edge and node tables, JSON position map.

use anyhow::Context;
use std::path::Path;

use crate::ir::{EdgeRow, NetworkGraph, NodeRow, Positions};

/// Reads the edge table. Expected header: `source_id,target_id,weights`.
pub fn load_edge_table(path: &Path) -> anyhow::Result<Vec<EdgeRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open edge table {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: EdgeRow =
            record.with_context(|| format!("edge table row in {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads the node attribute table. Expected header:
/// `node_id,node_label,node_color`.
pub fn load_node_table(path: &Path) -> anyhow::Result<Vec<NodeRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open node table {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: NodeRow =
            record.with_context(|| format!("node table row in {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads the externally computed layout: a JSON object mapping node id
/// to a coordinate array.
pub fn load_positions(path: &Path) -> anyhow::Result<Positions> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read layout {}", path.display()))?;
    let positions: Positions =
        serde_json::from_str(&contents).with_context(|| format!("parse layout {}", path.display()))?;
    Ok(positions)
}

/// Loads both tables into a [`NetworkGraph`].
pub fn load_network(edges: &Path, nodes: &Path) -> anyhow::Result<NetworkGraph> {
    Ok(NetworkGraph::new(
        load_edge_table(edges)?,
        load_node_table(nodes)?,
    ))
}
