//! Edge list -> adjacency matrix

use super::edge::EdgeRecord;
use crate::error::{RoutingError, RoutingResult};
use netroute_algorithms::AdjacencyMatrix;
use tracing::debug;

/// Build the symmetric adjacency matrix for `node_count` nodes.
///
/// Every edge endpoint is checked before anything is touched, so a failed
/// build leaves the edges unchanged. On success, edges whose label was
/// missing or unusable carry the default weight label afterwards.
/// Self-loops keep the diagonal at zero and are skipped. When the same pair
/// appears twice, the later edge wins.
pub fn build_matrix(node_count: usize, edges: &mut [EdgeRecord]) -> RoutingResult<AdjacencyMatrix> {
    if let Some(edge) = edges
        .iter()
        .find(|e| e.source >= node_count || e.target >= node_count)
    {
        return Err(RoutingError::OutOfRange {
            from: edge.source,
            to: edge.target,
            node_count,
        });
    }

    let mut matrix = AdjacencyMatrix::new(node_count);
    for edge in edges.iter_mut() {
        let weight = edge.resolve_weight();
        if edge.is_self_loop() {
            debug!("Skipping self-loop on node {}", edge.source);
            continue;
        }
        matrix.set_symmetric(edge.source, edge.target, weight);
    }

    Ok(matrix)
}
