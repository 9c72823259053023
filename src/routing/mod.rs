//! Routing pipeline
//!
//! Snapshot -> adjacency matrix -> {Dijkstra, network map -> distance vector}
//! -> text reports. Algorithms live in the `netroute-algorithms` crate; this
//! module wires them together for one run.

use crate::config::RoutingConfig;
use crate::error::{RoutingError, RoutingResult};
use crate::network::{build_matrix, GraphSnapshot};
use crate::report;
use netroute_algorithms::{
    distance_vector, reference_all_pairs, shortest_paths, AdjacencyMatrix, DijkstraResult,
    Distance, DistanceVectorTable, NodeIndex,
};
use serde::Serialize;
use tracing::{debug, info, warn};

// Re-export algorithms
pub use netroute_algorithms::{
    to_network, DijkstraTrace, NetworkMap, TraceCell, TraceStep, DEFAULT_MAX_ITERATIONS,
};

/// Everything one run produces
#[derive(Debug, Clone, Serialize)]
pub struct RoutingOutcome {
    pub source: NodeIndex,
    pub matrix: AdjacencyMatrix,
    pub dijkstra: DijkstraResult,
    /// Single-source distances shown in the distance-vector report
    pub source_distances: Vec<Distance>,
    pub distance_vector: DistanceVectorTable,
    pub dijkstra_report: String,
    pub distance_vector_report: String,
}

/// Run both algorithms over `snapshot` from `source`.
///
/// Edges with a missing or unusable weight label get the default label
/// written back into `snapshot`.
pub fn run(
    snapshot: &mut GraphSnapshot,
    source: NodeIndex,
    config: &RoutingConfig,
) -> RoutingResult<RoutingOutcome> {
    let node_count = snapshot.node_count;
    if source >= node_count {
        return Err(RoutingError::InvalidSource { node: source, node_count });
    }

    info!(
        "Routing run: {} nodes, {} edges, source {}",
        node_count,
        snapshot.edges.len(),
        source
    );
    let matrix = build_matrix(node_count, &mut snapshot.edges)?;
    run_matrix(matrix, source, config)
}

/// Run both algorithms over an already-built matrix
pub fn run_matrix(
    matrix: AdjacencyMatrix,
    source: NodeIndex,
    config: &RoutingConfig,
) -> RoutingResult<RoutingOutcome> {
    let node_count = matrix.node_count();
    if source >= node_count {
        return Err(RoutingError::InvalidSource { node: source, node_count });
    }

    let dijkstra = shortest_paths(&matrix, source)?;
    debug!("Dijkstra settled {} of {} nodes", dijkstra.settled_order.len(), node_count);

    let network = matrix.to_network();
    let table = distance_vector(&network, config.max_iterations);
    if table.converged {
        debug!("Distance vector converged after {} rounds", table.iterations);
        if config.check_reference {
            check_against_reference(&matrix, &table);
        }
    } else {
        warn!(
            "Distance vector did not converge within {} rounds, reporting best effort",
            config.max_iterations
        );
    }

    let source_distances = dijkstra.distances.clone();
    let dijkstra_report = report::format_dijkstra(&dijkstra.trace);
    let distance_vector_report = report::format_distance_vector(&source_distances, &table);

    info!("Routing run finished");
    Ok(RoutingOutcome {
        source,
        matrix,
        dijkstra,
        source_distances,
        distance_vector: table,
        dijkstra_report,
        distance_vector_report,
    })
}

/// Count of entries where a converged table disagrees with repeated Dijkstra runs
fn check_against_reference(matrix: &AdjacencyMatrix, table: &DistanceVectorTable) -> usize {
    let reference = reference_all_pairs(matrix);
    let mut mismatches = 0;
    for (from, row) in reference.iter().enumerate() {
        for (to, &expected) in row.iter().enumerate() {
            let got = table.distance(from, to);
            if got != expected {
                warn!(
                    "Distance vector {} -> {} is {}, reference is {}",
                    from, to, got, expected
                );
                mismatches += 1;
            }
        }
    }
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::EdgeRecord;

    fn line() -> GraphSnapshot {
        GraphSnapshot::new(
            3,
            vec![
                EdgeRecord::new(0, 1).with_label("2"),
                EdgeRecord::new(1, 2).with_label("3"),
            ],
        )
    }

    #[test]
    fn test_run_line() {
        let mut snapshot = line();
        let outcome = run(&mut snapshot, 0, &RoutingConfig::default()).unwrap();

        assert_eq!(
            outcome.source_distances,
            vec![Distance::Finite(0), Distance::Finite(2), Distance::Finite(5)]
        );
        assert!(outcome.distance_vector.converged);
        assert_eq!(outcome.distance_vector.distance(2, 0), Distance::Finite(5));
        assert_eq!(check_against_reference(&outcome.matrix, &outcome.distance_vector), 0);
    }

    #[test]
    fn test_invalid_source() {
        let mut snapshot = line();
        let err = run(&mut snapshot, 3, &RoutingConfig::default()).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidSource { node: 3, node_count: 3 }));
    }

    #[test]
    fn test_empty_network_has_no_valid_source() {
        let mut snapshot = GraphSnapshot::default();
        assert!(run(&mut snapshot, 0, &RoutingConfig::default()).is_err());
    }

    #[test]
    fn test_zero_rounds_is_not_an_error() {
        let mut snapshot = line();
        let config = RoutingConfig::default().with_max_iterations(0);
        let outcome = run(&mut snapshot, 0, &config).unwrap();

        assert!(!outcome.distance_vector.converged);
        assert_eq!(outcome.distance_vector.distance(0, 2), Distance::Infinite);
        // Dijkstra is unaffected by the round cap
        assert_eq!(outcome.dijkstra.distance(2), Distance::Finite(5));
    }

    #[test]
    fn test_unconverged_table_disagrees_with_reference() {
        let matrix = build_matrix(3, &mut line().edges).unwrap();
        let table = distance_vector(&matrix.to_network(), 0);
        assert_eq!(check_against_reference(&matrix, &table), 2);
    }
}
