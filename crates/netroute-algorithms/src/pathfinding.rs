//! Single-source shortest paths over the adjacency matrix
//!
//! Dijkstra with a linear minimum scan. The scan breaks ties on the lowest
//! node index so the settlement order, and therefore the trace, is
//! deterministic.
//!
//! Known limitation: a `0` matrix entry is indistinguishable from "no edge",
//! so a zero-cost link never carries a path.

use super::common::{AdjacencyMatrix, Distance, NodeIndex, Weight};
use super::error::{AlgorithmError, AlgorithmResult};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One cell of a trace row, for a node that is not the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum TraceCell {
    /// The node is already in the settled set
    Settled,
    /// No finite distance known yet
    Unreachable,
    /// Tentative distance, annotated with a display predecessor
    Tentative { distance: Weight, via: NodeIndex },
}

/// State of the run right after one node was settled
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TraceStep {
    pub step: usize,
    pub settled_node: NodeIndex,
    /// Settled set so far, in selection order
    pub settled: Vec<NodeIndex>,
    /// Aligned with [`DijkstraTrace::columns`]
    pub cells: Vec<TraceCell>,
}

/// Step-by-step record of a Dijkstra run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DijkstraTrace {
    pub source: NodeIndex,
    /// Every node except the source, ascending
    pub columns: Vec<NodeIndex>,
    pub steps: Vec<TraceStep>,
}

/// Result of a single-source run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DijkstraResult {
    pub source: NodeIndex,
    pub distances: Vec<Distance>,
    /// Authoritative shortest-path predecessors (set on strict improvement)
    pub predecessors: Vec<Option<NodeIndex>>,
    pub settled_order: Vec<NodeIndex>,
    pub trace: DijkstraTrace,
}

impl DijkstraResult {
    pub fn distance(&self, node: NodeIndex) -> Distance {
        self.distances.get(node).copied().unwrap_or(Distance::Infinite)
    }

    /// Shortest path from the source to `target`, following the
    /// authoritative predecessors. `None` when `target` is unreachable.
    pub fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.distance(target).is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut curr = target;
        while let Some(prev) = self.predecessors[curr] {
            path.push(prev);
            curr = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `source`, recording a trace step per settlement.
pub fn shortest_paths(matrix: &AdjacencyMatrix, source: NodeIndex) -> AlgorithmResult<DijkstraResult> {
    let node_count = matrix.node_count();
    if source >= node_count {
        return Err(AlgorithmError::SourceOutOfRange { node: source, node_count });
    }

    Ok(run(matrix, source, true))
}

/// All-pairs distances obtained by running Dijkstra from every node.
///
/// Used as the reference the distance-vector table is checked against.
pub fn reference_all_pairs(matrix: &AdjacencyMatrix) -> Vec<Vec<Distance>> {
    (0..matrix.node_count())
        .map(|source| run(matrix, source, false).distances)
        .collect()
}

fn run(matrix: &AdjacencyMatrix, source: NodeIndex, record_trace: bool) -> DijkstraResult {
    let node_count = matrix.node_count();
    let mut distances = vec![Distance::Infinite; node_count];
    let mut predecessors = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut settled_order = Vec::with_capacity(node_count);
    let columns: Vec<NodeIndex> = (0..node_count).filter(|&v| v != source).collect();
    let mut steps = Vec::new();

    distances[source] = Distance::ZERO;

    while let Some(u) = closest_unsettled(&distances, &settled) {
        settled[u] = true;
        settled_order.push(u);

        // neighbors() already skips zero entries
        for (v, weight) in matrix.neighbors(u) {
            if settled[v] {
                continue;
            }
            let candidate = distances[u] + weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
            }
        }

        if record_trace {
            let cells = columns
                .iter()
                .map(|&v| trace_cell(matrix, v, &distances, &settled, &settled_order, &predecessors))
                .collect();
            steps.push(TraceStep {
                step: steps.len(),
                settled_node: u,
                settled: settled_order.clone(),
                cells,
            });
        }
    }

    DijkstraResult {
        source,
        distances,
        predecessors,
        settled_order,
        trace: DijkstraTrace { source, columns, steps },
    }
}

/// Unsettled node with the smallest finite distance, lowest index on ties
fn closest_unsettled(distances: &[Distance], settled: &[bool]) -> Option<NodeIndex> {
    let mut best: Option<(NodeIndex, Distance)> = None;
    for (v, &d) in distances.iter().enumerate() {
        if settled[v] || !d.is_finite() {
            continue;
        }
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((v, d)),
        }
    }
    best.map(|(v, _)| v)
}

/// Display annotation for one unsettled node.
///
/// The predecessor shown is the settled node with the cheapest direct edge
/// into `v` (first in settlement order on ties). It is a display value only
/// and can differ from the authoritative predecessor.
fn trace_cell(
    matrix: &AdjacencyMatrix,
    v: NodeIndex,
    distances: &[Distance],
    settled: &[bool],
    settled_order: &[NodeIndex],
    predecessors: &[Option<NodeIndex>],
) -> TraceCell {
    if settled[v] {
        return TraceCell::Settled;
    }
    let Some(distance) = distances[v].finite() else {
        return TraceCell::Unreachable;
    };

    let mut via: Option<(NodeIndex, Weight)> = None;
    for &s in settled_order {
        let w = matrix.weight(s, v);
        if w == 0 {
            continue;
        }
        if via.map_or(true, |(_, best)| w < best) {
            via = Some((s, w));
        }
    }

    match via.map(|(s, _)| s).or(predecessors[v]) {
        Some(via) => TraceCell::Tentative { distance, via },
        None => TraceCell::Unreachable,
    }
}
