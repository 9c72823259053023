//! Distance-vector routing (Bellman-Ford style neighbor exchange)
//!
//! Every node starts out knowing only its direct links. Each round, a node
//! relaxes every destination through every neighbor's current vector. Updates
//! are applied in place, so later nodes in a round already see earlier
//! nodes' improvements.
//!
//! A round converges when no entry changed value.

use super::common::{Distance, NetworkMap, NodeIndex};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Round cap used when the caller has no preference
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Converged (or best-effort) all-pairs table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DistanceVectorTable {
    /// All nodes known to the network, ascending
    pub nodes: Vec<NodeIndex>,
    /// `distances[i][j]` is the cost from `nodes[i]` to `nodes[j]`
    pub distances: Vec<Vec<Distance>>,
    /// Rounds executed
    pub iterations: usize,
    /// Whether the last executed round changed nothing
    pub converged: bool,
}

impl DistanceVectorTable {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn position(&self, node: NodeIndex) -> Option<usize> {
        self.nodes.binary_search(&node).ok()
    }

    /// Cost from `from` to `to`; zero on the diagonal, infinite for unknown nodes
    pub fn distance(&self, from: NodeIndex, to: NodeIndex) -> Distance {
        if from == to {
            return Distance::ZERO;
        }
        match (self.position(from), self.position(to)) {
            (Some(i), Some(j)) => self.distances[i][j],
            _ => Distance::Infinite,
        }
    }

    /// The vector advertised by `node` (every other node -> cost)
    pub fn vector(&self, node: NodeIndex) -> BTreeMap<NodeIndex, Distance> {
        self.nodes
            .iter()
            .filter(|&&other| other != node)
            .map(|&other| (other, self.distance(node, other)))
            .collect()
    }
}

/// Run distance-vector exchange over `network` for at most `max_iterations` rounds.
///
/// Stopping at the cap is not an error: the table is returned as-is with
/// `converged == false`.
pub fn distance_vector(network: &NetworkMap, max_iterations: usize) -> DistanceVectorTable {
    // Destinations include neighbors that never appear as keys
    let mut nodes: Vec<NodeIndex> = network
        .iter()
        .flat_map(|(&node, neighbors)| std::iter::once(node).chain(neighbors.keys().copied()))
        .collect();
    nodes.sort_unstable();
    nodes.dedup();

    let index: BTreeMap<NodeIndex, usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    let n = nodes.len();

    let mut distances = vec![vec![Distance::Infinite; n]; n];
    let mut links: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, row) in distances.iter_mut().enumerate() {
        row[i] = Distance::ZERO;
    }
    for (node, neighbors) in network {
        let i = index[node];
        for (neighbor, &weight) in neighbors {
            let j = index[neighbor];
            if i == j {
                continue;
            }
            distances[i][j] = Distance::Finite(weight);
            links[i].push(j);
        }
    }

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        iterations += 1;
        let mut changed = false;

        for (i, neighbors) in links.iter().enumerate() {
            for &m in neighbors {
                for d in 0..n {
                    if d == i || d == m {
                        continue;
                    }
                    let candidate = distances[i][m] + distances[m][d];
                    if candidate < distances[i][d] {
                        distances[i][d] = candidate;
                        changed = true;
                    }
                }
            }
        }

        if !changed {
            converged = true;
            break;
        }
    }

    DistanceVectorTable {
        nodes,
        distances,
        iterations,
        converged,
    }
}
