//! Shared types for the routing algorithms
//!
//! Nodes are dense indices `0..N`. Edge weights are non-negative integers and a
//! weight of `0` in the adjacency matrix means "no edge".

use crate::error::{AlgorithmError, AlgorithmResult};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node index type (dense, assigned sequentially by the graph editor)
pub type NodeIndex = usize;

/// Edge weight type
pub type Weight = u64;

/// Glyph used wherever an unreachable distance is rendered
pub const INFINITY_GLYPH: &str = "∞";

/// Sparse adjacency: node -> (neighbor -> weight)
///
/// Every node of the source matrix has an entry, even if it has no neighbors.
pub type NetworkMap = BTreeMap<NodeIndex, BTreeMap<NodeIndex, Weight>>;

/// A path cost that may be infinite (unreachable)
///
/// `Finite` sorts before `Infinite`, so the derived ordering is the natural
/// "shorter is smaller" ordering used by relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Option<Weight>", into = "Option<Weight>")
)]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite cost, if any
    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Infinite => None,
        }
    }
}

impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, rhs: Weight) -> Distance {
        match self {
            Distance::Finite(w) => Distance::Finite(w.saturating_add(rhs)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        match rhs {
            Distance::Finite(w) => self + w,
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl From<Option<Weight>> for Distance {
    fn from(value: Option<Weight>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl From<Distance> for Option<Weight> {
    fn from(value: Distance) -> Self {
        value.finite()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Infinite => f.write_str(INFINITY_GLYPH),
        }
    }
}

/// Dense, symmetric adjacency matrix of an undirected network
///
/// Invariants: square, symmetric, zero diagonal. `0` means "no edge".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Vec<Weight>>", into = "Vec<Vec<Weight>>")
)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    /// An `node_count x node_count` matrix with no edges
    pub fn new(node_count: usize) -> Self {
        AdjacencyMatrix {
            rows: vec![vec![0; node_count]; node_count],
        }
    }

    /// Validate raw rows into a matrix
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> AlgorithmResult<Self> {
        check_square(&rows)?;
        let n = rows.len();
        for i in 0..n {
            if rows[i][i] != 0 {
                return Err(AlgorithmError::NonZeroDiagonal { index: i });
            }
            for j in (i + 1)..n {
                if rows[i][j] != rows[j][i] {
                    return Err(AlgorithmError::Asymmetric { row: i, col: j });
                }
            }
        }
        Ok(AdjacencyMatrix { rows })
    }

    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Weight between `u` and `v` (`0` when there is no edge)
    pub fn weight(&self, u: NodeIndex, v: NodeIndex) -> Weight {
        self.rows[u][v]
    }

    /// Set the weight of the undirected edge `{u, v}`; last write wins.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn set_symmetric(&mut self, u: NodeIndex, v: NodeIndex, weight: Weight) {
        self.rows[u][v] = weight;
        self.rows[v][u] = weight;
    }

    /// Neighbors of `u` joined by a non-zero weight
    pub fn neighbors(&self, u: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.rows[u]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(v, &w)| (v, w))
    }

    pub fn rows(&self) -> &[Vec<Weight>] {
        &self.rows
    }

    /// Number of undirected edges (non-zero entries above the diagonal)
    pub fn edge_count(&self) -> usize {
        (0..self.node_count())
            .map(|i| self.rows[i][i + 1..].iter().filter(|&&w| w != 0).count())
            .sum()
    }
}

impl TryFrom<Vec<Vec<Weight>>> for AdjacencyMatrix {
    type Error = AlgorithmError;

    fn try_from(rows: Vec<Vec<Weight>>) -> AlgorithmResult<Self> {
        AdjacencyMatrix::from_rows(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<Weight>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.rows
    }
}

pub(crate) fn check_square<R: AsRef<[Weight]>>(rows: &[R]) -> AlgorithmResult<()> {
    let n = rows.len();
    for (row, entries) in rows.iter().enumerate() {
        let len = entries.as_ref().len();
        if len != n {
            return Err(AlgorithmError::Shape { rows: n, row, len });
        }
    }
    Ok(())
}
