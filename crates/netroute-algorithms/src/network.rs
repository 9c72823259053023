//! Conversion from the dense adjacency matrix to a sparse network map
//!
//! The distance-vector engine walks neighbors only, so it works on the sparse
//! form. Zero entries are dropped.

use super::common::{check_square, AdjacencyMatrix, NetworkMap, Weight};
use super::error::AlgorithmResult;
use std::collections::BTreeMap;

/// Convert raw matrix rows into a network map
///
/// Fails with [`AlgorithmError::Shape`](crate::AlgorithmError::Shape) when the
/// rows do not form a square matrix.
pub fn to_network<R: AsRef<[Weight]>>(rows: &[R]) -> AlgorithmResult<NetworkMap> {
    check_square(rows)?;
    Ok(collect_network(rows))
}

impl AdjacencyMatrix {
    /// Sparse view of this matrix (always square, so this cannot fail)
    pub fn to_network(&self) -> NetworkMap {
        collect_network(self.rows())
    }
}

fn collect_network<R: AsRef<[Weight]>>(rows: &[R]) -> NetworkMap {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let neighbors: BTreeMap<_, _> = row
                .as_ref()
                .iter()
                .enumerate()
                .filter(|&(_, &w)| w != 0)
                .map(|(j, &w)| (j, w))
                .collect();
            (i, neighbors)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgorithmError;

    #[test]
    fn test_to_network() {
        let rows: Vec<Vec<Weight>> = vec![vec![0, 2, 0], vec![2, 0, 3], vec![0, 3, 0]];
        let network = to_network(&rows).unwrap();

        assert_eq!(network.len(), 3);
        assert_eq!(network[&0].get(&1), Some(&2));
        assert_eq!(network[&0].get(&2), None);
        assert_eq!(network[&1].len(), 2);
        assert_eq!(network[&2].get(&1), Some(&3));
    }

    #[test]
    fn test_isolated_nodes_keep_an_entry() {
        let matrix = AdjacencyMatrix::new(2);
        let network = matrix.to_network();
        assert_eq!(network.len(), 2);
        assert!(network[&0].is_empty());
        assert!(network[&1].is_empty());
    }

    #[test]
    fn test_shape_error() {
        let rows: Vec<Vec<Weight>> = vec![vec![0, 1, 0], vec![1, 0]];
        assert_eq!(
            to_network(&rows),
            Err(AlgorithmError::Shape { rows: 2, row: 0, len: 3 })
        );
    }

    #[test]
    fn test_network_matches_matrix_symmetry() {
        let mut matrix = AdjacencyMatrix::new(4);
        matrix.set_symmetric(0, 3, 4);
        matrix.set_symmetric(1, 2, 1);
        let network = matrix.to_network();

        for (i, neighbors) in &network {
            for (j, w) in neighbors {
                assert_eq!(network[j].get(i), Some(w));
                assert_eq!(matrix.weight(*i, *j), *w);
            }
        }
    }
}
