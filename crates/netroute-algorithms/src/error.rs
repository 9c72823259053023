//! Errors raised by the routing algorithms

use thiserror::Error;

/// Errors that can occur while validating a matrix or starting a run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("Matrix is not square: row {row} has {len} entries, expected {rows}")]
    Shape { rows: usize, row: usize, len: usize },

    #[error("Matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },

    #[error("Matrix diagonal must be zero, found non-zero entry at index {index}")]
    NonZeroDiagonal { index: usize },

    #[error("Source node {node} is out of range for {node_count} nodes")]
    SourceOutOfRange { node: usize, node_count: usize },
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
