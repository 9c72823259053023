//! Error types for the routing pipeline

use netroute_algorithms::{AlgorithmError, NodeIndex};
use thiserror::Error;

/// Errors that can occur while building a network or running the routing algorithms
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Edge ({from}, {to}) references a node outside 0..{node_count}")]
    OutOfRange {
        from: NodeIndex,
        to: NodeIndex,
        node_count: usize,
    },

    #[error("Source node {node} does not exist ({node_count} nodes)")]
    InvalidSource { node: NodeIndex, node_count: usize },

    #[error("Edge {0} not found")]
    EdgeNotFound(usize),

    #[error("Algorithm error: {0}")]
    Algorithm(#[from] AlgorithmError),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
