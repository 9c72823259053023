pub mod common;
pub mod error;
pub mod network;
pub mod pathfinding;
pub mod distance_vector;

pub use common::{AdjacencyMatrix, Distance, NetworkMap, NodeIndex, Weight, INFINITY_GLYPH};
pub use error::{AlgorithmError, AlgorithmResult};
pub use network::to_network;
pub use pathfinding::{reference_all_pairs, shortest_paths, DijkstraResult, DijkstraTrace, TraceCell, TraceStep};
pub use distance_vector::{distance_vector, DistanceVectorTable, DEFAULT_MAX_ITERATIONS};
