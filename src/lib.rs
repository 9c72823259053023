//! Netroute
//!
//! Routing over small, hand-drawn computer networks. A graph editor supplies
//! nodes `0..N` and weighted undirected edges; this crate turns them into an
//! adjacency matrix, runs Dijkstra (with a step-by-step trace) and iterative
//! distance-vector routing, and renders both results as text.
//!
//! # Components
//!
//! - Graph builder: edge records -> symmetric adjacency matrix, defaulting
//!   missing weights to 1 ([`network::build_matrix`])
//! - Network mapper: matrix -> sparse neighbor map ([`routing::to_network`])
//! - Dijkstra engine and distance-vector engine (`netroute-algorithms`)
//! - Report formatter ([`report`])
//!
//! ## Example Usage
//!
//! ```rust
//! use netroute::{GraphSession, RoutingConfig};
//!
//! let mut session = GraphSession::new();
//! let a = session.add_node();
//! let b = session.add_node();
//! let c = session.add_node();
//! session.connect(a, b, Some("2".into())).unwrap();
//! session.connect(b, c, Some("3".into())).unwrap();
//!
//! let outcome = session.run(a, &RoutingConfig::default()).unwrap();
//! assert_eq!(outcome.dijkstra.distance(c).finite(), Some(5));
//! println!("{}", outcome.dijkstra_report);
//! println!("{}", outcome.distance_vector_report);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod network;
pub mod report;
pub mod routing;

// Re-export main types for convenience
pub use config::RoutingConfig;
pub use error::{RoutingError, RoutingResult};
pub use network::{build_matrix, EdgeRecord, GraphSession, GraphSnapshot, WeightLabel, DEFAULT_WEIGHT};
pub use report::{format_dijkstra, format_distance_vector};
pub use routing::{run, run_matrix, RoutingOutcome};

pub use netroute_algorithms::{
    AdjacencyMatrix, DijkstraResult, Distance, DistanceVectorTable, NodeIndex, Weight,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
