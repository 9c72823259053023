//! Run configuration
//!
//! Loaded from YAML, every field optional:
//!
//! ```yaml
//! max_iterations: 50
//! check_reference: false
//! ```

use crate::error::RoutingResult;
use netroute_algorithms::DEFAULT_MAX_ITERATIONS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Routing run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Round cap for the distance-vector exchange
    pub max_iterations: usize,
    /// Compare a converged distance-vector table against repeated Dijkstra runs
    pub check_reference: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            check_reference: true,
        }
    }
}

impl RoutingConfig {
    pub fn from_yaml_str(yaml: &str) -> RoutingResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> RoutingResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
