//! Graph-editing session
//!
//! The editor hands out node ids from a counter it owns. The counter lives
//! here, in the session, and every routing run works on an explicit snapshot
//! of the session's nodes and edges.

use super::edge::{EdgeRecord, WeightLabel};
use crate::config::RoutingConfig;
use crate::error::{RoutingError, RoutingResult};
use crate::routing::{self, RoutingOutcome};
use netroute_algorithms::NodeIndex;
use serde::{Deserialize, Serialize};

/// Nodes `0..node_count` plus their edges, as exchanged with the editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub node_count: usize,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    pub fn new(node_count: usize, edges: Vec<EdgeRecord>) -> Self {
        GraphSnapshot { node_count, edges }
    }

    pub fn from_json(json: &str) -> RoutingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> RoutingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// An editable network with its own node-id counter
#[derive(Debug, Clone, Default)]
pub struct GraphSession {
    next_id: NodeIndex,
    edges: Vec<EdgeRecord>,
}

impl GraphSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        GraphSession {
            next_id: snapshot.node_count,
            edges: snapshot.edges,
        }
    }

    /// Create a node and return its index
    pub fn add_node(&mut self) -> NodeIndex {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn node_count(&self) -> usize {
        self.next_id
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Connect two existing nodes and return the new edge's position
    pub fn connect(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        label: Option<WeightLabel>,
    ) -> RoutingResult<usize> {
        if source >= self.next_id || target >= self.next_id {
            return Err(RoutingError::OutOfRange {
                from: source,
                to: target,
                node_count: self.next_id,
            });
        }

        self.edges.push(EdgeRecord { source, target, label });
        Ok(self.edges.len() - 1)
    }

    /// Replace the weight label of an existing edge
    pub fn set_label(&mut self, edge: usize, label: impl Into<WeightLabel>) -> RoutingResult<()> {
        let record = self.edges.get_mut(edge).ok_or(RoutingError::EdgeNotFound(edge))?;
        record.label = Some(label.into());
        Ok(())
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::new(self.next_id, self.edges.clone())
    }

    /// Run both algorithms from `source`.
    ///
    /// Defaulted weight labels are kept on the session's edges.
    pub fn run(&mut self, source: NodeIndex, config: &RoutingConfig) -> RoutingResult<RoutingOutcome> {
        let mut snapshot = GraphSnapshot::new(self.next_id, std::mem::take(&mut self.edges));
        let outcome = routing::run(&mut snapshot, source, config);
        self.edges = snapshot.edges;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut session = GraphSession::new();
        assert_eq!(session.add_node(), 0);
        assert_eq!(session.add_node(), 1);
        assert_eq!(session.add_node(), 2);
        assert_eq!(session.node_count(), 3);
    }

    #[test]
    fn test_connect_rejects_unknown_nodes() {
        let mut session = GraphSession::new();
        let a = session.add_node();
        assert!(matches!(
            session.connect(a, 1, None),
            Err(RoutingError::OutOfRange { from: 0, to: 1, node_count: 1 })
        ));
    }

    #[test]
    fn test_set_label() {
        let mut session = GraphSession::new();
        let a = session.add_node();
        let b = session.add_node();
        let edge = session.connect(a, b, None).unwrap();

        session.set_label(edge, "6").unwrap();
        assert_eq!(session.edges()[edge].weight(), 6);
        assert!(matches!(session.set_label(9, "1"), Err(RoutingError::EdgeNotFound(9))));
    }

    #[test]
    fn test_run_persists_defaults() {
        let mut session = GraphSession::new();
        let a = session.add_node();
        let b = session.add_node();
        session.connect(a, b, None).unwrap();

        let outcome = session.run(a, &RoutingConfig::default()).unwrap();
        assert_eq!(outcome.dijkstra.distance(b).finite(), Some(1));
        assert_eq!(session.edges()[0].label, Some(WeightLabel::Number(1)));
    }

    #[test]
    fn test_failed_run_keeps_edges() {
        let mut session = GraphSession::new();
        let a = session.add_node();
        let b = session.add_node();
        session.connect(a, b, Some("3".into())).unwrap();

        assert!(session.run(5, &RoutingConfig::default()).is_err());
        assert_eq!(session.edges().len(), 1);
    }

    #[test]
    fn test_snapshot_roundtrip_through_session() {
        let snapshot = GraphSnapshot::from_json(
            r#"{"node_count": 3, "edges": [{"source": 0, "target": 2, "label": "8"}]}"#,
        )
        .unwrap();
        let mut session = GraphSession::from_snapshot(snapshot.clone());

        assert_eq!(session.snapshot(), snapshot);
        assert_eq!(session.add_node(), 3);
    }

    #[test]
    fn test_malformed_labels_still_load_and_run() {
        let mut snapshot = GraphSnapshot::from_json(
            r#"{"node_count": 3, "edges": [
                {"source": 0, "target": 1, "label": 2.5},
                {"source": 1, "target": 2, "label": true}]}"#,
        )
        .unwrap();

        let outcome = routing::run(&mut snapshot, 0, &RoutingConfig::default()).unwrap();
        assert_eq!(outcome.dijkstra.distance(1).finite(), Some(2));
        assert_eq!(outcome.dijkstra.distance(2).finite(), Some(3));
        assert_eq!(snapshot.edges[1].label, Some(WeightLabel::Number(1)));
    }
}
