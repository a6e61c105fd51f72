//! Network container: owns all nodes and the symmetric links between them.
//!
//! The network is write-once for a simulation: nodes and links are added
//! before the first round and never removed or reweighted mid-run.

use crate::topology::node::Node;
use log::debug;
use std::collections::BTreeMap;

/// Errors that can occur while building a topology
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Unknown node: {name}")]
    UnknownNode { name: String },

    #[error("Link endpoints must differ: {name}")]
    SelfLink { name: String },
}

/// The full simulated network.
///
/// Nodes are owned here and referenced by name everywhere else; neighbor
/// relations are name lookups into this map, never structural back-pointers.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: BTreeMap<String, Node>,
    /// Node names in insertion order, for deterministic round scheduling
    order: Vec<String>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given name.
    ///
    /// Idempotent: adding a name that already exists is a no-op, so the
    /// existing node (and anything it has learned) is left untouched.
    pub fn add_node(&mut self, name: &str) {
        if self.nodes.contains_key(name) {
            debug!("Node {} already present, skipping", name);
            return;
        }
        self.nodes.insert(name.to_string(), Node::new(name));
        self.order.push(name.to_string());
    }

    /// Add a symmetric link between two existing nodes.
    ///
    /// Both endpoints must already have been added; referencing an unknown
    /// name fails with [`TopologyError::UnknownNode`] rather than being
    /// silently ignored. The cost is registered in both directions and each
    /// endpoint's routing table is seeded with the direct-link entry.
    pub fn add_link(&mut self, a: &str, b: &str, cost: u64) -> Result<(), TopologyError> {
        if a == b {
            return Err(TopologyError::SelfLink {
                name: a.to_string(),
            });
        }
        for endpoint in [a, b] {
            if !self.nodes.contains_key(endpoint) {
                return Err(TopologyError::UnknownNode {
                    name: endpoint.to_string(),
                });
            }
        }

        // Mirrored registration keeps the link symmetric by construction
        if let Some(node) = self.nodes.get_mut(a) {
            node.register_neighbor(b, cost);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            node.register_neighbor(a, cost);
        }
        debug!("Linked {} <-> {} at cost {}", a, b, cost);
        Ok(())
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub(crate) fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.get_mut(name)
    }

    /// Node names in insertion order.
    pub fn node_names(&self) -> &[String] {
        &self.order
    }

    /// Iterate nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|name| self.nodes.get(name))
    }

    /// Number of nodes in the network.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut network = Network::new();
        network.add_node("A");
        network.add_node("A");

        assert_eq!(network.len(), 1);
        assert_eq!(network.node_names(), &["A".to_string()]);
    }

    #[test]
    fn test_add_node_preserves_learned_state() {
        let mut network = Network::new();
        network.add_node("A");
        network.add_node("B");
        network.add_link("A", "B", 2).unwrap();

        // Re-adding must not reset the node
        network.add_node("A");
        assert_eq!(network.node("A").unwrap().route_to("B").unwrap().cost, 2);
    }

    #[test]
    fn test_add_link_is_symmetric() {
        let mut network = Network::new();
        network.add_node("A");
        network.add_node("B");
        network.add_link("A", "B", 7).unwrap();

        assert_eq!(network.node("A").unwrap().neighbors.get("B"), Some(&7));
        assert_eq!(network.node("B").unwrap().neighbors.get("A"), Some(&7));

        // Direct-link entries seeded on both sides
        let a_to_b = network.node("A").unwrap().route_to("B").unwrap();
        assert_eq!((a_to_b.cost, a_to_b.next_hop.as_str()), (7, "B"));
        let b_to_a = network.node("B").unwrap().route_to("A").unwrap();
        assert_eq!((b_to_a.cost, b_to_a.next_hop.as_str()), (7, "A"));
    }

    #[test]
    fn test_add_link_unknown_endpoint_fails() {
        let mut network = Network::new();
        network.add_node("A");

        let err = network.add_link("A", "Z", 1).unwrap_err();
        assert_eq!(
            err,
            TopologyError::UnknownNode {
                name: "Z".to_string()
            }
        );
        // Nothing was registered on the known endpoint
        assert!(network.node("A").unwrap().neighbors.is_empty());
    }

    #[test]
    fn test_add_link_self_loop_fails() {
        let mut network = Network::new();
        network.add_node("A");

        let err = network.add_link("A", "A", 1).unwrap_err();
        assert_eq!(
            err,
            TopologyError::SelfLink {
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut network = Network::new();
        for name in ["C", "A", "B"] {
            network.add_node(name);
        }
        let names: Vec<&str> = network.nodes().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
