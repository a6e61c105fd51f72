//! Node type and per-node routing table.
//!
//! Each node knows only its direct neighbors (with symmetric link costs) and
//! its own routing table. Tables are keyed with `BTreeMap` so iteration order
//! is lexicographic and simulation runs are reproducible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single routing table entry: the cost to reach a destination and the
/// neighbor to forward through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub cost: u64,
    pub next_hop: String,
}

/// A node in the simulated network.
///
/// The routing table always contains the self-entry `(0, self)`. With
/// non-negative link costs no path through a neighbor can undercut it, so the
/// relaxation procedure never displaces it.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique node identity within the network
    pub name: String,
    /// Direct neighbors and the symmetric link cost to each
    pub neighbors: BTreeMap<String, u64>,
    /// Destination -> (cost, next hop)
    pub routing_table: BTreeMap<String, RouteEntry>,
}

impl Node {
    /// Create a node that initially knows only the route to itself.
    pub fn new(name: &str) -> Self {
        let mut routing_table = BTreeMap::new();
        routing_table.insert(
            name.to_string(),
            RouteEntry {
                cost: 0,
                next_hop: name.to_string(),
            },
        );
        Self {
            name: name.to_string(),
            neighbors: BTreeMap::new(),
            routing_table,
        }
    }

    /// Record a direct link to `neighbor` and seed the matching routing-table
    /// entry.
    ///
    /// The direct-link entry is only adopted when it beats whatever is already
    /// known for that destination, so re-registering a more expensive link
    /// cannot raise a previously discovered cost.
    pub(crate) fn register_neighbor(&mut self, neighbor: &str, cost: u64) {
        self.neighbors.insert(neighbor.to_string(), cost);

        let keep_existing = self
            .routing_table
            .get(neighbor)
            .map_or(false, |existing| existing.cost <= cost);
        if !keep_existing {
            self.routing_table.insert(
                neighbor.to_string(),
                RouteEntry {
                    cost,
                    next_hop: neighbor.to_string(),
                },
            );
        }
    }

    /// Look up the current route to `destination`, if one has been discovered.
    ///
    /// Absence means "unreachable so far" -- there is no infinity sentinel.
    pub fn route_to(&self, destination: &str) -> Option<&RouteEntry> {
        self.routing_table.get(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_has_self_route_only() {
        let node = Node::new("A");
        assert_eq!(node.name, "A");
        assert!(node.neighbors.is_empty());
        assert_eq!(node.routing_table.len(), 1);

        let self_route = node.route_to("A").unwrap();
        assert_eq!(self_route.cost, 0);
        assert_eq!(self_route.next_hop, "A");
    }

    #[test]
    fn test_register_neighbor_seeds_direct_route() {
        let mut node = Node::new("A");
        node.register_neighbor("B", 3);

        assert_eq!(node.neighbors.get("B"), Some(&3));
        let route = node.route_to("B").unwrap();
        assert_eq!(route.cost, 3);
        assert_eq!(route.next_hop, "B");
    }

    #[test]
    fn test_register_neighbor_keeps_cheaper_known_route() {
        let mut node = Node::new("A");
        // A multi-hop route to B learned earlier at cost 2
        node.routing_table.insert(
            "B".to_string(),
            RouteEntry {
                cost: 2,
                next_hop: "C".to_string(),
            },
        );

        node.register_neighbor("B", 5);

        // The direct link is recorded, but the cheaper route survives
        assert_eq!(node.neighbors.get("B"), Some(&5));
        let route = node.route_to("B").unwrap();
        assert_eq!(route.cost, 2);
        assert_eq!(route.next_hop, "C");
    }

    #[test]
    fn test_unknown_destination_is_absent() {
        let node = Node::new("A");
        assert!(node.route_to("Z").is_none());
    }
}
