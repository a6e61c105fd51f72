//! Distance-vector relaxation engine.
//!
//! Implements the Bellman-Ford-style update each node performs once per
//! round: for every neighbor, scan the neighbor's advertised table and adopt
//! any strictly cheaper route through that neighbor.
//!
//! Rounds are double-buffered: every node relaxes against a frozen snapshot
//! of all tables taken at the start of the round, so results are independent
//! of the order nodes are visited in. This is the synchronous-round model of
//! the protocol; a node never observes a neighbor's same-round updates.

use crate::topology::{Network, Node, RouteEntry};
use log::trace;
use std::collections::BTreeMap;

/// Frozen copy of every node's routing table, taken at the start of a round.
pub type TableSnapshot = BTreeMap<String, BTreeMap<String, RouteEntry>>;

/// Clone all current routing tables into a round snapshot.
pub fn snapshot_tables(network: &Network) -> TableSnapshot {
    network
        .nodes()
        .map(|node| (node.name.clone(), node.routing_table.clone()))
        .collect()
}

/// Relax one node against the round snapshot.
///
/// For every neighbor `M` of the node (direct link cost `c`) and every
/// destination `D` in `M`'s snapshot table at cost `mc`, the candidate cost
/// is `c + mc`. The candidate is adopted, with `M` as next hop, iff `D` is
/// unknown or the candidate is strictly cheaper than the current entry.
/// Equal-cost candidates never displace the incumbent, so the first route
/// discovered at a given cost survives.
///
/// Returns the number of table entries added or improved.
pub fn relax_node(node: &mut Node, snapshot: &TableSnapshot) -> usize {
    let Node {
        name,
        neighbors,
        routing_table,
    } = node;

    let mut changed = 0;
    for (neighbor, &link_cost) in neighbors.iter() {
        let Some(neighbor_table) = snapshot.get(neighbor) else {
            continue;
        };
        for (destination, advertised) in neighbor_table {
            // Saturating add: costs only ever shrink, but a pathological
            // scenario must not wrap around into a bogus cheap route
            let candidate = link_cost.saturating_add(advertised.cost);
            let improves = match routing_table.get(destination) {
                Some(current) => candidate < current.cost,
                None => true,
            };
            if improves {
                trace!(
                    "{}: route to {} via {} at cost {}",
                    name,
                    destination,
                    neighbor,
                    candidate
                );
                routing_table.insert(
                    destination.clone(),
                    RouteEntry {
                        cost: candidate,
                        next_hop: neighbor.clone(),
                    },
                );
                changed += 1;
            }
        }
    }
    changed
}

/// Run one full synchronous round over the whole network.
///
/// Takes the snapshot, then relaxes every node in insertion order. Returns
/// the total number of entries added or improved across all nodes; zero
/// means the tables have reached a fixed point.
pub fn run_round(network: &mut Network) -> usize {
    let snapshot = snapshot_tables(network);
    let order: Vec<String> = network.node_names().to_vec();

    let mut changed = 0;
    for name in &order {
        if let Some(node) = network.node_mut(name) {
            changed += relax_node(node, &snapshot);
        }
    }
    changed
}
