//! Simulation driver.
//!
//! Owns the network for the duration of a run, executes synchronous rounds,
//! and projects final routing tables for reporting. The driver itself has no
//! convergence logic beyond an optional fixed-point early exit; the iteration
//! count is the contract.

use crate::routing;
use crate::topology::Network;
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-round change count, for logging and convergence inspection.
#[derive(Debug, Clone, Serialize)]
pub struct RoundStats {
    /// 1-based round number
    pub round: usize,
    /// Routing-table entries added or improved during this round
    pub routes_changed: usize,
}

/// One row of a reported routing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub destination: String,
    pub cost: u64,
    pub next_hop: String,
}

/// Drives rounds over a network and reports the resulting tables.
#[derive(Debug)]
pub struct Simulation {
    network: Network,
    rounds_run: usize,
}

impl Simulation {
    /// Wrap a built network, ready to run.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            rounds_run: 0,
        }
    }

    /// Access the underlying network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Total rounds executed so far.
    pub fn rounds_run(&self) -> usize {
        self.rounds_run
    }

    /// Execute exactly `iterations` rounds.
    ///
    /// For a network of V nodes any `iterations >= V - 1` reaches the
    /// Bellman-Ford fixed point; extra rounds are harmless no-ops.
    pub fn run(&mut self, iterations: usize) -> Vec<RoundStats> {
        info!(
            "Running {} round(s) over {} node(s)",
            iterations,
            self.network.len()
        );

        let mut stats = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            stats.push(self.step());
        }
        stats
    }

    /// Run until a round produces no changes, bounded by `max_rounds`.
    ///
    /// Produces the same final tables as `run(max_rounds)`; the only
    /// difference is skipping trailing no-op rounds. The terminating
    /// zero-change round is included in the returned stats.
    pub fn run_to_convergence(&mut self, max_rounds: usize) -> Vec<RoundStats> {
        let mut stats = Vec::new();
        for _ in 0..max_rounds {
            let round = self.step();
            let converged = round.routes_changed == 0;
            stats.push(round);
            if converged {
                info!("Converged after {} round(s)", self.rounds_run);
                break;
            }
        }
        stats
    }

    fn step(&mut self) -> RoundStats {
        let routes_changed = routing::run_round(&mut self.network);
        self.rounds_run += 1;
        debug!(
            "Round {}: {} route(s) added or improved",
            self.rounds_run, routes_changed
        );
        RoundStats {
            round: self.rounds_run,
            routes_changed,
        }
    }

    /// The routing table of one node as (destination, cost, next hop) rows,
    /// sorted by destination. `None` if the node does not exist.
    pub fn routing_table(&self, node_name: &str) -> Option<Vec<RouteRow>> {
        let node = self.network.node(node_name)?;
        Some(
            node.routing_table
                .iter()
                .map(|(destination, entry)| RouteRow {
                    destination: destination.clone(),
                    cost: entry.cost,
                    next_hop: entry.next_hop.clone(),
                })
                .collect(),
        )
    }

    /// All routing tables, keyed by node name.
    pub fn all_routing_tables(&self) -> BTreeMap<String, Vec<RouteRow>> {
        self.network
            .nodes()
            .filter_map(|node| {
                self.routing_table(&node.name)
                    .map(|rows| (node.name.clone(), rows))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The reference five-node topology: A-B=1, A-C=4, B-C=2, C-D=1, B-E=6,
    /// D-E=3.
    fn reference_network() -> Network {
        let mut network = Network::new();
        for name in ["A", "B", "C", "D", "E"] {
            network.add_node(name);
        }
        for (a, b, cost) in [
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("C", "D", 1),
            ("B", "E", 6),
            ("D", "E", 3),
        ] {
            network.add_link(a, b, cost).unwrap();
        }
        network
    }

    #[test]
    fn test_reference_scenario_final_table_for_a() {
        let mut sim = Simulation::new(reference_network());
        sim.run(10);

        let rows = sim.routing_table("A").unwrap();
        let expected: Vec<(&str, u64, &str)> = vec![
            ("A", 0, "A"),
            ("B", 1, "B"),
            ("C", 3, "B"),
            ("D", 4, "B"),
            ("E", 7, "B"),
        ];
        let actual: Vec<(&str, u64, &str)> = rows
            .iter()
            .map(|r| (r.destination.as_str(), r.cost, r.next_hop.as_str()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_costs_are_monotonically_non_increasing() {
        let mut sim = Simulation::new(reference_network());

        let mut previous = sim.all_routing_tables();
        for _ in 0..6 {
            sim.run(1);
            let current = sim.all_routing_tables();
            for (node, rows) in &previous {
                for row in rows {
                    let now = current[node]
                        .iter()
                        .find(|r| r.destination == row.destination)
                        .expect("known destinations never disappear");
                    assert!(now.cost <= row.cost);
                }
            }
            previous = current;
        }
    }

    #[test]
    fn test_fixed_point_within_node_count_minus_one_rounds() {
        let mut sim = Simulation::new(reference_network());
        let rounds = sim.network().len() - 1;
        sim.run(rounds);

        let settled = sim.all_routing_tables();
        sim.run(3);
        assert_eq!(sim.all_routing_tables(), settled);
    }

    #[test]
    fn test_run_to_convergence_matches_fixed_iterations() {
        let mut fixed = Simulation::new(reference_network());
        fixed.run(10);

        let mut early = Simulation::new(reference_network());
        let stats = early.run_to_convergence(10);

        assert_eq!(early.all_routing_tables(), fixed.all_routing_tables());
        assert!(early.rounds_run() <= 10);
        assert_eq!(stats.last().unwrap().routes_changed, 0);
    }

    #[test]
    fn test_unreachable_destination_absent() {
        // Two disconnected components: {A, B} and {X, Y}
        let mut network = Network::new();
        for name in ["A", "B", "X", "Y"] {
            network.add_node(name);
        }
        network.add_link("A", "B", 1).unwrap();
        network.add_link("X", "Y", 2).unwrap();

        let mut sim = Simulation::new(network);
        sim.run(5);

        let rows = sim.routing_table("A").unwrap();
        let destinations: Vec<&str> = rows.iter().map(|r| r.destination.as_str()).collect();
        assert_eq!(destinations, vec!["A", "B"]);
    }

    #[test]
    fn test_routing_table_for_unknown_node() {
        let sim = Simulation::new(reference_network());
        assert!(sim.routing_table("Z").is_none());
    }
}
