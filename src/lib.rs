//! # DvrSim - Distance Vector Routing protocol simulator
//!
//! This library simulates the Distance Vector Routing (DVR) protocol over a
//! static, undirected, weighted graph of named nodes. Each node starts
//! knowing only itself and its direct neighbors, then iteratively exchanges
//! routing tables with its neighbors until every table holds the shortest
//! known path to every reachable destination (a Bellman-Ford relaxation
//! scheme). There is no real network transport; the point is to watch the
//! convergence happen.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `topology`: nodes, symmetric weighted links, and per-node routing tables
//! - `routing`: the per-node relaxation step and the synchronous round loop
//! - `simulation`: the driver that runs rounds and projects final tables
//! - `config`: YAML scenario files, validation, and the built-in example
//! - `report`: textual and JSON rendering of the final routing tables
//!
//! ## Round semantics
//!
//! Rounds are double-buffered: at the start of each round every routing
//! table is snapshotted, and every node relaxes against that frozen
//! snapshot. Results are therefore deterministic and independent of the
//! order nodes are visited in. For a network of V nodes the tables reach
//! their fixed point within V - 1 rounds.
//!
//! ## Example Usage
//!
//! ```rust
//! use dvrsim::config::Scenario;
//! use dvrsim::simulation::Simulation;
//!
//! let scenario = Scenario::example();
//! let mut sim = Simulation::new(scenario.build_network()?);
//! sim.run(scenario.effective_iterations());
//!
//! let table = sim.routing_table("A").unwrap();
//! assert_eq!(table.iter().find(|r| r.destination == "D").unwrap().cost, 4);
//! # Ok::<(), dvrsim::config::ValidationError>(())
//! ```

pub mod config;
pub mod report;
pub mod routing;
pub mod simulation;
pub mod topology;
