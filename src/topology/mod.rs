//! Network topology module.
//!
//! This module contains the static topology model the simulator operates on:
//! named nodes, symmetric weighted links, and per-node routing tables.

pub mod network;
pub mod node;

// Re-export key types for easier access
pub use network::{Network, TopologyError};
pub use node::{Node, RouteEntry};
