//! Scenario configuration structures and YAML parsing.
//!
//! A scenario file declares the node names, the weighted links between them,
//! and how many rounds to run. Costs are accepted as signed integers so a
//! negative cost in a hand-written file is rejected with a clear validation
//! error instead of a YAML type error.

use crate::topology::Network;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// A single undirected link in a scenario file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    pub a: String,
    pub b: String,
    pub cost: i64,
}

/// A complete simulation scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Optional scenario label, carried into reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rounds to run; defaults to node count minus one when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    pub nodes: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

/// Scenario validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Scenario must declare at least one node")]
    NoNodes,

    #[error("Duplicate node name: {name}")]
    DuplicateNode { name: String },

    #[error("Link {a} <-> {b} references undeclared node: {name}")]
    UnknownEndpoint { a: String, b: String, name: String },

    #[error("Link endpoints must differ: {name}")]
    SelfLink { name: String },

    #[error("Link {a} <-> {b} has negative cost {cost}")]
    NegativeCost { a: String, b: String, cost: i64 },

    #[error("iterations must be at least 1")]
    ZeroIterations,
}

impl Scenario {
    /// Validate the scenario before building a network from it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nodes.is_empty() {
            return Err(ValidationError::NoNodes);
        }

        let mut seen = HashSet::new();
        for name in &self.nodes {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateNode { name: name.clone() });
            }
        }

        for link in &self.links {
            if link.a == link.b {
                return Err(ValidationError::SelfLink {
                    name: link.a.clone(),
                });
            }
            for endpoint in [&link.a, &link.b] {
                if !seen.contains(endpoint.as_str()) {
                    return Err(ValidationError::UnknownEndpoint {
                        a: link.a.clone(),
                        b: link.b.clone(),
                        name: endpoint.clone(),
                    });
                }
            }
            // The relaxation algorithm is only correct for non-negative costs
            if link.cost < 0 {
                return Err(ValidationError::NegativeCost {
                    a: link.a.clone(),
                    b: link.b.clone(),
                    cost: link.cost,
                });
            }
        }

        if self.iterations == Some(0) {
            return Err(ValidationError::ZeroIterations);
        }

        Ok(())
    }

    /// Rounds to run: the declared count, or the Bellman-Ford bound of
    /// node count minus one when the scenario leaves it out.
    pub fn effective_iterations(&self) -> usize {
        self.iterations
            .unwrap_or_else(|| self.nodes.len().saturating_sub(1).max(1))
    }

    /// Build a network from a validated scenario.
    pub fn build_network(&self) -> Result<Network, ValidationError> {
        self.validate()?;

        let mut network = Network::new();
        for name in &self.nodes {
            network.add_node(name);
        }
        for link in &self.links {
            // Endpoints and costs were checked in validate()
            network
                .add_link(&link.a, &link.b, link.cost as u64)
                .map_err(|_| ValidationError::UnknownEndpoint {
                    a: link.a.clone(),
                    b: link.b.clone(),
                    name: link.a.clone(),
                })?;
        }
        Ok(network)
    }

    /// The built-in five-node example topology, used when no scenario file
    /// is supplied on the command line.
    pub fn example() -> Self {
        let link = |a: &str, b: &str, cost: i64| LinkConfig {
            a: a.to_string(),
            b: b.to_string(),
            cost,
        };
        Self {
            name: Some("example".to_string()),
            iterations: Some(10),
            nodes: ["A", "B", "C", "D", "E"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            links: vec![
                link("A", "B", 1),
                link("A", "C", 4),
                link("B", "C", 2),
                link("C", "D", 1),
                link("B", "E", 6),
                link("D", "E", 3),
            ],
        }
    }
}

/// Load and validate a scenario from a YAML file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    info!("Loading scenario from: {:?}", path);

    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open scenario file '{}'", path.display()))?;
    let scenario: Scenario = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse scenario file '{}'", path.display()))?;

    scenario.validate()?;

    info!(
        "Loaded scenario '{}' with {} node(s) and {} link(s)",
        scenario.name.as_deref().unwrap_or("unnamed"),
        scenario.nodes.len(),
        scenario.links.len()
    );
    Ok(scenario)
}
