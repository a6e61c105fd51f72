//! Routing-table report rendering.
//!
//! Produces the human-readable per-node table listing and a JSON artifact
//! with the same content for downstream tooling. Formatting is presentation
//! only; the (destination, cost, next hop) rows are the contract.

use crate::simulation::{RouteRow, Simulation};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Serializable snapshot of every node's final routing table
#[derive(Debug, Serialize)]
pub struct TableReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub rounds_run: usize,
    pub tables: BTreeMap<String, Vec<RouteRow>>,
}

impl TableReport {
    /// Capture the current state of a simulation.
    pub fn from_simulation(sim: &Simulation, scenario: Option<String>) -> Self {
        Self {
            scenario,
            rounds_run: sim.rounds_run(),
            tables: sim.all_routing_tables(),
        }
    }
}

/// Render every node's routing table in the classic textual format:
/// a header line per node, one line per destination sorted by destination,
/// and a blank separator line.
pub fn render_tables(sim: &Simulation) -> String {
    let mut out = String::new();
    for node in sim.network().nodes() {
        let _ = writeln!(out, "Routing table for {}:", node.name);
        for (destination, entry) in &node.routing_table {
            let _ = writeln!(
                out,
                "  To {}: Cost = {}; Next hop = {}",
                destination, entry.cost, entry.next_hop
            );
        }
        out.push('\n');
    }
    out
}

/// Write the JSON report artifact.
pub fn write_json(report: &TableReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)
        .wrap_err_with(|| format!("Failed to write report '{}'", path.display()))?;
    info!("Wrote JSON report: {:?}", path);
    Ok(())
}
