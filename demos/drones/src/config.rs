//! TOML configuration for the drones demo.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use lp_core::{LpError, LpResult, PlannerConfig};

/// Which shortest-path algorithm to route with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterKind {
    #[default]
    Dijkstra,
    AStar,
}

/// Where and how to write results.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving `paths.csv` (created if missing).
    pub dir: PathBuf,

    /// Also print every path to stdout.
    pub print_paths: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("output/drones"), print_paths: false }
    }
}

/// Top-level demo configuration.  Every section is optional.
///
/// ```toml
/// router = "astar"
///
/// [planner]
/// grid_size = 101
/// seed = 7
///
/// [[planner.agents]]
/// start = [0, 0, 0]
/// goal = [100, 100, 100]
///
/// [output]
/// dir = "output/drones"
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub router:  RouterKind,
    pub planner: PlannerConfig,
    pub output:  OutputConfig,
}

impl DemoConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> LpResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LpResult<Self> {
        toml::from_str(content).map_err(|e| LpError::Parse(e.to_string()))
    }
}
