//! Scenario loader.
//!
//! Parses a scenario RON file and builds the validated initial game state.

use std::path::Path;

use tilevale_core::GameState;

use crate::loaders::{read_file, LoadResult};
use crate::scenario::ScenarioSpec;

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file and build its starting state.
    pub fn load(path: &Path) -> LoadResult<GameState> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    /// Build the starting state from scenario RON source.
    pub fn from_str(source: &str) -> LoadResult<GameState> {
        Self::parse(source)?.build()
    }

    /// Parse scenario RON without building the state.
    pub fn parse(source: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
