//! Data-driven scenario content and loaders.
//!
//! This crate houses the starting scenario and the RON loaders that turn
//! scenario files into validated [`GameState`](tilevale_core::GameState)
//! values. Content is consumed once at session start and never appears in
//! engine state afterwards.

pub mod loaders;
pub mod scenario;

pub use loaders::{LoadResult, ScenarioLoader};
pub use scenario::{ItemSpec, NpcSpec, PlayerSpec, ScenarioSpec};

use tilevale_core::GameState;

/// The built-in courtyard scenario shipped with the game.
const COURTYARD: &str = include_str!("../assets/courtyard.ron");

/// Deterministic factory for the fixed starting state: the 16x12 courtyard
/// map, the player at (2, 2), and the scripted NPC roster.
///
/// An error here means the embedded asset is broken, which the test suite
/// rules out; hosts typically just `?` it at startup.
pub fn starting_state() -> LoadResult<GameState> {
    ScenarioLoader::from_str(COURTYARD)
}
