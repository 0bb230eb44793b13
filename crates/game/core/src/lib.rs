//! Deterministic game logic and data types for the tile exploration core.
//!
//! `tilevale-core` defines the canonical rules (world model, movement
//! resolver, dialogue state machine) and exposes pure APIs reused by the
//! content layer and the terminal client. All state mutation flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod engine;
pub mod state;

pub use action::{
    Action, ActionTransition, AdvanceAction, CardinalDirection, CloseAction, DialogueError,
    GiveItemAction, MoveAction, MoveError, MoveOutcome, TakeItemAction,
};
pub use engine::{
    ActionResult, ExecuteError, GameEngine, IgnoredReason, TransitionPhase, TransitionPhaseError,
};
pub use state::{
    ActiveDialogue, DialogueScript, EmptyScript, GameState, InitializationError, Inventory, Item,
    ItemId, MapError, NpcId, NpcState, PlayerState, Position, Tile, TileMap,
};
