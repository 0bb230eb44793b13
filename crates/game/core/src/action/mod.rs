//! Action domain: player intents materialised into canonical transitions.
//!
//! - `movement`: the movement/collision resolver
//! - `dialogue`: advance/close/give/take on the open conversation
//!
//! Each action implements [`ActionTransition`] and is executed by the engine
//! through the three-phase pipeline `pre_validate → apply → post_validate`.
pub mod dialogue;
pub mod movement;

pub use dialogue::{AdvanceAction, CloseAction, DialogueError, GiveItemAction, TakeItemAction};
pub use movement::{CardinalDirection, MoveAction, MoveError, MoveOutcome};

use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
///
/// `pre_validate` checks preconditions against the state before mutation,
/// `apply` performs the mutation, and `post_validate` verifies invariants on
/// the state after mutation. The engine never calls `apply` when
/// `pre_validate` failed and never commits a state whose `post_validate`
/// failed.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level enum over every input the host can feed the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Advance(AdvanceAction),
    Close(CloseAction),
    Give(GiveItemAction),
    Take(TakeItemAction),
}

impl Action {
    /// Returns the snake_case name of the action, used for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Advance(_) => "advance",
            Action::Close(_) => "close",
            Action::Give(_) => "give_item",
            Action::Take(_) => "take_item",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<AdvanceAction> for Action {
    fn from(action: AdvanceAction) -> Self {
        Self::Advance(action)
    }
}

impl From<CloseAction> for Action {
    fn from(action: CloseAction) -> Self {
        Self::Close(action)
    }
}

impl From<GiveItemAction> for Action {
    fn from(action: GiveItemAction) -> Self {
        Self::Give(action)
    }
}

impl From<TakeItemAction> for Action {
    fn from(action: TakeItemAction) -> Self {
        Self::Take(action)
    }
}
