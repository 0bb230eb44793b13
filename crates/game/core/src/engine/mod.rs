//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! state mutation flows through [`GameEngine::execute`]: the engine drives
//! the three-phase transition pipeline on a scratch copy of the state and
//! commits only complete, post-validated snapshots, so a rejected or failed
//! action leaves the caller's state untouched.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::Action;
use crate::state::{GameState, ItemId, NpcId, Position};

/// Why an input was accepted but had no effect.
///
/// Rejected input and stale references are results, never errors; normal
/// gameplay cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IgnoredReason {
    MovementDuringDialogue,
    OutOfBounds,
    BlockedByWall,
    NotInDialogue,
    AtLastLine,
    NoSuchItem,
}

impl IgnoredReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoredReason::MovementDuringDialogue => "movement ignored during dialogue",
            IgnoredReason::OutOfBounds => "destination out of bounds",
            IgnoredReason::BlockedByWall => "blocked by a wall",
            IgnoredReason::NotInDialogue => "no dialogue is open",
            IgnoredReason::AtLastLine => "already at the last line",
            IgnoredReason::NoSuchItem => "no such item",
        }
    }
}

/// Complete outcome of executing one action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// The player stepped onto `destination`.
    Moved { destination: Position },
    /// A blocked step turned into an interaction; dialogue opened at line 0.
    DialogueOpened { npc: NpcId },
    /// The conversation advanced to `line`.
    DialogueAdvanced { line: usize },
    /// The conversation ended; back to exploration.
    DialogueClosed,
    ItemGiven { item: ItemId },
    ItemTaken { item: ItemId },
    /// The input was understood but deliberately had no effect.
    Ignored(IgnoredReason),
}

/// Game engine that executes actions against a state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through the transition pipeline.
    ///
    /// Total for every state reachable from a validated construction: all
    /// gameplay "failures" come back as [`ActionResult::Ignored`]. An
    /// `ExecuteError` signals a broken invariant and leaves the state
    /// exactly as it was.
    pub fn execute(&mut self, action: &Action) -> Result<ActionResult, ExecuteError> {
        let mut next = self.state.clone();
        let result = transition::execute_transition(action, &mut next)?;

        if !matches!(result, ActionResult::Ignored(_)) {
            *self.state = next;
        }

        Ok(result)
    }
}
