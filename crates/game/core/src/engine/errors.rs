//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, AdvanceAction, CloseAction, GiveItemAction, MoveAction, TakeItemAction,
};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
///
/// Every rejection reachable from a validated initial state is folded into
/// an `Ignored` result instead; what remains here are invariant desyncs that
/// indicate a bug, not a gameplay condition. The engine never commits a
/// state that produced one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("advance action failed: {0}")]
    Advance(TransitionPhaseError<<AdvanceAction as ActionTransition>::Error>),

    #[error("close action failed: {0}")]
    Close(TransitionPhaseError<<CloseAction as ActionTransition>::Error>),

    #[error("give item action failed: {0}")]
    Give(TransitionPhaseError<<GiveItemAction as ActionTransition>::Error>),

    #[error("take item action failed: {0}")]
    Take(TransitionPhaseError<<TakeItemAction as ActionTransition>::Error>),
}
