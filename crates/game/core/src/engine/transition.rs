//! Action transition dispatch and rejection folding.

use crate::action::{Action, ActionTransition, DialogueError, MoveError, MoveOutcome};
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
use super::{ActionResult, IgnoredReason};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return the result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Turns a pre-validate movement rejection into an ignored result; anything
/// else is a genuine pipeline failure.
fn fold_move(error: TransitionPhaseError<MoveError>) -> Result<ActionResult, ExecuteError> {
    if error.phase == TransitionPhase::PreValidate {
        let reason = match &error.error {
            MoveError::DialogueActive => Some(IgnoredReason::MovementDuringDialogue),
            MoveError::OutOfBounds { .. } => Some(IgnoredReason::OutOfBounds),
            MoveError::Blocked { .. } => Some(IgnoredReason::BlockedByWall),
            _ => None,
        };
        if let Some(reason) = reason {
            return Ok(ActionResult::Ignored(reason));
        }
    }
    Err(ExecuteError::Move(error))
}

/// Same folding for the dialogue actions; `wrap` picks the right
/// [`ExecuteError`] variant for the desync path.
fn fold_dialogue(
    error: TransitionPhaseError<DialogueError>,
    wrap: fn(TransitionPhaseError<DialogueError>) -> ExecuteError,
) -> Result<ActionResult, ExecuteError> {
    if error.phase == TransitionPhase::PreValidate {
        let reason = match &error.error {
            DialogueError::NotInDialogue => Some(IgnoredReason::NotInDialogue),
            DialogueError::AtLastLine => Some(IgnoredReason::AtLastLine),
            DialogueError::NoSuchItem(_) => Some(IgnoredReason::NoSuchItem),
            _ => None,
        };
        if let Some(reason) = reason {
            return Ok(ActionResult::Ignored(reason));
        }
    }
    Err(wrap(error))
}

/// Routes an action to its transition and maps the outcome onto
/// [`ActionResult`]. Used by `GameEngine::execute`.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Move(transition) => match drive_transition(transition, state) {
            Ok(MoveOutcome::Moved { destination }) => Ok(ActionResult::Moved { destination }),
            Ok(MoveOutcome::OpenedDialogue { npc }) => Ok(ActionResult::DialogueOpened { npc }),
            Err(error) => fold_move(error),
        },
        Action::Advance(transition) => match drive_transition(transition, state) {
            Ok(line) => Ok(ActionResult::DialogueAdvanced { line }),
            Err(error) => fold_dialogue(error, ExecuteError::Advance),
        },
        Action::Close(transition) => match drive_transition(transition, state) {
            Ok(()) => Ok(ActionResult::DialogueClosed),
            Err(error) => fold_dialogue(error, ExecuteError::Close),
        },
        Action::Give(transition) => match drive_transition(transition, state) {
            Ok(()) => Ok(ActionResult::ItemGiven {
                item: transition.item.clone(),
            }),
            Err(error) => fold_dialogue(error, ExecuteError::Give),
        },
        Action::Take(transition) => match drive_transition(transition, state) {
            Ok(()) => Ok(ActionResult::ItemTaken {
                item: transition.item.clone(),
            }),
            Err(error) => fold_dialogue(error, ExecuteError::Take),
        },
    }
}
