//! Key-event mapping.
//!
//! The host owns the raw-input boundary: only the four directional symbols
//! (and dialogue commands) ever reach the engine. While the dialogue modal
//! is open the arrows drive the item selection instead of movement; the
//! engine would ignore movement anyway, but there is no reason to send it.

use crossterm::event::{KeyCode, KeyEvent};
use tilevale_core::CardinalDirection;

/// Inputs recognised while exploring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorationInput {
    Move(CardinalDirection),
    DumpState,
    Quit,
}

/// Inputs recognised while the dialogue modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogueInput {
    NextLine,
    CloseDialogue,
    SelectPrevious,
    SelectNext,
    SwitchColumn,
    Transfer,
    DumpState,
    Quit,
}

pub fn exploration_input(key: KeyEvent) -> Option<ExplorationInput> {
    match key.code {
        KeyCode::Up => Some(ExplorationInput::Move(CardinalDirection::Up)),
        KeyCode::Down => Some(ExplorationInput::Move(CardinalDirection::Down)),
        KeyCode::Left => Some(ExplorationInput::Move(CardinalDirection::Left)),
        KeyCode::Right => Some(ExplorationInput::Move(CardinalDirection::Right)),
        KeyCode::Char('d') => Some(ExplorationInput::DumpState),
        KeyCode::Char('q') | KeyCode::Esc => Some(ExplorationInput::Quit),
        _ => None,
    }
}

pub fn dialogue_input(key: KeyEvent) -> Option<DialogueInput> {
    match key.code {
        KeyCode::Char(' ') => Some(DialogueInput::NextLine),
        KeyCode::Esc => Some(DialogueInput::CloseDialogue),
        KeyCode::Up => Some(DialogueInput::SelectPrevious),
        KeyCode::Down => Some(DialogueInput::SelectNext),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(DialogueInput::SwitchColumn),
        KeyCode::Enter => Some(DialogueInput::Transfer),
        KeyCode::Char('d') => Some(DialogueInput::DumpState),
        KeyCode::Char('q') => Some(DialogueInput::Quit),
        _ => None,
    }
}
