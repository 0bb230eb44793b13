//! Dialogue state machine transitions: advance, close, item exchange.
//!
//! All four actions operate on the NPC named by `active_dialogue`; the host
//! never supplies an NPC id directly.
use crate::action::ActionTransition;
use crate::state::{GameState, ItemId, NpcId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialogueError {
    #[error("no dialogue is active")]
    NotInDialogue,

    #[error("already at the last line of the script")]
    AtLastLine,

    #[error("no item {0} to transfer")]
    NoSuchItem(ItemId),

    #[error("active dialogue references unknown npc {0}")]
    UnknownNpc(NpcId),

    #[error("line {line} is outside the script of npc {npc}")]
    LineOutOfRange { npc: NpcId, line: usize },

    #[error("item id {0} appears in more than one inventory")]
    DuplicateItem(ItemId),
}

fn active_npc(state: &GameState) -> Result<&NpcId, DialogueError> {
    state
        .active_dialogue
        .as_ref()
        .map(|dialogue| &dialogue.npc)
        .ok_or(DialogueError::NotInDialogue)
}

/// Advances the dialogue to its next line.
///
/// At the terminal line this is rejected and the engine turns it into a
/// no-op: the conversation stays on the last line until closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceAction;

impl ActionTransition for AdvanceAction {
    type Error = DialogueError;
    type Result = usize;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let dialogue = state
            .active_dialogue
            .as_ref()
            .ok_or(DialogueError::NotInDialogue)?;
        let npc = state
            .npc(&dialogue.npc)
            .ok_or_else(|| DialogueError::UnknownNpc(dialogue.npc.clone()))?;

        if npc.script.is_last(dialogue.line) {
            return Err(DialogueError::AtLastLine);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let dialogue = state
            .active_dialogue
            .as_mut()
            .ok_or(DialogueError::NotInDialogue)?;
        dialogue.line += 1;
        Ok(dialogue.line)
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let Some(dialogue) = &state.active_dialogue else {
            return Ok(());
        };
        let npc = state
            .npc(&dialogue.npc)
            .ok_or_else(|| DialogueError::UnknownNpc(dialogue.npc.clone()))?;
        if dialogue.line >= npc.script.len() {
            return Err(DialogueError::LineOutOfRange {
                npc: dialogue.npc.clone(),
                line: dialogue.line,
            });
        }
        Ok(())
    }
}

/// Closes the dialogue and returns to exploration.
///
/// Always legal while a dialogue is open; the line index is discarded, so
/// the next interaction with the same NPC starts over at line 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CloseAction;

impl ActionTransition for CloseAction {
    type Error = DialogueError;
    type Result = ();

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        active_npc(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        state.active_dialogue = None;
        Ok(())
    }
}

/// Moves one item from the player's inventory to the dialogue partner's.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GiveItemAction {
    pub item: ItemId,
}

impl GiveItemAction {
    pub fn new(item: impl Into<ItemId>) -> Self {
        Self { item: item.into() }
    }
}

impl ActionTransition for GiveItemAction {
    type Error = DialogueError;
    type Result = ();

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let npc_id = active_npc(state)?;
        state
            .npc(npc_id)
            .ok_or_else(|| DialogueError::UnknownNpc(npc_id.clone()))?;

        if !state.player.inventory.contains(&self.item) {
            return Err(DialogueError::NoSuchItem(self.item.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let npc_id = active_npc(state)?.clone();
        let item = state
            .player
            .inventory
            .remove(&self.item)
            .ok_or_else(|| DialogueError::NoSuchItem(self.item.clone()))?;
        state
            .npc_mut(&npc_id)
            .ok_or_else(|| DialogueError::UnknownNpc(npc_id.clone()))?
            .inventory
            .push(item);
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        match state.duplicate_item_id() {
            Some(item) => Err(DialogueError::DuplicateItem(item)),
            None => Ok(()),
        }
    }
}

/// Moves one item from the dialogue partner's inventory to the player's.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeItemAction {
    pub item: ItemId,
}

impl TakeItemAction {
    pub fn new(item: impl Into<ItemId>) -> Self {
        Self { item: item.into() }
    }
}

impl ActionTransition for TakeItemAction {
    type Error = DialogueError;
    type Result = ();

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let npc_id = active_npc(state)?;
        let npc = state
            .npc(npc_id)
            .ok_or_else(|| DialogueError::UnknownNpc(npc_id.clone()))?;

        if !npc.inventory.contains(&self.item) {
            return Err(DialogueError::NoSuchItem(self.item.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        let npc_id = active_npc(state)?.clone();
        let item = state
            .npc_mut(&npc_id)
            .ok_or_else(|| DialogueError::UnknownNpc(npc_id.clone()))?
            .inventory
            .remove(&self.item)
            .ok_or_else(|| DialogueError::NoSuchItem(self.item.clone()))?;
        state.player.inventory.push(item);
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        match state.duplicate_item_id() {
            Some(item) => Err(DialogueError::DuplicateItem(item)),
            None => Ok(()),
        }
    }
}
