use super::{DialogueScript, Inventory, NpcId, Position};

/// The controllable player character. Singleton per game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    pub inventory: Inventory,
}

impl PlayerState {
    pub fn new(position: Position, inventory: Inventory) -> Self {
        Self {
            position,
            inventory,
        }
    }
}

/// A scripted non-player character.
///
/// NPCs are stationary: `position` is fixed for the whole session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcState {
    pub id: NpcId,
    pub name: String,
    pub position: Position,
    pub inventory: Inventory,
    pub script: DialogueScript,
}

impl NpcState {
    pub fn new(
        id: impl Into<NpcId>,
        name: impl Into<String>,
        position: Position,
        inventory: Inventory,
        script: DialogueScript,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            inventory,
            script,
        }
    }
}
