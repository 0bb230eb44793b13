//! Authoritative game state representation.
//!
//! This module owns the root aggregate and the construction-time invariant
//! checks. Host layers clone or query this state but mutate it exclusively
//! through the engine.
pub mod types;

use std::collections::BTreeSet;

pub use types::{
    ActiveDialogue, DialogueScript, EmptyScript, Inventory, Item, ItemId, MapError, NpcId,
    NpcState, PlayerState, Position, Tile, TileMap,
};

/// Faults rejected by [`GameState::new`].
///
/// These can only arise from the content that seeds a session; the transition
/// functions rely on a validated state and never re-check them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("player start {0} is not a passable tile")]
    PlayerStartBlocked(Position),

    #[error("player start {position} is occupied by npc {npc}")]
    PlayerStartOccupied { npc: NpcId, position: Position },

    #[error("npc {id} is placed on impassable tile {position}")]
    NpcStartBlocked { id: NpcId, position: Position },

    #[error("duplicate npc id {0}")]
    DuplicateNpcId(NpcId),

    #[error("npcs {first} and {second} share tile {position}")]
    NpcOverlap {
        first: NpcId,
        second: NpcId,
        position: Position,
    },

    #[error("item id {0} appears in more than one inventory")]
    DuplicateItemId(ItemId),
}

/// Canonical snapshot of the game state.
///
/// Treated as an immutable value: every transition produces a new snapshot
/// and the previous one is discarded. There is no history and no undo.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Static tile grid; read-only after construction.
    pub map: TileMap,
    pub player: PlayerState,
    pub npcs: Vec<NpcState>,
    /// `Some` exactly while the state machine is in the `Dialogue` state.
    pub active_dialogue: Option<ActiveDialogue>,
}

impl GameState {
    /// Creates a fresh exploration-state session after validating the
    /// construction-time invariants: unique NPC ids, one entity per tile,
    /// everybody on passable ground, item ids unique across inventories.
    pub fn new(
        map: TileMap,
        player: PlayerState,
        npcs: Vec<NpcState>,
    ) -> Result<Self, InitializationError> {
        let passable =
            |position: Position| map.tile(position).is_some_and(Tile::is_passable);

        if !passable(player.position) {
            return Err(InitializationError::PlayerStartBlocked(player.position));
        }

        let mut ids = BTreeSet::new();
        for (index, npc) in npcs.iter().enumerate() {
            if !ids.insert(&npc.id) {
                return Err(InitializationError::DuplicateNpcId(npc.id.clone()));
            }
            if !passable(npc.position) {
                return Err(InitializationError::NpcStartBlocked {
                    id: npc.id.clone(),
                    position: npc.position,
                });
            }
            if npc.position == player.position {
                return Err(InitializationError::PlayerStartOccupied {
                    npc: npc.id.clone(),
                    position: npc.position,
                });
            }
            if let Some(other) = npcs[..index].iter().find(|o| o.position == npc.position) {
                return Err(InitializationError::NpcOverlap {
                    first: other.id.clone(),
                    second: npc.id.clone(),
                    position: npc.position,
                });
            }
        }

        let state = Self {
            map,
            player,
            npcs,
            active_dialogue: None,
        };
        if let Some(item) = state.duplicate_item_id() {
            return Err(InitializationError::DuplicateItemId(item));
        }

        Ok(state)
    }

    pub fn npc(&self, id: &NpcId) -> Option<&NpcState> {
        self.npcs.iter().find(|npc| npc.id == *id)
    }

    pub fn npc_mut(&mut self, id: &NpcId) -> Option<&mut NpcState> {
        self.npcs.iter_mut().find(|npc| npc.id == *id)
    }

    pub fn npc_at(&self, position: Position) -> Option<&NpcState> {
        self.npcs.iter().find(|npc| npc.position == position)
    }

    /// Whether the player could stand on `position`: in bounds, passable,
    /// and free of NPCs.
    pub fn can_enter(&self, position: Position) -> bool {
        self.map.tile(position).is_some_and(Tile::is_passable)
            && self.npc_at(position).is_none()
    }

    /// Returns an item id held by more than one inventory, if any.
    ///
    /// Transfers are zero-sum, so a validated state stays free of duplicates;
    /// the transfer actions re-check this in `post_validate`.
    pub(crate) fn duplicate_item_id(&self) -> Option<ItemId> {
        let mut seen = BTreeSet::new();
        let inventories =
            std::iter::once(&self.player.inventory).chain(self.npcs.iter().map(|n| &n.inventory));
        for inventory in inventories {
            for item in inventory.items() {
                if !seen.insert(&item.id) {
                    return Some(item.id.clone());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> TileMap {
        let rows = (0..6)
            .map(|y| {
                (0..8)
                    .map(|x| {
                        if x == 0 || y == 0 || x == 7 || y == 5 {
                            Tile::Wall
                        } else {
                            Tile::Floor
                        }
                    })
                    .collect()
            })
            .collect();
        TileMap::from_rows(rows).unwrap()
    }

    fn script() -> DialogueScript {
        DialogueScript::new(vec!["Hello.".to_string()]).unwrap()
    }

    fn npc(id: &str, position: Position, items: Vec<Item>) -> NpcState {
        NpcState::new(id, id, position, Inventory::new(items), script())
    }

    fn player_at(position: Position) -> PlayerState {
        PlayerState::new(position, Inventory::empty())
    }

    #[test]
    fn validated_state_starts_in_exploration() {
        let state = GameState::new(
            room(),
            player_at(Position::new(1, 1)),
            vec![npc("smith", Position::new(3, 3), Vec::new())],
        )
        .unwrap();

        assert_eq!(state.active_dialogue, None);
        assert!(state.can_enter(Position::new(2, 2)));
        assert!(!state.can_enter(Position::new(3, 3)));
        assert!(!state.can_enter(Position::new(0, 3)));
    }

    #[test]
    fn rejects_player_on_wall() {
        let result = GameState::new(room(), player_at(Position::new(0, 0)), Vec::new());

        assert_eq!(
            result,
            Err(InitializationError::PlayerStartBlocked(Position::new(0, 0)))
        );
    }

    #[test]
    fn rejects_duplicate_npc_ids() {
        let result = GameState::new(
            room(),
            player_at(Position::new(1, 1)),
            vec![
                npc("smith", Position::new(3, 3), Vec::new()),
                npc("smith", Position::new(4, 4), Vec::new()),
            ],
        );

        assert_eq!(
            result,
            Err(InitializationError::DuplicateNpcId(NpcId::from("smith")))
        );
    }

    #[test]
    fn rejects_npcs_sharing_a_tile() {
        let result = GameState::new(
            room(),
            player_at(Position::new(1, 1)),
            vec![
                npc("smith", Position::new(3, 3), Vec::new()),
                npc("baker", Position::new(3, 3), Vec::new()),
            ],
        );

        assert_eq!(
            result,
            Err(InitializationError::NpcOverlap {
                first: NpcId::from("smith"),
                second: NpcId::from("baker"),
                position: Position::new(3, 3),
            })
        );
    }

    #[test]
    fn rejects_npc_on_player_start() {
        let result = GameState::new(
            room(),
            player_at(Position::new(1, 1)),
            vec![npc("smith", Position::new(1, 1), Vec::new())],
        );

        assert_eq!(
            result,
            Err(InitializationError::PlayerStartOccupied {
                npc: NpcId::from("smith"),
                position: Position::new(1, 1),
            })
        );
    }

    #[test]
    fn rejects_item_id_in_two_inventories() {
        let coin = || Item::new("coin", "Coin", "Round and shiny.");
        let result = GameState::new(
            room(),
            PlayerState::new(Position::new(1, 1), Inventory::new(vec![coin()])),
            vec![npc("smith", Position::new(3, 3), vec![coin()])],
        );

        assert_eq!(
            result,
            Err(InitializationError::DuplicateItemId(ItemId::from("coin")))
        );
    }
}
