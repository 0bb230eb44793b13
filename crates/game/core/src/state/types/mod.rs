//! Data model for the game state: positions, tiles, items, actors, dialogue.
mod actor;
mod common;
mod dialogue;
mod item;
mod world;

pub use actor::{NpcState, PlayerState};
pub use common::{ItemId, NpcId, Position};
pub use dialogue::{ActiveDialogue, DialogueScript, EmptyScript};
pub use item::{Inventory, Item};
pub use world::{MapError, Tile, TileMap};
