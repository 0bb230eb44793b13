//! Scenario data format and the factory that turns it into a [`GameState`].
//!
//! A scenario file describes the whole session seed: the map drawn as rows
//! of glyphs, an item catalog, and the player/NPC rosters referencing items
//! by id. Building resolves every reference against the catalog and then
//! defers to `GameState::new`, so an invalid configuration is rejected here
//! and never reaches the engine.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use tilevale_core::{
    DialogueScript, GameState, Inventory, Item, NpcState, PlayerState, Position, Tile, TileMap,
};

use crate::loaders::LoadResult;

const FLOOR_GLYPH: char = '.';
const WALL_GLYPH: char = '#';

/// Scenario data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Map rows, top first: `#` is a wall, `.` is floor.
    pub map: Vec<String>,
    /// Catalog of every item that exists in the session.
    pub items: Vec<ItemSpec>,
    pub player: PlayerSpec,
    pub npcs: Vec<NpcSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub position: (i32, i32),
    /// Starting inventory as catalog ids, in order.
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcSpec {
    pub id: String,
    pub name: String,
    pub position: (i32, i32),
    pub items: Vec<String>,
    pub dialogue: Vec<String>,
}

impl ScenarioSpec {
    /// Builds the validated initial game state this scenario describes.
    pub fn build(&self) -> LoadResult<GameState> {
        let map = parse_map(&self.map)?;
        let mut catalog = Catalog::new(&self.items)?;

        let player = PlayerState::new(
            position(self.player.position),
            catalog.claim_all(&self.player.items, "player")?,
        );

        let mut npcs = Vec::with_capacity(self.npcs.len());
        for spec in &self.npcs {
            let script = DialogueScript::new(spec.dialogue.clone())
                .with_context(|| format!("npc {}", spec.id))?;
            npcs.push(NpcState::new(
                spec.id.as_str(),
                spec.name.clone(),
                position(spec.position),
                catalog.claim_all(&spec.items, &spec.id)?,
                script,
            ));
        }

        GameState::new(map, player, npcs).map_err(Into::into)
    }
}

fn position((x, y): (i32, i32)) -> Position {
    Position::new(x, y)
}

fn parse_map(rows: &[String]) -> LoadResult<TileMap> {
    let mut tiles = Vec::with_capacity(rows.len());
    for (y, row) in rows.iter().enumerate() {
        let mut parsed = Vec::with_capacity(row.len());
        for (x, glyph) in row.chars().enumerate() {
            match glyph {
                FLOOR_GLYPH => parsed.push(Tile::Floor),
                WALL_GLYPH => parsed.push(Tile::Wall),
                other => bail!("unknown map glyph {other:?} at column {x}, row {y}"),
            }
        }
        tiles.push(parsed);
    }
    TileMap::from_rows(tiles).map_err(Into::into)
}

/// Item catalog that hands each item out at most once.
///
/// A second claim for the same id would put one item into two inventories,
/// so it is rejected with the owners named.
struct Catalog<'a> {
    items: BTreeMap<&'a str, Item>,
    claimed: BTreeMap<&'a str, String>,
}

impl<'a> Catalog<'a> {
    fn new(specs: &'a [ItemSpec]) -> LoadResult<Self> {
        let mut items = BTreeMap::new();
        for spec in specs {
            let item = Item::new(spec.id.as_str(), spec.name.clone(), spec.description.clone());
            if items.insert(spec.id.as_str(), item).is_some() {
                bail!("item {} is defined twice in the catalog", spec.id);
            }
        }
        Ok(Self {
            items,
            claimed: BTreeMap::new(),
        })
    }

    fn claim_all(&mut self, ids: &'a [String], owner: &str) -> LoadResult<Inventory> {
        let mut inventory = Inventory::empty();
        for id in ids {
            inventory.push(self.claim(id, owner)?);
        }
        Ok(inventory)
    }

    fn claim(&mut self, id: &'a str, owner: &str) -> LoadResult<Item> {
        if let Some(previous) = self.claimed.get(id) {
            bail!("item {id} is assigned to both {previous} and {owner}");
        }
        let item = self
            .items
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("{owner} references unknown item {id}"))?;
        self.claimed.insert(id, owner.to_string());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_spec() -> ScenarioSpec {
        ScenarioSpec {
            map: vec![
                "#####".to_string(),
                "#...#".to_string(),
                "#...#".to_string(),
                "#####".to_string(),
            ],
            items: vec![ItemSpec {
                id: "feather".to_string(),
                name: "Feather".to_string(),
                description: "Light as air.".to_string(),
            }],
            player: PlayerSpec {
                position: (1, 1),
                items: vec!["feather".to_string()],
            },
            npcs: vec![NpcSpec {
                id: "crow".to_string(),
                name: "Crow".to_string(),
                position: (3, 2),
                items: vec![],
                dialogue: vec!["Caw.".to_string()],
            }],
        }
    }

    #[test]
    fn builds_a_playable_state() {
        let state = minimal_spec().build().unwrap();

        assert_eq!(state.map.width(), 5);
        assert_eq!(state.player.position, Position::new(1, 1));
        assert_eq!(state.npcs.len(), 1);
        assert!(state.player.inventory.contains(&"feather".into()));
    }

    #[test]
    fn rejects_unknown_map_glyph() {
        let mut spec = minimal_spec();
        spec.map[1] = "#.?.#".to_string();

        let error = spec.build().unwrap_err();
        assert!(error.to_string().contains("unknown map glyph"));
    }

    #[test]
    fn rejects_unknown_item_reference() {
        let mut spec = minimal_spec();
        spec.player.items.push("anvil".to_string());

        let error = spec.build().unwrap_err();
        assert!(error.to_string().contains("unknown item"));
    }

    #[test]
    fn rejects_item_assigned_twice() {
        let mut spec = minimal_spec();
        spec.npcs[0].items.push("feather".to_string());

        let error = spec.build().unwrap_err();
        assert!(
            error
                .to_string()
                .contains("assigned to both player and crow")
        );
    }

    #[test]
    fn rejects_duplicate_catalog_entry() {
        let mut spec = minimal_spec();
        spec.items.push(spec.items[0].clone());

        let error = spec.build().unwrap_err();
        assert!(error.to_string().contains("defined twice"));
    }

    #[test]
    fn rejects_empty_dialogue() {
        let mut spec = minimal_spec();
        spec.npcs[0].dialogue.clear();

        let error = spec.build().unwrap_err();
        assert!(error.to_string().contains("crow"));
    }
}
