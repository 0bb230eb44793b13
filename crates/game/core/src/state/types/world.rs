use super::Position;

/// One grid cell of the static map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Floor,
    Wall,
}

impl Tile {
    pub fn is_passable(self) -> bool {
        matches!(self, Tile::Floor)
    }
}

/// Errors rejected while constructing a [`TileMap`].
///
/// These are construction-time faults in the content that seeds the map; the
/// transition functions never re-check them at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map must have at least one row and one column")]
    Empty,

    #[error("row {row} does not match the width of row 0")]
    RaggedRow { row: usize },

    #[error("border cell {position} must be a wall")]
    OpenBorder { position: Position },
}

/// Static row-major grid of tiles with bounds.
///
/// Immutable once constructed; every border cell is guaranteed to be a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Builds a map from rows of tiles, top row first.
    ///
    /// Rejects empty or ragged input and any border cell that is not a wall.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MapError::RaggedRow { row: y });
            }

            for (x, tile) in row.iter().enumerate() {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if border && tile.is_passable() {
                    return Err(MapError::OpenBorder {
                        position: Position::new(x as i32, y as i32),
                    });
                }
                tiles.push(*tile);
            }
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Returns the tile at `position`, or `None` when out of bounds.
    pub fn tile(&self, position: Position) -> Option<Tile> {
        if !self.contains(position) {
            return None;
        }
        let index = position.y as usize * self.width as usize + position.x as usize;
        self.tiles.get(index).copied()
    }
}
