use std::collections::HashMap;

use crate::config::GameConfig;
use crate::env::ConfigError;
use crate::state::Position;

/// Read-only tile layout of a zone.
///
/// `tile_at` never fails: positions outside the map report
/// [`GameConfig::OUT_OF_BOUNDS_TILE`], which is impassable.
pub trait GameMap: Send + Sync {
    fn dimensions(&self) -> MapDimensions;
    fn tile_at(&self, position: Position) -> TileType;

    fn is_valid_position(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    fn is_walkable(&self, position: Position) -> bool {
        self.is_valid_position(position) && self.tile_at(position).walkable
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Named tile kind. The set is closed; equality is by name.
#[derive(Clone, Copy, Debug, Eq)]
pub struct TileType {
    pub name: &'static str,
    pub walkable: bool,
}

impl PartialEq for TileType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl TileType {
    pub const GRASS: Self = Self::new("grass", true);
    pub const WATER: Self = Self::new("water", false);
    pub const DIRT: Self = Self::new("dirt", true);
    pub const TREE: Self = Self::new("tree", false);
    pub const STONE: Self = Self::new("stone", false);
    pub const PATH: Self = Self::new("path", true);
    pub const WALL: Self = Self::new("wall", false);
    pub const BRIDGE: Self = Self::new("bridge", true);
    pub const SAND: Self = Self::new("sand", true);
    pub const RUINS: Self = Self::new("ruins", false);
    pub const FIELD: Self = Self::new("field", true);
    pub const RAMP_UP: Self = Self::new("ramp_up", true);
    pub const RAMP_DOWN: Self = Self::new("ramp_down", true);
    pub const GATE_FLOOR: Self = Self::new("gate_floor", false);

    pub const ALL: [TileType; 14] = [
        Self::GRASS,
        Self::WATER,
        Self::DIRT,
        Self::TREE,
        Self::STONE,
        Self::PATH,
        Self::WALL,
        Self::BRIDGE,
        Self::SAND,
        Self::RUINS,
        Self::FIELD,
        Self::RAMP_UP,
        Self::RAMP_DOWN,
        Self::GATE_FLOOR,
    ];

    const fn new(name: &'static str, walkable: bool) -> Self {
        Self { name, walkable }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tile| tile.name == name)
    }
}

/// Dense rectangular map backed by a row-major tile vector.
#[derive(Clone, Debug)]
pub struct GridMap {
    dimensions: MapDimensions,
    tiles: Vec<TileType>,
}

impl GridMap {
    /// Creates a map filled with a single tile kind.
    pub fn filled(dimensions: MapDimensions, tile: TileType) -> Self {
        let len = (dimensions.width * dimensions.height) as usize;
        Self {
            dimensions,
            tiles: vec![tile; len],
        }
    }

    /// Builds a map from text rows, translating each character through `legend`.
    ///
    /// All rows must have the same width and every character must be mapped to a
    /// known tile name.
    pub fn from_rows(rows: &[String], legend: &HashMap<char, String>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(ConfigError::EmptyMap);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                return Err(ConfigError::RaggedMap {
                    row: y,
                    expected: width,
                    found: row_width,
                });
            }
            for symbol in row.chars() {
                let name = legend
                    .get(&symbol)
                    .ok_or(ConfigError::UnknownTileSymbol(symbol))?;
                let tile =
                    TileType::by_name(name).ok_or_else(|| ConfigError::UnknownTile(name.clone()))?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            dimensions: MapDimensions::new(width as u32, height as u32),
            tiles,
        })
    }

    /// Overrides a single tile. Positions outside the map are ignored.
    pub fn set_tile(&mut self, position: Position, tile: TileType) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = tile;
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

impl GameMap for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile_at(&self, position: Position) -> TileType {
        self.index(position)
            .map(|index| self.tiles[index])
            .unwrap_or(GameConfig::OUT_OF_BOUNDS_TILE)
    }
}
