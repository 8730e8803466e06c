//! Static content definitions: zones, levels and games.
//!
//! These are plain data read once at startup (see `game-content`) and never
//! mutated. Raw `(x, y)` tuples used by content files are normalized to
//! [`Position`] when a [`ZoneSpec`] is built into a [`crate::state::Zone`].

use std::collections::HashMap;

use strum::Display;

use crate::state::{NpcKind, Position};

/// Rule deciding when a zone counts as complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompletionRule {
    /// Every command key has been collected; the last key opens the gate.
    #[default]
    AllKeys,
    /// Every command key has been collected and the player has then opened
    /// the main gate by walking into it.
    AllKeysAndGateOpen,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSpec {
    pub rows: Vec<String>,
    pub legend: HashMap<char, String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySpec {
    pub key: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub position: (i32, i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectibleKeySpec {
    pub id: String,
    pub position: (i32, i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecondaryGateSpec {
    pub position: (i32, i32),
    /// Collectible keys spent to open this gate.
    pub cost: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcSpec {
    pub id: String,
    pub name: String,
    pub position: (i32, i32),
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: NpcKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dialogue: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextLabelSpec {
    pub text: String,
    pub position: (i32, i32),
}

/// Full description of one zone, as authored in content files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSpec {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub map: MapSpec,
    pub cursor_start: (i32, i32),
    #[cfg_attr(feature = "serde", serde(default))]
    pub keys: Vec<KeySpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub collectible_keys: Vec<CollectibleKeySpec>,
    pub gate: (i32, i32),
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary_gates: Vec<SecondaryGateSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub npcs: Vec<NpcSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_labels: Vec<TextLabelSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completion: CompletionRule,
    /// Level progression out of this zone needs an explicit confirmation
    /// gesture (ESC) on top of standing on the gate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires_explicit_confirmation: bool,
}

/// Summary returned by zone listings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub key_count: usize,
}

impl From<&ZoneSpec> for ZoneInfo {
    fn from(spec: &ZoneSpec) -> Self {
        Self {
            id: spec.id.clone(),
            name: spec.name.clone(),
            description: spec.description.clone(),
            key_count: spec.keys.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDefinition {
    pub id: String,
    pub name: String,
    pub zones: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameType {
    #[default]
    LevelBased,
    Textland,
}

/// A playable game: an ordered list of levels plus presentation metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub game_type: GameType,
    pub default_level: String,
    /// Levels in play order.
    pub levels: Vec<LevelDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Vec<String>,
}

impl GameDefinition {
    pub fn level(&self, level_id: &str) -> Option<&LevelDefinition> {
        self.levels.iter().find(|level| level.id == level_id)
    }

    pub fn supported_levels(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|level| level.id.as_str())
    }

    /// Level that follows `level_id` in play order, if any.
    pub fn next_level_id(&self, level_id: &str) -> Option<&str> {
        let index = self.levels.iter().position(|level| level.id == level_id)?;
        self.levels.get(index + 1).map(|level| level.id.as_str())
    }
}

pub(crate) fn to_position((x, y): (i32, i32)) -> Position {
    Position::new(x, y)
}
