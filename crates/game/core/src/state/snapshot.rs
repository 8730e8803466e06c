use std::sync::Arc;

use crate::env::GameMap;
use crate::state::{CollectibleKey, Cursor, Gate, Npc, SecondaryGate, TextLabel, VimKey};

/// Where the player stands within the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelProgress {
    pub zone_index: usize,
    pub zone_count: usize,
    pub completed_zones: usize,
    pub keys_collected: usize,
    pub keys_total: usize,
    pub level_complete: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone)]
pub struct StateSnapshot {
    pub game_id: String,
    pub level_id: String,
    pub zone_id: String,
    pub zone_name: String,
    pub zone_description: String,
    pub map: Arc<dyn GameMap>,
    pub cursor: Cursor,
    pub available_keys: Vec<VimKey>,
    pub collected_keys: Vec<String>,
    pub collectible_keys: Vec<CollectibleKey>,
    pub collectible_keys_held: usize,
    pub text_labels: Vec<TextLabel>,
    pub gate: Gate,
    pub secondary_gates: Vec<SecondaryGate>,
    pub npcs: Vec<Npc>,
    pub progress: LevelProgress,
}

impl std::fmt::Debug for StateSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateSnapshot")
            .field("level_id", &self.level_id)
            .field("zone_id", &self.zone_id)
            .field("cursor", &self.cursor)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}
