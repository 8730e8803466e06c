use crate::env::TileType;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// How long the "Level Complete" message stays visible before the next
    /// level is loaded, in milliseconds.
    pub level_transition_delay_ms: u64,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Tile reported for every position outside a map's bounds.
    pub const OUT_OF_BOUNDS_TILE: TileType = TileType::WATER;
    /// Lines shown by an NPC that has nothing else to say.
    pub const FALLBACK_GREETING: [&'static str; 2] =
        ["Hello there, traveler!", "Keep practicing your movement keys."];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL_TRANSITION_DELAY_MS: u64 = 2000;

    pub fn new() -> Self {
        Self {
            level_transition_delay_ms: Self::DEFAULT_LEVEL_TRANSITION_DELAY_MS,
        }
    }

    pub fn with_level_transition_delay_ms(level_transition_delay_ms: u64) -> Self {
        Self {
            level_transition_delay_ms,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
