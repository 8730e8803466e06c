//! Read-only world data consumed by the progression core.
//!
//! Maps expose tile geometry, specs describe zones/levels/games, and the
//! [`ZoneProvider`] contract lets [`crate::state::GameState`] construct zones by
//! id without knowing where the content came from.
mod config;
mod error;
mod map;
mod zone_provider;

pub use config::{
    CollectibleKeySpec, CompletionRule, GameDefinition, GameType, KeySpec, LevelDefinition,
    MapSpec, NpcSpec, SecondaryGateSpec, TextLabelSpec, ZoneInfo, ZoneSpec,
};
pub(crate) use config::to_position;
pub use error::ConfigError;
pub use map::{GameMap, GridMap, MapDimensions, TileType};
pub use zone_provider::ZoneProvider;
