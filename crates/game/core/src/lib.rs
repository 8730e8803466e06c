//! Deterministic progression rules shared by the runtime and content crates.
//!
//! `game-core` defines the canonical zone/level state machine: where the cursor
//! is, which keys have been picked up, which gates are open, and when the player
//! may move on to the next zone or level. Everything here is synchronous and free
//! of I/O; rendering, dialogue, cutscenes and navigation live behind traits in
//! the `runtime` crate.
//!
//! All progression state flows through [`state::GameState`], and supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Direction, DirectionError};
pub use config::GameConfig;
pub use env::{
    CompletionRule, ConfigError, GameDefinition, GameMap, GameType, GridMap, LevelDefinition,
    MapDimensions, TileType, ZoneInfo, ZoneProvider, ZoneSpec,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    CollectibleKey, Cursor, Gate, GameState, LevelPlan, LevelProgress, Npc, NpcKind, Position,
    PositionError, ProgressionError, ProgressionOutcome, SecondaryGate, StateSnapshot, TextLabel,
    VimKey, Zone,
};
