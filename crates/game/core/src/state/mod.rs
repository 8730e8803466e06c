//! Progression state: value types, the zone aggregate and the level state machine.
mod error;
mod game_state;
mod snapshot;
pub mod types;
mod zone;

pub use error::ProgressionError;
pub use game_state::{GameState, LevelPlan, ProgressionOutcome};
pub use snapshot::{LevelProgress, StateSnapshot};
pub use types::{
    CollectibleKey, Cursor, Gate, Npc, NpcKind, Position, PositionError, SecondaryGate, VimKey,
};
pub use zone::{TextLabel, Zone};
