//! Static configuration errors.
//!
//! Raised when a zone, level or game id cannot be resolved, or when content
//! describes something impossible (duplicate key identities, ragged maps).
//! These indicate broken content rather than a player condition, so they are
//! all fatal.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown zone '{0}'")]
    UnknownZone(String),

    #[error("unknown game '{0}'")]
    UnknownGame(String),

    #[error("unknown level '{level}' in game '{game}'")]
    UnknownLevel { game: String, level: String },

    #[error("level '{0}' has no zones")]
    EmptyLevel(String),

    #[error("map has no tiles")]
    EmptyMap,

    #[error("map row {row} has width {found}, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map symbol '{0}' is missing from the legend")]
    UnknownTileSymbol(char),

    #[error("unknown tile type '{0}'")]
    UnknownTile(String),

    #[error("duplicate key identity '{key}' in zone '{zone}'")]
    DuplicateKey { zone: String, key: String },

    #[error("zone '{zone}' places {what} outside the map at {position:?}")]
    OutOfBounds {
        zone: String,
        what: &'static str,
        position: Position,
    },

    #[error("zone '{zone}' places {what} where it cannot be reached at {position:?}")]
    UnreachablePickup {
        zone: String,
        what: &'static str,
        position: Position,
    },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            UnknownZone(_) => "CONFIG_UNKNOWN_ZONE",
            UnknownGame(_) => "CONFIG_UNKNOWN_GAME",
            UnknownLevel { .. } => "CONFIG_UNKNOWN_LEVEL",
            EmptyLevel(_) => "CONFIG_EMPTY_LEVEL",
            EmptyMap => "CONFIG_EMPTY_MAP",
            RaggedMap { .. } => "CONFIG_RAGGED_MAP",
            UnknownTileSymbol(_) => "CONFIG_UNKNOWN_TILE_SYMBOL",
            UnknownTile(_) => "CONFIG_UNKNOWN_TILE",
            DuplicateKey { .. } => "CONFIG_DUPLICATE_KEY",
            OutOfBounds { .. } => "CONFIG_OUT_OF_BOUNDS",
            UnreachablePickup { .. } => "CONFIG_UNREACHABLE_PICKUP",
        }
    }
}
