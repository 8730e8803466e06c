//! Progression errors.
//!
//! Advancing a zone is only legal once its preconditions hold. Callers are
//! expected to check `should_progress_to_next_zone()` (or
//! `is_current_zone_complete()`/`has_next_zone()`) first; reaching one of these
//! errors means a caller skipped that check.

use crate::env::ConfigError;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    /// The current zone still has keys to collect.
    #[error("zone '{zone_id}' is not complete")]
    ZoneIncomplete { zone_id: String },

    /// The current zone is the last one of the level.
    #[error("zone '{zone_id}' is the last zone of level '{level_id}'")]
    NoNextZone { zone_id: String, level_id: String },

    /// The next zone could not be constructed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ZoneIncomplete { .. } | Self::NoNextZone { .. } => ErrorSeverity::Internal,
            Self::Config(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZoneIncomplete { .. } => "PROGRESSION_ZONE_INCOMPLETE",
            Self::NoNextZone { .. } => "PROGRESSION_NO_NEXT_ZONE",
            Self::Config(err) => err.error_code(),
        }
    }
}
