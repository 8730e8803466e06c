//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the progression core, configuration lookups and
//! collaborators so clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ConfigError, DirectionError, ErrorSeverity, GameError, ProgressionError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    InvalidDirection(#[from] DirectionError),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("navigation to level '{level_id}' failed: {reason}")]
    Navigation { level_id: String, reason: String },

    #[error("cutscene failed: {0}")]
    Cutscene(String),

    #[error("session command channel closed")]
    CommandChannelClosed,
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidDirection(e) => e.severity(),
            Self::Progression(e) => e.severity(),
            Self::Config(e) => e.severity(),
            Self::Navigation { .. } | Self::Cutscene(_) => ErrorSeverity::Recoverable,
            Self::CommandChannelClosed => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDirection(e) => e.error_code(),
            Self::Progression(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Navigation { .. } => "RUNTIME_NAVIGATION",
            Self::Cutscene(_) => "RUNTIME_CUTSCENE",
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
        }
    }
}
