use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr};

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionError {
    #[error("invalid direction '{0}', expected one of up, down, left, right")]
    Invalid(String),
}

impl GameError for DirectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "DIRECTION_INVALID"
    }
}

/// Unit step requested by the player.
///
/// Screen coordinates: `y` grows downwards, so `Up` is `(0, -1)`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Vertical moves keep the cursor's remembered column.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Parses a direction name, rejecting anything outside the four cardinals.
    pub fn parse(raw: &str) -> Result<Self, DirectionError> {
        Self::from_str(raw).map_err(|_| DirectionError::Invalid(raw.to_owned()))
    }
}
