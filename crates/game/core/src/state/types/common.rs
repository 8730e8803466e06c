use std::fmt;

use crate::action::Direction;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PositionError {
    #[error("position coordinates must be integers, got ({x}, {y})")]
    NonInteger { x: f64, y: f64 },
}

impl GameError for PositionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "POSITION_NON_INTEGER"
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Position one tile away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.translate(dx, dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<(f64, f64)> for Position {
    type Error = PositionError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        let integral = |v: f64| v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64;
        if integral(x) && integral(y) {
            Ok(Self::new(x as i32, y as i32))
        } else {
            Err(PositionError::NonInteger { x, y })
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_returns_new_value() {
        let origin = Position::new(5, 5);
        assert_eq!(origin.translate(1, -1), Position::new(6, 4));
        assert_eq!(origin.step(Direction::Up), Position::new(5, 4));
        assert_eq!(origin.step(Direction::Right), Position::new(6, 5));
        assert_eq!(origin, Position::new(5, 5));
    }

    #[test]
    fn rejects_fractional_coordinates() {
        assert_eq!(Position::try_from((3.0, 4.0)), Ok(Position::new(3, 4)));
        assert!(matches!(
            Position::try_from((1.5, 2.0)),
            Err(PositionError::NonInteger { .. })
        ));
        assert!(Position::try_from((f64::NAN, 0.0)).is_err());
    }
}
