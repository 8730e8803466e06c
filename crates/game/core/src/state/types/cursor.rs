use super::Position;

/// Player-controlled caret.
///
/// Cursors are replaced rather than mutated: every move yields a new value.
/// `remembered_column` implements sticky-column navigation, where vertical
/// moves keep the column last chosen by a horizontal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
    is_blinking: bool,
    remembered_column: i32,
}

impl Cursor {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            is_blinking: true,
            remembered_column: position.x,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_blinking(&self) -> bool {
        self.is_blinking
    }

    pub fn remembered_column(&self) -> i32 {
        self.remembered_column
    }

    #[must_use]
    pub fn move_to(&self, position: Position, update_remembered_column: bool) -> Self {
        Self {
            position,
            is_blinking: self.is_blinking,
            remembered_column: if update_remembered_column {
                position.x
            } else {
                self.remembered_column
            },
        }
    }

    #[must_use]
    pub fn move_to_with_column_memory(&self, position: Position) -> Self {
        self.move_to(position, false)
    }

    #[must_use]
    pub fn with_blinking(&self, is_blinking: bool) -> Self {
        Self {
            is_blinking,
            ..*self
        }
    }
}
