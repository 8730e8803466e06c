use super::Position;

/// Command key pickup (e.g. `h`, `j`, `w`). Identity is [`VimKey::key`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VimKey {
    pub key: String,
    pub name: String,
    pub description: String,
    pub position: Position,
}

impl VimKey {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            position,
        }
    }

    pub fn identity(&self) -> &str {
        &self.key
    }
}

/// Generic pickup spent to unlock secondary gates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectibleKey {
    pub id: String,
    pub position: Position,
}

impl CollectibleKey {
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}
