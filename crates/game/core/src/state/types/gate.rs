use super::Position;

/// Barrier guarding a zone exit. Opening is one-directional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gate {
    position: Position,
    is_open: bool,
}

impl Gate {
    pub fn closed(position: Position) -> Self {
        Self {
            position,
            is_open: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// A gate tile is passable only while open, whatever lies beneath it.
    pub fn is_walkable(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }
}

/// Optional barrier opened by spending collectible keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecondaryGate {
    gate: Gate,
    cost: u32,
}

impl SecondaryGate {
    pub fn new(position: Position, cost: u32) -> Self {
        Self {
            gate: Gate::closed(position),
            cost,
        }
    }

    pub fn position(&self) -> Position {
        self.gate.position()
    }

    pub fn is_open(&self) -> bool {
        self.gate.is_open()
    }

    pub fn is_walkable(&self) -> bool {
        self.gate.is_walkable()
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub(crate) fn open(&mut self) {
        self.gate.open();
    }
}
