pub mod common;
pub mod cursor;
pub mod gate;
pub mod keys;
pub mod npc;

pub use common::{Position, PositionError};
pub use cursor::Cursor;
pub use gate::{Gate, SecondaryGate};
pub use keys::{CollectibleKey, VimKey};
pub use npc::{Npc, NpcKind};
