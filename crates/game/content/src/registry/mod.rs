//! In-memory lookups over loaded content.
//!
//! Registries are plain values built once at startup and shared behind `Arc`.
//! There is no global instance; tests construct their own.

mod game;
mod level;
mod zone;

pub use game::GameRegistry;
pub use level::LevelService;
pub use zone::ZoneRegistry;
