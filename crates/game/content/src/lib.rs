//! Static game content and the registries built from it.
//!
//! - Zone definitions (data-driven via RON, one file per zone)
//! - Games and their ordered levels (data-driven via TOML)
//! - [`ZoneRegistry`], the [`game_core::ZoneProvider`] used by `GameState`
//! - [`GameRegistry`] and [`LevelService`] for game/level resolution
//!
//! Content is read once at startup and never mutated afterwards.

pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::{GameRegistry, LevelService, ZoneRegistry};

#[cfg(feature = "loaders")]
pub use loaders::{Content, ContentFactory, GameLoader, GamesFile, LoadResult, ZoneLoader};
