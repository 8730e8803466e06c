//! Content loaders for reading zone and game definitions from files.
//!
//! Zones are authored as one RON file per zone, games as a single TOML file.
//! Both deserialize straight into `game-core` spec types.

pub mod factory;
pub mod game;
pub mod zone;

pub use factory::{Content, ContentFactory};
pub use game::{GameLoader, GamesFile};
pub use zone::ZoneLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
