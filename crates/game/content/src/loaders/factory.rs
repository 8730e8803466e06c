//! Content factory for building registries from data files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use game_core::ConfigError;

use crate::loaders::{GameLoader, GamesFile, LoadResult, ZoneLoader};
use crate::registry::{GameRegistry, LevelService, ZoneRegistry};

/// Zone files compiled into the binary, in play order.
const BUILTIN_ZONES: [(&str, &str); 6] = [
    ("meadow.ron", include_str!("../../data/zones/meadow.ron")),
    ("riverbank.ron", include_str!("../../data/zones/riverbank.ron")),
    ("ruins.ron", include_str!("../../data/zones/ruins.ron")),
    ("summit.ron", include_str!("../../data/zones/summit.ron")),
    ("sanctum.ron", include_str!("../../data/zones/sanctum.ron")),
    ("textland_intro.ron", include_str!("../../data/zones/textland_intro.ron")),
];

const BUILTIN_GAMES: &str = include_str!("../../data/games.toml");

/// Fully loaded and cross-checked content.
#[derive(Clone, Debug)]
pub struct Content {
    pub zones: Arc<ZoneRegistry>,
    pub games: Arc<GameRegistry>,
}

impl Content {
    pub fn levels(&self) -> LevelService {
        LevelService::new(Arc::clone(&self.games))
    }

    /// Every zone named by a level must be registered.
    fn validate(&self) -> Result<(), ConfigError> {
        use game_core::ZoneProvider;

        for game in self.games.games() {
            for level in &game.levels {
                if let Some(missing) = level.zones.iter().find(|id| !self.zones.has_zone(id)) {
                    return Err(ConfigError::UnknownZone(missing.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── games.toml
/// └── zones/
///     ├── meadow.ron
///     └── riverbank.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Content embedded at compile time.
    pub fn builtin() -> LoadResult<Content> {
        let mut zones = Vec::with_capacity(BUILTIN_ZONES.len());
        for (name, source) in BUILTIN_ZONES {
            let spec = ZoneLoader::parse(source)
                .map_err(|e| anyhow::anyhow!("builtin zone {}: {}", name, e))?;
            zones.push(spec);
        }
        let games = GameLoader::parse(BUILTIN_GAMES)?;
        build(zones, games)
    }

    /// Shorthand for `ContentFactory::new(path).load()`.
    pub fn from_dir(data_dir: impl Into<PathBuf>) -> LoadResult<Content> {
        Self::new(data_dir).load()
    }

    pub fn load(&self) -> LoadResult<Content> {
        let zones = ZoneLoader::load_dir(&self.data_dir.join("zones"))?;
        let games = GameLoader::load(&self.data_dir.join("games.toml"))?;
        let content = build(zones, games)?;
        tracing::info!(
            data_dir = %self.data_dir.display(),
            zones = content.zones.len(),
            "loaded content"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn build(zones: Vec<game_core::ZoneSpec>, games: GamesFile) -> LoadResult<Content> {
    let content = Content {
        zones: Arc::new(ZoneRegistry::from_specs(zones)?),
        games: Arc::new(GameRegistry::new(games.games, games.default_game)?),
    };
    content.validate()?;
    Ok(content)
}
