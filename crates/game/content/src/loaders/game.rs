//! Game and level definition loader.

use std::path::Path;

use game_core::GameDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Top-level layout of `games.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamesFile {
    pub default_game: String,
    pub games: Vec<GameDefinition>,
}

/// Loader for game definitions from TOML files.
pub struct GameLoader;

impl GameLoader {
    pub fn load(path: &Path) -> LoadResult<GamesFile> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GamesFile> {
        let file: GamesFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse games TOML: {}", e))?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameType;

    #[test]
    fn parse_games_with_levels() {
        let file = GameLoader::parse(
            r#"
            default_game = "g"

            [[games]]
            id = "g"
            name = "G"
            game_type = "textland"
            default_level = "one"

            [[games.levels]]
            id = "one"
            name = "One"
            zones = ["a", "b"]

            [[games.levels]]
            id = "two"
            name = "Two"
            zones = ["c"]
            "#,
        )
        .unwrap();

        let game = &file.games[0];
        assert_eq!(file.default_game, "g");
        assert_eq!(game.game_type, GameType::Textland);
        assert_eq!(game.supported_levels().collect::<Vec<_>>(), ["one", "two"]);
        assert_eq!(game.next_level_id("one"), Some("two"));
        assert!(game.features.is_empty());
    }

    #[test]
    fn parse_requires_default_game() {
        assert!(GameLoader::parse("games = []").is_err());
    }
}
