use game_core::{ConfigError, GameDefinition};

/// Known games, in declaration order, plus the one to start by default.
#[derive(Clone, Debug)]
pub struct GameRegistry {
    games: Vec<GameDefinition>,
    default_game: String,
}

impl GameRegistry {
    /// Fails when `default_game` does not name one of `games`.
    pub fn new(
        games: Vec<GameDefinition>,
        default_game: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let default_game = default_game.into();
        if !games.iter().any(|game| game.id == default_game) {
            return Err(ConfigError::UnknownGame(default_game));
        }
        Ok(Self {
            games,
            default_game,
        })
    }

    pub fn game(&self, game_id: &str) -> Result<&GameDefinition, ConfigError> {
        self.games
            .iter()
            .find(|game| game.id == game_id)
            .ok_or_else(|| ConfigError::UnknownGame(game_id.to_string()))
    }

    pub fn default_game(&self) -> Result<&GameDefinition, ConfigError> {
        self.game(&self.default_game)
    }

    pub fn default_game_id(&self) -> &str {
        &self.default_game
    }

    pub fn game_ids(&self) -> impl Iterator<Item = &str> {
        self.games.iter().map(|game| game.id.as_str())
    }

    pub fn games(&self) -> &[GameDefinition] {
        &self.games
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameType, LevelDefinition};

    fn game(id: &str) -> GameDefinition {
        GameDefinition {
            id: id.to_string(),
            name: id.to_string(),
            game_type: GameType::LevelBased,
            default_level: "l1".into(),
            levels: vec![LevelDefinition {
                id: "l1".into(),
                name: "L1".into(),
                zones: vec!["z".into()],
                description: String::new(),
            }],
            features: vec![],
        }
    }

    #[test]
    fn lookups() {
        let registry = GameRegistry::new(vec![game("a"), game("b")], "b").unwrap();
        assert_eq!(registry.default_game().unwrap().id, "b");
        assert_eq!(registry.game("a").unwrap().id, "a");
        assert_eq!(registry.game_ids().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(
            registry.game("c").unwrap_err(),
            ConfigError::UnknownGame("c".into())
        );
    }

    #[test]
    fn default_must_exist() {
        assert!(GameRegistry::new(vec![game("a")], "z").is_err());
    }
}
