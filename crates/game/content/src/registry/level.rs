use std::sync::Arc;

use game_core::{ConfigError, LevelDefinition, LevelPlan};

use super::GameRegistry;

/// Resolves levels of a game and what comes after them.
#[derive(Clone, Debug)]
pub struct LevelService {
    games: Arc<GameRegistry>,
}

impl LevelService {
    pub fn new(games: Arc<GameRegistry>) -> Self {
        Self { games }
    }

    pub fn games(&self) -> &GameRegistry {
        &self.games
    }

    pub fn level(&self, game_id: &str, level_id: &str) -> Result<&LevelDefinition, ConfigError> {
        self.games
            .game(game_id)?
            .level(level_id)
            .ok_or_else(|| ConfigError::UnknownLevel {
                game: game_id.to_string(),
                level: level_id.to_string(),
            })
    }

    pub fn next_level_id(
        &self,
        game_id: &str,
        level_id: &str,
    ) -> Result<Option<&str>, ConfigError> {
        self.level(game_id, level_id)?;
        Ok(self.games.game(game_id)?.next_level_id(level_id))
    }

    pub fn level_ids(&self, game_id: &str) -> Result<Vec<&str>, ConfigError> {
        Ok(self.games.game(game_id)?.supported_levels().collect())
    }

    /// Everything `GameState` needs to play `level_id`.
    pub fn level_plan(&self, game_id: &str, level_id: &str) -> Result<LevelPlan, ConfigError> {
        let level = self.level(game_id, level_id)?;
        if level.zones.is_empty() {
            return Err(ConfigError::EmptyLevel(level_id.to_string()));
        }
        Ok(LevelPlan {
            game_id: game_id.to_string(),
            level_id: level.id.clone(),
            zones: level.zones.clone(),
            next_level_id: self.next_level_id(game_id, level_id)?.map(str::to_string),
        })
    }
}
