use std::sync::Arc;

use game_content::LevelService;
use game_core::{GameState, ZoneProvider};
use tracing::info;

use crate::api::Result;

/// Builds a [`GameState`] for a game and level picked by id.
///
/// Level-based and textland games share the same state machine; the game type
/// only affects presentation.
#[derive(Clone)]
pub struct SelectGameUseCase {
    levels: LevelService,
    zones: Arc<dyn ZoneProvider>,
}

impl SelectGameUseCase {
    pub fn new(levels: LevelService, zones: Arc<dyn ZoneProvider>) -> Self {
        Self { levels, zones }
    }

    pub fn levels(&self) -> &LevelService {
        &self.levels
    }

    /// `None` picks the registry default game and that game's default level.
    pub fn select(&self, game_id: Option<&str>, level_id: Option<&str>) -> Result<GameState> {
        let registry = self.levels.games();
        let game = match game_id {
            Some(id) => registry.game(id)?,
            None => registry.default_game()?,
        };
        let level_id = level_id.unwrap_or(&game.default_level);

        let plan = self.levels.level_plan(&game.id, level_id)?;
        info!(
            game = %game.id,
            game_type = %game.game_type,
            level = %plan.level_id,
            zones = plan.zones.len(),
            "starting level"
        );
        Ok(GameState::new(plan, Arc::clone(&self.zones))?)
    }
}
