//! One player's game session.
//!
//! [`GameSession`] exclusively owns the active [`GameState`] and the use cases
//! that drive it. Input is resolved one event at a time through `&mut self`.

use game_core::{GameState, ProgressionOutcome};
use tracing::info;

use crate::api::Result;
use crate::navigation::SessionCommand;
use crate::use_cases::{MoveOutcome, MovePlayerUseCase, SelectGameUseCase};

pub struct GameSession {
    state: GameState,
    mover: MovePlayerUseCase,
    selector: SelectGameUseCase,
}

impl GameSession {
    /// Selects the starting level and draws its first frame.
    pub fn start(
        selector: SelectGameUseCase,
        mover: MovePlayerUseCase,
        game_id: Option<&str>,
        level_id: Option<&str>,
    ) -> Result<Self> {
        let state = selector.select(game_id, level_id)?;
        mover.renderer().render(&state.snapshot());
        Ok(Self {
            state,
            mover,
            selector,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn handle_direction(&mut self, direction: &str) -> Result<MoveOutcome> {
        self.mover.execute(&mut self.state, direction).await
    }

    /// Explicit confirmation gesture (ESC) for zones that require one.
    pub async fn confirm_progression(&mut self) -> Result<ProgressionOutcome> {
        self.state.mark_esc_progression_pressed();

        let Some(progression) = self.mover.progression_mut() else {
            return Ok(ProgressionOutcome::None);
        };
        if !progression.should_execute_progression(&self.state) {
            return Ok(ProgressionOutcome::None);
        }
        progression.execute(&mut self.state).await
    }

    /// Replaces the current level. Any pending transition is dropped.
    pub fn load_level(&mut self, game_id: &str, level_id: &str) -> Result<()> {
        let state = self.selector.select(Some(game_id), Some(level_id))?;
        if let Some(progression) = self.mover.progression_mut() {
            progression.scheduler_mut().cancel();
        }
        info!(game = %game_id, level = %level_id, "level loaded");

        self.state = state;
        self.mover.renderer().render(&self.state.snapshot());
        Ok(())
    }

    pub fn handle_command(&mut self, command: SessionCommand) -> Result<()> {
        match command {
            SessionCommand::LoadLevel { game_id, level_id } => self.load_level(&game_id, &level_id),
        }
    }
}
