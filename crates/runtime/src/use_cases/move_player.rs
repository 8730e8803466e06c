//! Movement resolution: one direction in, one [`MoveOutcome`] out.

use std::sync::Arc;

use game_core::{CollectibleKey, Direction, GameState, Position, ProgressionOutcome, VimKey};
use strum::Display;
use tracing::debug;

use crate::api::{MessageKind, MessageOptions, Renderer, Result};
use crate::use_cases::{HandleProgressionUseCase, NpcInteraction, NpcInteractionUseCase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MoveRejection {
    InvalidPosition,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub success: bool,
    pub new_position: Option<Position>,
    pub key_collected: Option<VimKey>,
    pub collectible_collected: Option<CollectibleKey>,
    pub npc_interaction: NpcInteraction,
    pub progression: ProgressionOutcome,
    pub reason: Option<MoveRejection>,
}

impl MoveOutcome {
    fn rejected() -> Self {
        Self {
            reason: Some(MoveRejection::InvalidPosition),
            ..Self::default()
        }
    }
}

pub struct MovePlayerUseCase {
    renderer: Arc<dyn Renderer>,
    npc_interaction: NpcInteractionUseCase,
    progression: Option<HandleProgressionUseCase>,
}

impl MovePlayerUseCase {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self {
            npc_interaction: NpcInteractionUseCase::new(Arc::clone(&renderer)),
            renderer,
            progression: None,
        }
    }

    #[must_use]
    pub fn with_npc_interaction(mut self, npc_interaction: NpcInteractionUseCase) -> Self {
        self.npc_interaction = npc_interaction;
        self
    }

    #[must_use]
    pub fn with_progression(mut self, progression: HandleProgressionUseCase) -> Self {
        self.progression = Some(progression);
        self
    }

    pub fn renderer(&self) -> &Arc<dyn Renderer> {
        &self.renderer
    }

    pub fn progression_mut(&mut self) -> Option<&mut HandleProgressionUseCase> {
        self.progression.as_mut()
    }

    /// Resolves one move, including any zone or level progression it earns.
    pub async fn execute(&mut self, state: &mut GameState, direction: &str) -> Result<MoveOutcome> {
        let mut outcome = self.apply(state, direction)?;
        if !outcome.success {
            return Ok(outcome);
        }

        if let Some(progression) = self.progression.as_mut() {
            if progression.should_execute_progression(state) {
                outcome.progression = progression.execute(state).await?;
            }
        }

        if !matches!(outcome.progression, ProgressionOutcome::Zone { .. }) {
            self.renderer.render(&state.snapshot());
        }
        Ok(outcome)
    }

    /// Same as [`Self::execute`] but never progresses.
    pub fn execute_sync(&self, state: &mut GameState, direction: &str) -> Result<MoveOutcome> {
        let outcome = self.apply(state, direction)?;
        if outcome.success {
            self.renderer.render(&state.snapshot());
        }
        Ok(outcome)
    }

    /// Everything up to progression. Rejected moves leave `state` untouched.
    fn apply(&self, state: &mut GameState, direction: &str) -> Result<MoveOutcome> {
        let direction = Direction::parse(direction)?;
        let from = state.cursor().position();
        let candidate = from.step(direction);

        let closed_secondary_gate = state
            .zone()
            .secondary_gates()
            .iter()
            .any(|gate| gate.position() == candidate && !gate.is_open());
        if closed_secondary_gate && state.try_unlock_secondary_gate(candidate) {
            self.renderer.show_message(
                "The gate unlocks with a click.",
                MessageOptions::kind(MessageKind::Success),
            );
        }

        if state.zone().gate().position() == candidate && state.try_open_gate() {
            debug!(zone = state.current_zone_id(), "gate opened");
            self.renderer.show_message(
                "The gate creaks open.",
                MessageOptions::kind(MessageKind::Success),
            );
        }

        if !state.is_walkable(candidate) {
            debug!(%from, %candidate, %direction, "move rejected");
            return Ok(MoveOutcome::rejected());
        }

        state.move_cursor(direction, candidate);

        let key_collected = match state.zone().key_at(candidate).cloned() {
            Some(key) => state.collect_key(&key),
            None => None,
        };
        if let Some(key) = &key_collected {
            debug!(key = %key.key, "key collected");
            self.renderer.show_key_info(key);
        }

        let collectible_collected = match state.zone().collectible_key_at(candidate).cloned() {
            Some(key) => state.collect_collectible_key(&key),
            None => None,
        };
        if let Some(key) = &collectible_collected {
            self.renderer.show_message(
                &format!("Picked up {}.", key.id),
                MessageOptions::kind(MessageKind::Info),
            );
        }

        let npc_interaction = self.npc_interaction.execute(state, candidate);

        Ok(MoveOutcome {
            success: true,
            new_position: Some(candidate),
            key_collected,
            collectible_collected,
            npc_interaction,
            progression: ProgressionOutcome::None,
            reason: None,
        })
    }
}
