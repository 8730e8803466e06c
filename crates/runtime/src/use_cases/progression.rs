//! Side effects of zone and level transitions.

use std::sync::Arc;

use game_core::{GameState, Npc, ProgressionOutcome};
use tracing::{debug, info, warn};

use crate::api::{
    CutsceneKey, CutscenePlayer, CutsceneService, DialogueService, MessageKind, MessageOptions,
    Milestone, Renderer, Result,
};
use crate::scheduler::TransitionScheduler;

/// Cutscene lookup and playback, wired together or not at all.
#[derive(Clone)]
pub struct CutsceneHooks {
    pub service: Arc<dyn CutsceneService>,
    pub player: Arc<dyn CutscenePlayer>,
}

pub struct HandleProgressionUseCase {
    renderer: Arc<dyn Renderer>,
    scheduler: TransitionScheduler,
    cutscenes: Option<CutsceneHooks>,
    dialogue: Option<Arc<dyn DialogueService>>,
}

impl HandleProgressionUseCase {
    pub fn new(renderer: Arc<dyn Renderer>, scheduler: TransitionScheduler) -> Self {
        Self {
            renderer,
            scheduler,
            cutscenes: None,
            dialogue: None,
        }
    }

    #[must_use]
    pub fn with_cutscenes(mut self, hooks: CutsceneHooks) -> Self {
        self.cutscenes = Some(hooks);
        self
    }

    #[must_use]
    pub fn with_dialogue_service(mut self, dialogue: Arc<dyn DialogueService>) -> Self {
        self.dialogue = Some(dialogue);
        self
    }

    pub fn scheduler(&self) -> &TransitionScheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut TransitionScheduler {
        &mut self.scheduler
    }

    pub fn should_execute_progression(&self, state: &GameState) -> bool {
        state.should_progress_to_next_zone() || state.should_progress_to_next_level()
    }

    /// Runs at most one transition on `state` and performs its side effects.
    ///
    /// A `Zone` outcome renders the new zone itself; callers only need to
    /// render for the other outcomes.
    pub async fn execute(&mut self, state: &mut GameState) -> Result<ProgressionOutcome> {
        // NPCs of the zone being left are released by the transition.
        let npcs = state.zone().active_npcs().to_vec();
        let outcome = state.execute_progression()?;

        match &outcome {
            ProgressionOutcome::None => {
                debug!(zone = %state.current_zone_id(), "no progression");
            }
            ProgressionOutcome::Zone {
                previous_zone_id,
                new_zone_id,
            } => {
                info!(from = %previous_zone_id, to = %new_zone_id, "zone progression");
                if self.scheduler.cancel() {
                    debug!("cancelled stale level transition");
                }
                self.celebrate(
                    Milestone::ZoneComplete {
                        zone_id: previous_zone_id.clone(),
                    },
                    &npcs,
                );

                // The new zone is already loaded; show it before any story.
                self.renderer.show_message(
                    &format!("Progressing to {new_zone_id}..."),
                    MessageOptions::kind(MessageKind::Info),
                );
                self.renderer.render(&state.snapshot());

                let key = CutsceneKey::zone_entry(state.game_id(), state.level_id(), new_zone_id);
                self.play_cutscene(&key).await;
            }
            ProgressionOutcome::Level {
                completed_level_id,
                next_level_id,
            } => {
                info!(completed = %completed_level_id, next = %next_level_id, "level complete");
                let key = CutsceneKey::level_complete(state.game_id(), completed_level_id);
                self.play_cutscene(&key).await;
                self.celebrate(
                    Milestone::LevelComplete {
                        level_id: completed_level_id.clone(),
                    },
                    &npcs,
                );

                self.renderer
                    .show_message("Level Complete!", MessageOptions::kind(MessageKind::Success));
                self.scheduler.schedule(state.game_id(), next_level_id);
            }
        }

        Ok(outcome)
    }

    fn celebrate(&self, milestone: Milestone, npcs: &[Npc]) {
        let Some(service) = &self.dialogue else {
            return;
        };
        if let Some(celebration) = service.celebrate_milestone(milestone, npcs) {
            self.renderer
                .show_npc_dialogue(&celebration.npc, &celebration.dialogue);
        }
    }

    /// Plays the story for `key` if one is due. Failures are logged and skipped.
    async fn play_cutscene(&self, key: &CutsceneKey) {
        let Some(hooks) = &self.cutscenes else {
            return;
        };
        if let Err(e) = Self::try_play(hooks, key).await {
            warn!(kind = %key.kind, level = %key.level_id, error = %e, "cutscene skipped");
        }
    }

    async fn try_play(hooks: &CutsceneHooks, key: &CutsceneKey) -> Result<()> {
        if !hooks.service.should_show(key).await? {
            return Ok(());
        }
        let Some(cutscene) = hooks.service.story(key).await? else {
            return Ok(());
        };
        hooks.player.play(&cutscene).await?;
        hooks.service.mark_shown(key).await
    }
}
