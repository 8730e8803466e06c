use std::sync::Arc;

use game_core::{GameState, Npc, Position};
use tracing::debug;

use crate::api::{DialogueService, Renderer};

/// Result of looking for an NPC at the cursor. "Nobody here" is the common case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NpcInteraction {
    pub interaction_occurred: bool,
    pub npc: Option<Npc>,
    pub dialogue: Vec<String>,
}

pub struct NpcInteractionUseCase {
    renderer: Arc<dyn Renderer>,
    dialogue: Option<Arc<dyn DialogueService>>,
}

impl NpcInteractionUseCase {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self {
            renderer,
            dialogue: None,
        }
    }

    #[must_use]
    pub fn with_dialogue_service(mut self, dialogue: Arc<dyn DialogueService>) -> Self {
        self.dialogue = Some(dialogue);
        self
    }

    /// Talks to the first NPC standing at `position`, if any.
    pub fn execute(&self, state: &GameState, position: Position) -> NpcInteraction {
        let Some(npc) = state.zone().npc_at(position) else {
            return NpcInteraction::default();
        };

        let lines = self.resolve_dialogue(npc, state);
        debug!(npc = %npc.id, lines = lines.len(), "npc interaction");
        self.renderer.show_npc_dialogue(npc, &lines);

        NpcInteraction {
            interaction_occurred: true,
            npc: Some(npc.clone()),
            dialogue: lines,
        }
    }

    /// Dialogue service first, then whatever the NPC has to say for itself.
    fn resolve_dialogue(&self, npc: &Npc, state: &GameState) -> Vec<String> {
        if let Some(service) = &self.dialogue {
            let lines = service.npc_dialogue(npc, state);
            if !lines.is_empty() {
                return lines;
            }
        }
        npc.resolve_dialogue(state)
    }
}
