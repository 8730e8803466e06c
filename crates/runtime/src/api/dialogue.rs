//! Dialogue and teaching text supplied to NPC interactions.
use game_core::{GameState, Npc};
use strum::Display;

/// Progress context for [`DialogueService::encouragement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncouragementContext {
    pub keys_collected: usize,
    pub keys_total: usize,
}

impl EncouragementContext {
    pub fn from_state(state: &GameState) -> Self {
        let zone = state.zone();
        Self {
            keys_collected: zone.collected_keys().len(),
            keys_total: zone.total_keys(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Milestone {
    ZoneComplete { zone_id: String },
    LevelComplete { level_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Celebration {
    pub npc: Npc,
    pub dialogue: Vec<String>,
    pub milestone: Milestone,
}

pub trait DialogueService: Send + Sync {
    /// Lines for `npc` in the current state. Empty means "nothing to add" and
    /// lets the NPC speak for itself.
    fn npc_dialogue(&self, npc: &Npc, state: &GameState) -> Vec<String>;

    fn teaching_moment(&self, npc: &Npc, skill: &str) -> Option<String>;

    fn encouragement(&self, npc: &Npc, context: EncouragementContext) -> String;

    fn celebrate_milestone(&self, milestone: Milestone, npcs: &[Npc]) -> Option<Celebration>;
}
