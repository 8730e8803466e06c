use crate::config::GameConfig;
use crate::state::GameState;

use super::Position;

/// Behavior family of an NPC. Each family decides whether it has anything
/// dynamic to say; static lines and the fallback greeting cover the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NpcKind {
    /// Only ever speaks its static lines.
    #[default]
    Villager,
    /// Comments on key progress and teaches `skill`.
    Mentor { skill: String },
    /// Reports the state of the zone gate.
    Guardian,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Npc {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub kind: NpcKind,
    pub dialogue: Vec<String>,
}

impl Npc {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        kind: NpcKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            kind,
            dialogue: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dialogue(mut self, lines: Vec<String>) -> Self {
        self.dialogue = lines;
        self
    }

    /// Lines computed from the current game state, if this kind has any.
    pub fn dynamic_dialogue(&self, state: &GameState) -> Option<Vec<String>> {
        let zone = state.zone();
        match &self.kind {
            NpcKind::Villager => None,
            NpcKind::Mentor { skill } => {
                let collected = zone.collected_keys().len();
                let total = zone.total_keys();
                let lines = if collected == total {
                    let hint = if zone.gate().is_open() {
                        "The gate is open. Step onto it to move on."
                    } else {
                        "Walk into the gate to open it."
                    };
                    vec![
                        format!("You found all {total} keys in {}!", zone.name()),
                        hint.to_string(),
                    ]
                } else {
                    vec![
                        format!("You have collected {collected} of {total} keys."),
                        format!("Remember: practice `{skill}` until it feels natural."),
                    ]
                };
                Some(lines)
            }
            NpcKind::Guardian => {
                let line = if zone.gate().is_open() {
                    "The gate stands open. You may pass."
                } else if zone.available_keys().is_empty() {
                    "The keys are yours. Push the gate open."
                } else {
                    "None shall pass until every key is found."
                };
                Some(vec![line.to_string()])
            }
        }
    }

    /// Dynamic lines, then static lines, then the fallback greeting.
    pub fn resolve_dialogue(&self, state: &GameState) -> Vec<String> {
        if let Some(lines) = self.dynamic_dialogue(state).filter(|l| !l.is_empty()) {
            return lines;
        }
        if !self.dialogue.is_empty() {
            return self.dialogue.clone();
        }
        GameConfig::FALLBACK_GREETING
            .iter()
            .map(|line| line.to_string())
            .collect()
    }
}
