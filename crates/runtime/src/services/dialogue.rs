use game_core::{GameState, Npc, NpcKind};

use crate::api::{Celebration, DialogueService, EncouragementContext, Milestone};

/// Teaching lines for the motions taught in the builtin games.
const LESSONS: &[(&str, &str)] = &[
    ("h", "`h` moves one column left. Your index finger rests right on it."),
    ("j", "`j` moves one line down. Think of it as a hook pulling you down."),
    ("k", "`k` moves one line up."),
    ("l", "`l` moves one column right."),
    ("w", "`w` jumps forward to the start of the next word."),
    ("b", "`b` jumps back to the start of the previous word."),
    ("e", "`e` jumps to the end of the current word."),
    ("0", "`0` jumps to the very first column of the line."),
    ("$", "`$` jumps to the last character of the line."),
    ("gg", "`gg` jumps to the first line of the file."),
];

/// Dialogue for mentor NPCs: a lesson on their skill plus progress-aware
/// encouragement. Other kinds are left to speak for themselves.
#[derive(Clone, Debug, Default)]
pub struct MentorDialogueService;

impl MentorDialogueService {
    pub fn new() -> Self {
        Self
    }
}

impl DialogueService for MentorDialogueService {
    fn npc_dialogue(&self, npc: &Npc, state: &GameState) -> Vec<String> {
        let NpcKind::Mentor { skill } = &npc.kind else {
            return Vec::new();
        };

        let mut lines = Vec::with_capacity(2);
        if let Some(lesson) = self.teaching_moment(npc, skill) {
            lines.push(lesson);
        }
        lines.push(self.encouragement(npc, EncouragementContext::from_state(state)));
        lines
    }

    fn teaching_moment(&self, _npc: &Npc, skill: &str) -> Option<String> {
        LESSONS
            .iter()
            .find(|(key, _)| *key == skill)
            .map(|(_, lesson)| lesson.to_string())
    }

    fn encouragement(&self, _npc: &Npc, context: EncouragementContext) -> String {
        let EncouragementContext {
            keys_collected,
            keys_total,
        } = context;
        match keys_total - keys_collected.min(keys_total) {
            0 => "Every key is yours. Head for the gate!".to_string(),
            1 => "Just one key left. You're nearly there.".to_string(),
            remaining if keys_collected == 0 => {
                format!("There are {remaining} keys hidden here. Start exploring!")
            }
            remaining => format!("{keys_collected} down, {remaining} to go. Keep it up."),
        }
    }

    fn celebrate_milestone(&self, milestone: Milestone, npcs: &[Npc]) -> Option<Celebration> {
        let npc = npcs
            .iter()
            .find(|npc| matches!(npc.kind, NpcKind::Mentor { .. }))
            .or_else(|| npcs.first())?
            .clone();

        let dialogue = match &milestone {
            Milestone::ZoneComplete { zone_id } => {
                vec![format!("Well done clearing {zone_id}! On to the next area.")]
            }
            Milestone::LevelComplete { level_id } => vec![
                format!("You have mastered {level_id}!"),
                "Your fingers are learning the way.".to_string(),
            ],
        };

        Some(Celebration {
            npc,
            dialogue,
            milestone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Position;

    fn mentor() -> Npc {
        Npc::new(
            "m",
            "Mentor",
            Position::ORIGIN,
            NpcKind::Mentor {
                skill: "j".into(),
            },
        )
    }

    #[test]
    fn teaching_moment_known_and_unknown() {
        let service = MentorDialogueService::new();
        assert!(service.teaching_moment(&mentor(), "j").unwrap().contains("down"));
        assert_eq!(service.teaching_moment(&mentor(), "ZZ"), None);
    }

    #[test]
    fn encouragement_tracks_progress() {
        let service = MentorDialogueService::new();
        let say = |collected, total| {
            service.encouragement(
                &mentor(),
                EncouragementContext {
                    keys_collected: collected,
                    keys_total: total,
                },
            )
        };
        assert!(say(0, 3).contains("3 keys"));
        assert!(say(1, 3).contains("2 to go"));
        assert!(say(2, 3).contains("one key left"));
        assert!(say(3, 3).contains("gate"));
    }

    #[test]
    fn celebration_prefers_mentors() {
        let service = MentorDialogueService::new();
        let villager = Npc::new("v", "Villager", Position::ORIGIN, NpcKind::Villager);
        let npcs = [villager.clone(), mentor()];

        let celebration = service
            .celebrate_milestone(
                Milestone::LevelComplete {
                    level_id: "level_1".into(),
                },
                &npcs,
            )
            .unwrap();
        assert_eq!(celebration.npc.id, "m");

        let fallback = service
            .celebrate_milestone(
                Milestone::ZoneComplete {
                    zone_id: "z".into(),
                },
                &[villager],
            )
            .unwrap();
        assert_eq!(fallback.npc.id, "v");

        assert!(
            service
                .celebrate_milestone(Milestone::ZoneComplete { zone_id: "z".into() }, &[])
                .is_none()
        );
    }
}
