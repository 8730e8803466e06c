mod common;

use std::sync::Arc;

use common::{RecordingRenderer, Rendered, ZoneFixture, selector};
use game_core::{GameConfig, NpcKind, Position};
use runtime::{MentorDialogueService, MovePlayerUseCase, NpcInteractionUseCase};

fn state() -> game_core::GameState {
    let zone = ZoneFixture::new("village", &["....", "...."], (0, 0), (3, 1))
        .key("l", (3, 0))
        .npc("elder", (1, 0), NpcKind::Villager, &["Welcome to the village."])
        .npc("stranger", (2, 0), NpcKind::Villager, &[])
        .npc(
            "mentor",
            (0, 1),
            NpcKind::Mentor {
                skill: "j".into(),
            },
            &[],
        )
        .npc("guard", (1, 1), NpcKind::Guardian, &["unused"])
        .build();
    selector(vec![zone], &[("level_1", &["village"])])
        .select(None, None)
        .unwrap()
}

#[test]
fn nobody_here() {
    let renderer = Arc::new(RecordingRenderer::default());
    let interaction =
        NpcInteractionUseCase::new(renderer.clone()).execute(&state(), Position::new(3, 0));
    assert!(!interaction.interaction_occurred);
    assert!(interaction.npc.is_none());
    assert!(renderer.events().is_empty());
}

#[test]
fn static_lines_then_fallback_greeting() {
    let renderer = Arc::new(RecordingRenderer::default());
    let use_case = NpcInteractionUseCase::new(renderer.clone());
    let state = state();

    let elder = use_case.execute(&state, Position::new(1, 0));
    assert!(elder.interaction_occurred);
    assert_eq!(elder.dialogue, ["Welcome to the village."]);

    let stranger = use_case.execute(&state, Position::new(2, 0));
    assert_eq!(stranger.dialogue, GameConfig::FALLBACK_GREETING);

    // The default dialogue display falls back to speaker-tagged messages.
    assert!(renderer.events().contains(&Rendered::Message {
        text: "Welcome to the village.".into(),
        speaker: Some("ELDER".into()),
    }));
}

#[test]
fn dynamic_dialogue_beats_static_lines() {
    let renderer = Arc::new(RecordingRenderer::default());
    let guard = NpcInteractionUseCase::new(renderer).execute(&state(), Position::new(1, 1));
    assert_eq!(guard.dialogue.len(), 1);
    assert!(guard.dialogue[0].contains("None shall pass"));
}

#[test]
fn dialogue_service_comes_first() {
    let renderer = Arc::new(RecordingRenderer::default());
    let use_case = NpcInteractionUseCase::new(renderer)
        .with_dialogue_service(Arc::new(MentorDialogueService::new()));
    let state = state();

    let mentor = use_case.execute(&state, Position::new(0, 1));
    assert!(mentor.dialogue[0].contains("`j`"));

    // Villagers get nothing from the service and speak for themselves.
    let elder = use_case.execute(&state, Position::new(1, 0));
    assert_eq!(elder.dialogue, ["Welcome to the village."]);
}

#[tokio::test]
async fn moving_onto_an_npc_embeds_the_interaction() {
    let renderer = Arc::new(RecordingRenderer::default());
    let mut mover = MovePlayerUseCase::new(renderer.clone());
    let mut state = state();

    let outcome = mover.execute(&mut state, "right").await.unwrap();
    assert!(outcome.npc_interaction.interaction_occurred);
    assert_eq!(outcome.npc_interaction.npc.map(|n| n.id).as_deref(), Some("elder"));
}
