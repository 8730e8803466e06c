mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    DELAY, FailingCutsceneService, RecordingNavigator, RecordingPlayer, RecordingRenderer,
    Rendered, ZoneFixture, selector,
};
use game_core::ProgressionOutcome;
use runtime::{
    CutsceneHooks, HandleProgressionUseCase, InMemoryCutsceneService, MovePlayerUseCase,
    TransitionScheduler,
};

/// One key right of the start, the gate right of the key.
fn zone(id: &str) -> game_core::ZoneSpec {
    ZoneFixture::new(id, &["...", "..."], (0, 0), (2, 0))
        .key("l", (1, 0))
        .build()
}

fn wired(
    renderer: Arc<RecordingRenderer>,
    navigator: Arc<RecordingNavigator>,
) -> HandleProgressionUseCase {
    HandleProgressionUseCase::new(renderer, TransitionScheduler::new(navigator, DELAY))
}

#[tokio::test]
async fn zone_then_none() {
    let renderer = Arc::new(RecordingRenderer::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut mover = MovePlayerUseCase::new(renderer.clone())
        .with_progression(wired(renderer.clone(), navigator));
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1", "zone_2"])],
    )
    .select(None, None)
    .unwrap();

    mover.execute(&mut state, "right").await.unwrap();
    let outcome = mover.execute(&mut state, "right").await.unwrap();
    assert_eq!(
        outcome.progression,
        ProgressionOutcome::Zone {
            previous_zone_id: "zone_1".into(),
            new_zone_id: "zone_2".into(),
        }
    );
    assert_eq!(state.current_zone_id(), "zone_2");
    assert_eq!(state.cursor().position(), game_core::Position::ORIGIN);
    assert!(renderer.messages().contains(&"Progressing to zone_2...".to_string()));

    let outcome = mover.execute(&mut state, "down").await.unwrap();
    assert_eq!(outcome.progression, ProgressionOutcome::None);
    assert_eq!(state.current_zone_index(), 1);
}

#[tokio::test]
async fn zone_progression_renders_the_new_zone_once() {
    let renderer = Arc::new(RecordingRenderer::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut mover = MovePlayerUseCase::new(renderer.clone())
        .with_progression(wired(renderer.clone(), navigator));
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1", "zone_2"])],
    )
    .select(None, None)
    .unwrap();

    mover.execute(&mut state, "right").await.unwrap();
    renderer.clear();
    mover.execute(&mut state, "right").await.unwrap();

    assert_eq!(renderer.frames(), 1);
    assert!(renderer.events().contains(&Rendered::Frame {
        zone_id: "zone_2".into(),
        cursor: (0, 0),
    }));
}

#[tokio::test]
async fn zone_is_shown_before_its_entry_cutscene() {
    let renderer = Arc::new(RecordingRenderer::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let player = Arc::new(RecordingPlayer::watching(renderer.clone()));
    let service = InMemoryCutsceneService::new().with_story(
        runtime::CutsceneKey::zone_entry("test", "level_1", "zone_2"),
        runtime::Cutscene {
            title: "Arrival".into(),
            script: vec!["You arrive.".into()],
        },
    );
    let mut mover = MovePlayerUseCase::new(renderer.clone()).with_progression(
        wired(renderer.clone(), navigator).with_cutscenes(CutsceneHooks {
            service: Arc::new(service),
            player: player.clone(),
        }),
    );
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1", "zone_2"])],
    )
    .select(None, None)
    .unwrap();

    mover.execute(&mut state, "right").await.unwrap();
    renderer.clear();
    mover.execute(&mut state, "right").await.unwrap();

    let before = player.rendered_before.lock().unwrap().clone();
    assert_eq!(before.len(), 1);
    assert!(before[0].contains(&Rendered::Message {
        text: "Progressing to zone_2...".into(),
        speaker: None,
    }));
    assert!(before[0].contains(&Rendered::Frame {
        zone_id: "zone_2".into(),
        cursor: (0, 0),
    }));
}

#[tokio::test]
async fn zone_entry_cutscene_plays_once() {
    let renderer = Arc::new(RecordingRenderer::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let player = Arc::new(RecordingPlayer::default());
    let service = InMemoryCutsceneService::new().with_story(
        runtime::CutsceneKey::zone_entry("test", "level_1", "zone_2"),
        runtime::Cutscene {
            title: "Arrival".into(),
            script: vec!["You arrive.".into()],
        },
    );
    let mut progression = wired(renderer.clone(), navigator).with_cutscenes(CutsceneHooks {
        service: Arc::new(service),
        player: player.clone(),
    });
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1", "zone_2"])],
    )
    .select(None, None)
    .unwrap();

    let mover = MovePlayerUseCase::new(renderer.clone());
    mover.execute_sync(&mut state, "right").unwrap();
    mover.execute_sync(&mut state, "right").unwrap();
    assert!(progression.should_execute_progression(&state));

    progression.execute(&mut state).await.unwrap();
    assert_eq!(*player.played.lock().unwrap(), ["Arrival"]);
}

#[tokio::test]
async fn cutscene_failure_does_not_block_progression() {
    let renderer = Arc::new(RecordingRenderer::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let player = Arc::new(RecordingPlayer::default());
    let mut mover = MovePlayerUseCase::new(renderer.clone()).with_progression(
        wired(renderer.clone(), navigator).with_cutscenes(CutsceneHooks {
            service: Arc::new(FailingCutsceneService),
            player: player.clone(),
        }),
    );
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1", "zone_2"])],
    )
    .select(None, None)
    .unwrap();

    mover.execute(&mut state, "right").await.unwrap();
    let outcome = mover.execute(&mut state, "right").await.unwrap();

    assert_eq!(outcome.progression.kind(), "zone");
    assert!(player.played.lock().unwrap().is_empty());
    assert!(renderer.messages().contains(&"Progressing to zone_2...".to_string()));
}

#[tokio::test(start_paused = true)]
async fn level_transition_is_delayed() {
    let renderer = Arc::new(RecordingRenderer::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut mover = MovePlayerUseCase::new(renderer.clone())
        .with_progression(wired(renderer.clone(), navigator.clone()));
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1"]), ("level_2", &["zone_2"])],
    )
    .select(None, None)
    .unwrap();

    mover.execute(&mut state, "right").await.unwrap();
    let outcome = mover.execute(&mut state, "right").await.unwrap();
    assert_eq!(
        outcome.progression,
        ProgressionOutcome::Level {
            completed_level_id: "level_1".into(),
            next_level_id: "level_2".into(),
        }
    );
    assert!(renderer.messages().contains(&"Level Complete!".to_string()));
    // Level outcomes leave the state alone; the navigator does the loading.
    assert_eq!(state.level_id(), "level_1");

    tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
    assert!(navigator.calls.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(
        *navigator.calls.lock().unwrap(),
        [("test".to_string(), "level_2".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn returning_to_the_gate_does_not_postpone_the_transition() {
    let renderer = Arc::new(RecordingRenderer::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut mover = MovePlayerUseCase::new(renderer.clone())
        .with_progression(wired(renderer.clone(), navigator.clone()));
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1"]), ("level_2", &["zone_2"])],
    )
    .select(None, None)
    .unwrap();

    mover.execute(&mut state, "right").await.unwrap();
    let first = mover.execute(&mut state, "right").await.unwrap();
    assert_eq!(first.progression.kind(), "level");

    tokio::time::sleep(Duration::from_millis(1500)).await;
    mover.execute(&mut state, "left").await.unwrap();
    let again = mover.execute(&mut state, "right").await.unwrap();
    assert!(again.success);
    assert!(again.progression.is_none());

    tokio::time::sleep(Duration::from_millis(600)).await;
    tokio::task::yield_now().await;
    assert_eq!(
        *navigator.calls.lock().unwrap(),
        [("test".to_string(), "level_2".to_string())]
    );
    let completions = renderer
        .messages()
        .iter()
        .filter(|m| m.as_str() == "Level Complete!")
        .count();
    assert_eq!(completions, 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_use_case_cancels_the_transition() {
    let renderer = Arc::new(RecordingRenderer::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let mut progression = wired(renderer.clone(), navigator.clone());
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1"]), ("level_2", &["zone_2"])],
    )
    .select(None, None)
    .unwrap();

    let mover = MovePlayerUseCase::new(renderer.clone());
    mover.execute_sync(&mut state, "right").unwrap();
    mover.execute_sync(&mut state, "right").unwrap();
    progression.execute(&mut state).await.unwrap();
    assert!(progression.scheduler().is_pending());

    drop(progression);
    tokio::time::sleep(DELAY * 2).await;
    assert!(navigator.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sync_execution_never_progresses() {
    let renderer = Arc::new(RecordingRenderer::default());
    let mover = MovePlayerUseCase::new(renderer.clone());
    let mut state = selector(
        vec![zone("zone_1"), zone("zone_2")],
        &[("level_1", &["zone_1", "zone_2"])],
    )
    .select(None, None)
    .unwrap();

    mover.execute_sync(&mut state, "right").unwrap();
    let outcome = mover.execute_sync(&mut state, "right").unwrap();
    assert!(outcome.success);
    assert!(outcome.progression.is_none());
    assert_eq!(state.current_zone_id(), "zone_1");
    assert!(state.should_progress_to_next_zone());
}
