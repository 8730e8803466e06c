//! Wires content, runtime use cases and the terminal screen into a session.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::{Content, ContentFactory};
use ratatui::backend::Backend;
use runtime::{
    CutsceneHooks, GameSession, HandleProgressionUseCase, InMemoryCutsceneService,
    MentorDialogueService, MovePlayerUseCase, NpcInteractionUseCase, Renderer, RuntimeConfig,
    SelectGameUseCase, SessionCommand, SessionNavigator, TransitionScheduler,
};
use tokio::sync::mpsc;
use tracing::info;

use crate::config::CliConfig;
use crate::presentation::{Screen, TerminalCutscenePlayer, TuiRenderer};

pub fn load_content(config: &RuntimeConfig) -> Result<Content> {
    match &config.content_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading content from directory");
            ContentFactory::from_dir(dir)
                .with_context(|| format!("failed to load content from {}", dir.display()))
        }
        None => ContentFactory::builtin().context("failed to load builtin content"),
    }
}

/// Builds a session drawing to `screen`, plus the receiver for the
/// navigation commands its delayed level transitions emit.
pub fn build_session<B>(
    content: &Content,
    runtime: &RuntimeConfig,
    cli: &CliConfig,
    screen: Arc<Screen<B>>,
) -> Result<(GameSession, mpsc::Receiver<SessionCommand>)>
where
    B: Backend + Send + 'static,
{
    let renderer: Arc<dyn Renderer> = Arc::new(TuiRenderer::new(screen.clone()));
    let dialogue = Arc::new(MentorDialogueService::new());
    let (navigator, commands) = SessionNavigator::channel(runtime.command_buffer_size);

    let scheduler = TransitionScheduler::new(Arc::new(navigator), runtime.level_transition_delay());
    let progression = HandleProgressionUseCase::new(renderer.clone(), scheduler)
        .with_cutscenes(CutsceneHooks {
            service: Arc::new(InMemoryCutsceneService::builtin()),
            player: Arc::new(TerminalCutscenePlayer::new(screen, cli.cutscene_line_delay())),
        })
        .with_dialogue_service(dialogue.clone());

    let npc_interaction =
        NpcInteractionUseCase::new(renderer.clone()).with_dialogue_service(dialogue);
    let mover = MovePlayerUseCase::new(renderer)
        .with_npc_interaction(npc_interaction)
        .with_progression(progression);

    let selector = SelectGameUseCase::new(content.levels(), content.zones.clone());
    let session = GameSession::start(
        selector,
        mover,
        runtime.game_id.as_deref(),
        runtime.level_id.as_deref(),
    )?;

    info!(
        game = %session.state().game_id(),
        level = %session.state().level_id(),
        "session started"
    );
    Ok((session, commands))
}
