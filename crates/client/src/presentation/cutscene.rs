//! Plays cutscenes as a popup over the map, one line at a time.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ratatui::backend::Backend;
use runtime::{Cutscene, CutscenePlayer, MessageKind, Result};
use tokio::time;
use tracing::{debug, warn};

use super::message::MessageEntry;
use super::view::{CutsceneView, Screen};

pub struct TerminalCutscenePlayer<B: Backend> {
    screen: Arc<Screen<B>>,
    line_delay: Duration,
}

impl<B: Backend> TerminalCutscenePlayer<B> {
    pub fn new(screen: Arc<Screen<B>>, line_delay: Duration) -> Self {
        Self { screen, line_delay }
    }

    fn redraw(&self) {
        if let Err(err) = self.screen.draw() {
            warn!(error = %err, "failed to draw cutscene");
        }
    }
}

#[async_trait]
impl<B> CutscenePlayer for TerminalCutscenePlayer<B>
where
    B: Backend + Send + 'static,
{
    async fn play(&self, cutscene: &Cutscene) -> Result<()> {
        debug!(title = %cutscene.title, lines = cutscene.script.len(), "playing cutscene");

        self.screen.update(|view| {
            view.cutscene = Some(CutsceneView {
                title: cutscene.title.clone(),
                lines: cutscene.script.clone(),
                revealed: 0,
            })
        });

        for revealed in 1..=cutscene.script.len() {
            self.screen.update(|view| {
                if let Some(scene) = view.cutscene.as_mut() {
                    scene.revealed = revealed;
                }
            });
            self.redraw();
            time::sleep(self.line_delay).await;
        }

        // Keep the story in the log once the popup is gone.
        self.screen.update(|view| {
            view.cutscene = None;
            view.push_message(MessageEntry::new(
                format!("~ {} ~", cutscene.title),
                MessageKind::Info,
            ));
        });
        self.redraw();
        Ok(())
    }
}
