//! [`Renderer`] implementation backed by the terminal screen.
use std::sync::Arc;

use game_core::{Npc, StateSnapshot, VimKey};
use ratatui::backend::Backend;
use runtime::{MessageKind, MessageOptions, Renderer};
use tracing::warn;

use super::message::MessageEntry;
use super::view::Screen;

pub struct TuiRenderer<B: Backend> {
    screen: Arc<Screen<B>>,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(screen: Arc<Screen<B>>) -> Self {
        Self { screen }
    }
}

impl<B> Renderer for TuiRenderer<B>
where
    B: Backend + Send + 'static,
{
    fn render(&self, snapshot: &StateSnapshot) {
        self.screen.update(|view| view.snapshot = Some(snapshot.clone()));
        if let Err(err) = self.screen.draw() {
            warn!(error = %err, "failed to draw frame");
        }
    }

    fn show_key_info(&self, key: &VimKey) {
        self.screen.update(|view| {
            view.push_message(MessageEntry::new(
                format!("Collected '{}' ({}): {}", key.key, key.name, key.description),
                MessageKind::Success,
            ));
            view.last_key = Some(key.clone());
        });
    }

    fn show_message(&self, text: &str, options: MessageOptions) {
        self.screen.update(|view| {
            view.push_message(MessageEntry::new(text, options.kind).with_speaker(options.speaker))
        });
    }

    fn show_npc_dialogue(&self, npc: &Npc, lines: &[String]) {
        self.screen.update(|view| {
            for line in lines {
                view.push_message(
                    MessageEntry::new(line.as_str(), MessageKind::Dialogue)
                        .with_speaker(Some(npc.name.clone())),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use game_core::{NpcKind, Position};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::CliConfig;

    fn renderer() -> (Arc<Screen<TestBackend>>, TuiRenderer<TestBackend>) {
        let terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");
        let screen = Arc::new(Screen::new(terminal, &CliConfig::default()));
        (screen.clone(), TuiRenderer::new(screen))
    }

    #[test]
    fn key_info_is_logged_and_remembered() {
        let (screen, renderer) = renderer();
        let key = VimKey::new(
            "h",
            "Move left",
            "Moves the cursor one column left",
            Position::new(1, 1),
        );

        renderer.show_key_info(&key);

        let view = screen.view();
        assert_eq!(view.last_key, Some(key));
        let latest = view.messages.recent(1).next().expect("message");
        assert_eq!(latest.kind, MessageKind::Success);
        assert!(latest.text.contains("Move left"));
    }

    #[test]
    fn npc_dialogue_is_tagged_with_the_speaker() {
        let (screen, renderer) = renderer();
        let npc = Npc::new("mentor", "Mentor", Position::new(0, 0), NpcKind::Villager);

        renderer.show_npc_dialogue(&npc, &["Hi".to_string(), "Bye".to_string()]);

        let view = screen.view();
        let lines: Vec<_> = view.messages.recent(2).map(|m| m.display_text()).collect();
        assert_eq!(lines, vec!["Mentor: Bye", "Mentor: Hi"]);
    }
}
