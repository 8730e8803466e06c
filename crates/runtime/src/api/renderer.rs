//! Presentation sink consumed by the use cases.
use game_core::{Npc, StateSnapshot, VimKey};
use strum::Display;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Info,
    Success,
    Warning,
    Dialogue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub kind: MessageKind,
    pub speaker: Option<String>,
}

impl MessageOptions {
    pub fn kind(kind: MessageKind) -> Self {
        Self {
            kind,
            speaker: None,
        }
    }

    pub fn speaker(name: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Dialogue,
            speaker: Some(name.into()),
        }
    }
}

/// Draws game state and transient messages.
///
/// Calls are fire-and-forget; a renderer that cannot draw simply drops the
/// request.
pub trait Renderer: Send + Sync {
    fn render(&self, snapshot: &StateSnapshot);

    fn show_key_info(&self, key: &VimKey);

    fn show_message(&self, text: &str, options: MessageOptions);

    /// Defaults to one speaker-tagged message per line.
    fn show_npc_dialogue(&self, npc: &Npc, lines: &[String]) {
        for line in lines {
            self.show_message(line, MessageOptions::speaker(&npc.name));
        }
    }
}
