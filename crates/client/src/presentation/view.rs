//! Shared view model and the screen that draws it.
//!
//! The runtime calls into [`crate::presentation::TuiRenderer`] from inside the
//! session's use cases, so the latest frame lives behind a mutex that both the
//! renderer and the event loop can reach.
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use game_core::{StateSnapshot, VimKey};
use ratatui::{Terminal, backend::Backend};

use super::message::{MessageEntry, MessageLog};
use super::ui;
use crate::config::CliConfig;

/// Cutscene currently on screen; `revealed` lines of `lines` are visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutsceneView {
    pub title: String,
    pub lines: Vec<String>,
    pub revealed: usize,
}

impl CutsceneView {
    pub fn visible_lines(&self) -> &[String] {
        &self.lines[..self.revealed.min(self.lines.len())]
    }
}

#[derive(Clone, Debug)]
pub struct ViewModel {
    pub snapshot: Option<StateSnapshot>,
    pub messages: MessageLog,
    pub last_key: Option<VimKey>,
    pub cutscene: Option<CutsceneView>,
}

impl ViewModel {
    pub fn new(message_capacity: usize) -> Self {
        Self {
            snapshot: None,
            messages: MessageLog::new(message_capacity),
            last_key: None,
            cutscene: None,
        }
    }

    pub fn push_message(&mut self, entry: MessageEntry) {
        self.messages.push(entry);
    }
}

pub struct Screen<B: Backend> {
    terminal: Mutex<Terminal<B>>,
    view: Mutex<ViewModel>,
    message_panel_height: u16,
}

impl<B: Backend> Screen<B> {
    pub fn new(terminal: Terminal<B>, config: &CliConfig) -> Self {
        Self {
            terminal: Mutex::new(terminal),
            view: Mutex::new(ViewModel::new(config.messages.capacity)),
            message_panel_height: config.messages.panel_height,
        }
    }

    pub fn update<R>(&self, apply: impl FnOnce(&mut ViewModel) -> R) -> R {
        apply(&mut lock(&self.view))
    }

    #[cfg(test)]
    pub fn view(&self) -> ViewModel {
        lock(&self.view).clone()
    }

    pub fn draw(&self) -> Result<()> {
        let view = lock(&self.view);
        let mut terminal = lock(&self.terminal);
        terminal.draw(|frame| ui::render_frame(frame, &view, self.message_panel_height))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        lock(&self.terminal).clear()?;
        Ok(())
    }
}

// A panic while drawing leaves the view intact, so keep using it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
