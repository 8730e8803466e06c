//! Main loop: keyboard input and delayed navigation commands.
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use game_core::GameError;
use ratatui::backend::Backend;
use runtime::{GameSession, MessageKind, RuntimeError, SessionCommand};
use tokio::{sync::mpsc, time};
use tracing::{debug, info, warn};

use super::message::MessageEntry;
use super::view::Screen;
use crate::input::{InputHandler, KeyAction};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct EventLoop<B: Backend> {
    session: GameSession,
    commands: mpsc::Receiver<SessionCommand>,
    screen: Arc<Screen<B>>,
    input: InputHandler,
}

impl<B: Backend> EventLoop<B> {
    pub fn new(
        session: GameSession,
        commands: mpsc::Receiver<SessionCommand>,
        screen: Arc<Screen<B>>,
    ) -> Self {
        Self {
            session,
            commands,
            screen,
            input: InputHandler::new(),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        self.screen.draw()?;

        loop {
            tokio::select! {
                Some(command) = self.commands.recv() => {
                    self.handle_command(command);
                    self.screen.draw()?;
                }
                _ = time::sleep(FRAME_INTERVAL) => {
                    if self.poll_input().await? {
                        break;
                    }
                }
            }
        }

        info!("event loop exiting");
        Ok(())
    }

    fn handle_command(&mut self, command: SessionCommand) {
        debug!(?command, "navigation command");
        if let Err(err) = self.session.handle_command(command) {
            self.report(&err);
        }
    }

    /// Returns `true` when the player asked to quit.
    async fn poll_input(&mut self) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                match self.input.handle_key(key) {
                    KeyAction::Quit => return Ok(true),
                    KeyAction::Move(direction) => {
                        match self.session.handle_direction(direction.into()).await {
                            Ok(outcome) if !outcome.success => {
                                debug!(%direction, "move blocked");
                            }
                            Ok(_) => {}
                            Err(err) => self.report(&err),
                        }
                    }
                    KeyAction::Confirm => match self.session.confirm_progression().await {
                        Ok(outcome) => debug!(outcome = outcome.kind(), "confirmation handled"),
                        Err(err) => self.report(&err),
                    },
                    KeyAction::None => return Ok(false),
                }
            }
            TermEvent::Resize(_, _) => self.screen.clear()?,
            _ => return Ok(false),
        }

        self.screen.draw()?;
        Ok(false)
    }

    fn report(&self, err: &RuntimeError) {
        warn!(code = err.error_code(), error = %err, "session operation failed");
        self.screen.update(|view| {
            view.push_message(MessageEntry::new(err.to_string(), MessageKind::Warning))
        });
    }
}
