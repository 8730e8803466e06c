//! [`Navigator`] implementations.
//!
//! - [`SessionNavigator`] asks the owning session loop to load the level.
//! - [`UrlNavigator`] rewrites the `level` query parameter of a location and
//!   hands the result to a reload callback, for hosts that restart from a URL.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::api::{Navigator, Result, RuntimeError};

/// Commands consumed by the session loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    LoadLevel { game_id: String, level_id: String },
}

#[derive(Clone, Debug)]
pub struct SessionNavigator {
    commands: mpsc::Sender<SessionCommand>,
}

impl SessionNavigator {
    pub fn new(commands: mpsc::Sender<SessionCommand>) -> Self {
        Self { commands }
    }

    /// Creates a navigator together with the receiving end of its channel.
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<SessionCommand>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl Navigator for SessionNavigator {
    async fn navigate_to_level(&self, game_id: &str, level_id: &str) -> Result<()> {
        self.commands
            .send(SessionCommand::LoadLevel {
                game_id: game_id.to_string(),
                level_id: level_id.to_string(),
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}

type ReloadFn = dyn Fn(String) -> std::result::Result<(), String> + Send + Sync;

pub struct UrlNavigator {
    location: String,
    reload: Box<ReloadFn>,
}

impl UrlNavigator {
    pub fn new(
        location: impl Into<String>,
        reload: impl Fn(String) -> std::result::Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            location: location.into(),
            reload: Box::new(reload),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[async_trait]
impl Navigator for UrlNavigator {
    async fn navigate_to_level(&self, _game_id: &str, level_id: &str) -> Result<()> {
        let url = with_query_param(&self.location, "level", level_id);
        (self.reload)(url).map_err(|reason| RuntimeError::Navigation {
            level_id: level_id.to_string(),
            reason,
        })
    }
}

/// Sets `key=value` in the query of `url`, replacing any existing `key` and
/// preserving every other parameter and the fragment.
pub fn with_query_param(url: &str, key: &str, value: &str) -> String {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut params: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(key))
        .map(str::to_string)
        .collect();
    params.push(format!("{key}={value}"));

    let mut out = format!("{base}?{}", params.join("&"));
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
