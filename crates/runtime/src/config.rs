//! Runtime configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use game_core::GameConfig;

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// `None` starts the registry's default game.
    pub game_id: Option<String>,
    /// `None` starts the game's default level.
    pub level_id: Option<String>,
    /// `None` uses the content compiled into the binary.
    pub content_dir: Option<PathBuf>,
    pub session_id: String,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            game_id: None,
            level_id: None,
            content_dir: None,
            session_id: format!("session-{}", std::process::id()),
            command_buffer_size: 16,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `VIM_QUEST_GAME` / `VIM_QUEST_LEVEL`
    /// - `VIM_QUEST_CONTENT_DIR`
    /// - `LEVEL_TRANSITION_DELAY_MS`
    /// - `GAME_SESSION_ID`
    /// - `COMMAND_BUFFER`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.game_id = read_env::<String>("VIM_QUEST_GAME");
        config.level_id = read_env::<String>("VIM_QUEST_LEVEL");
        config.content_dir = read_env::<PathBuf>("VIM_QUEST_CONTENT_DIR");

        if let Some(delay) = read_env::<u64>("LEVEL_TRANSITION_DELAY_MS") {
            config.game_config = GameConfig::with_level_transition_delay_ms(delay);
        }

        if let Some(session_id) = read_env::<String>("GAME_SESSION_ID") {
            config.session_id = session_id;
        }

        if let Some(capacity) = read_env::<usize>("COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        config
    }

    pub fn level_transition_delay(&self) -> Duration {
        Duration::from_millis(self.game_config.level_transition_delay_ms)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
