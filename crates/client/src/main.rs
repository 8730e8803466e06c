//! Terminal client for Vim Quest.
mod app;
mod config;
mod input;
mod presentation;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use directories::ProjectDirs;
use runtime::RuntimeConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CliConfig;
use crate::presentation::{EventLoop, Screen, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();
    setup_logging(&runtime_config.session_id)?;

    // Content errors surface before the terminal switches to raw mode.
    let content = app::load_content(&runtime_config)?;

    let tui = terminal::init()?;
    let _guard = terminal::TerminalGuard;
    let screen = Arc::new(Screen::new(tui, &cli_config));

    let (session, commands) =
        app::build_session(&content, &runtime_config, &cli_config, screen.clone())?;
    EventLoop::new(session, commands, screen).run().await
}

/// Logs go to a per-session file; the terminal belongs to the UI.
fn setup_logging(session_id: &str) -> Result<()> {
    let session_log_dir = log_directory().join(session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // The writer must outlive every log call.
    std::mem::forget(guard);

    tracing::info!(dir = %session_log_dir.display(), "logging initialized");
    Ok(())
}

/// `VIM_QUEST_LOG_DIR`, else the platform data directory.
fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("VIM_QUEST_LOG_DIR").filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("", "", "vim-quest")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("vim-quest").join("logs"))
}
