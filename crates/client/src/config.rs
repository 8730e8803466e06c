//! Client-side presentation settings.
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct CliConfig {
    pub messages: MessageConfig,
    pub cutscene_line_delay_ms: u64,
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub panel_height: u16,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            messages: MessageConfig {
                capacity: 64,
                panel_height: 7,
            },
            cutscene_line_delay_ms: 900,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `CLI_MESSAGE_CAPACITY`
    /// - `CLI_MESSAGE_PANEL_HEIGHT`
    /// - `CLI_CUTSCENE_LINE_DELAY_MS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        // Two rows go to the panel border.
        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.messages.panel_height = height.max(3);
        }

        if let Some(delay) = read_env::<u64>("CLI_CUTSCENE_LINE_DELAY_MS") {
            config.cutscene_line_delay_ms = delay;
        }

        config
    }

    pub fn cutscene_line_delay(&self) -> Duration {
        Duration::from_millis(self.cutscene_line_delay_ms)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
