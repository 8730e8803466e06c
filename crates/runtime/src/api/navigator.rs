use async_trait::async_trait;

use super::errors::Result;

/// Moves the session to another level once the current one is finished.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate_to_level(&self, game_id: &str, level_id: &str) -> Result<()>;
}
