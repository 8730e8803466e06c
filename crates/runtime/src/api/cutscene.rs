//! Cutscene lookup and playback.
//!
//! Both collaborators are best-effort: the progression flow logs and skips any
//! error they return.
use async_trait::async_trait;
use strum::Display;

use super::errors::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CutsceneKind {
    ZoneEntry,
    LevelComplete,
}

/// Identifies one story: a level-complete story has no zone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CutsceneKey {
    pub game_id: String,
    pub kind: CutsceneKind,
    pub level_id: String,
    pub zone_id: Option<String>,
}

impl CutsceneKey {
    pub fn zone_entry(
        game_id: impl Into<String>,
        level_id: impl Into<String>,
        zone_id: impl Into<String>,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            kind: CutsceneKind::ZoneEntry,
            level_id: level_id.into(),
            zone_id: Some(zone_id.into()),
        }
    }

    pub fn level_complete(game_id: impl Into<String>, level_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            kind: CutsceneKind::LevelComplete,
            level_id: level_id.into(),
            zone_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cutscene {
    pub title: String,
    pub script: Vec<String>,
}

#[async_trait]
pub trait CutsceneService: Send + Sync {
    async fn should_show(&self, key: &CutsceneKey) -> Result<bool>;

    async fn story(&self, key: &CutsceneKey) -> Result<Option<Cutscene>>;

    async fn mark_shown(&self, key: &CutsceneKey) -> Result<()>;
}

#[async_trait]
pub trait CutscenePlayer: Send + Sync {
    /// Resolves once playback has finished.
    async fn play(&self, cutscene: &Cutscene) -> Result<()>;
}
