use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::api::{Cutscene, CutsceneKey, CutsceneService, Result};

/// Stories registered up front; "shown" marks live for the process lifetime.
#[derive(Default)]
pub struct InMemoryCutsceneService {
    stories: HashMap<CutsceneKey, Cutscene>,
    shown: Mutex<HashSet<CutsceneKey>>,
}

impl InMemoryCutsceneService {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_story(mut self, key: CutsceneKey, cutscene: Cutscene) -> Self {
        self.stories.insert(key, cutscene);
        self
    }

    /// Stories for the builtin `vim_quest` game.
    pub fn builtin() -> Self {
        let story = |title: &str, lines: &[&str]| Cutscene {
            title: title.to_string(),
            script: lines.iter().map(|line| line.to_string()).collect(),
        };

        Self::new()
            .with_story(
                CutsceneKey::zone_entry("vim_quest", "level_1", "riverbank"),
                story(
                    "The River",
                    &[
                        "A wide river blocks the way.",
                        "Only vertical motion will carry you across.",
                    ],
                ),
            )
            .with_story(
                CutsceneKey::level_complete("vim_quest", "level_1"),
                story("First Steps", &["h, j, k and l are yours now."]),
            )
            .with_story(
                CutsceneKey::zone_entry("vim_quest", "level_2", "summit"),
                story(
                    "The Summit",
                    &["The air is thin up here.", "Press ESC at the gate when you are ready."],
                ),
            )
            .with_story(
                CutsceneKey::level_complete("vim_quest", "level_2"),
                story("Word Motions", &["Words are no longer obstacles."]),
            )
    }
}

#[async_trait]
impl CutsceneService for InMemoryCutsceneService {
    async fn should_show(&self, key: &CutsceneKey) -> Result<bool> {
        Ok(self.stories.contains_key(key) && !self.shown.lock().await.contains(key))
    }

    async fn story(&self, key: &CutsceneKey) -> Result<Option<Cutscene>> {
        Ok(self.stories.get(key).cloned())
    }

    async fn mark_shown(&self, key: &CutsceneKey) -> Result<()> {
        self.shown.lock().await.insert(key.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shown_once() {
        let service = InMemoryCutsceneService::builtin();
        let key = CutsceneKey::zone_entry("vim_quest", "level_1", "riverbank");

        assert!(service.should_show(&key).await.unwrap());
        assert!(service.story(&key).await.unwrap().is_some());
        service.mark_shown(&key).await.unwrap();
        assert!(!service.should_show(&key).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_story_is_not_shown() {
        let service = InMemoryCutsceneService::new();
        let key = CutsceneKey::level_complete("g", "l");
        assert!(!service.should_show(&key).await.unwrap());
        assert_eq!(service.story(&key).await.unwrap(), None);
    }
}
