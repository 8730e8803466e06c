//! Shared fixtures and recording doubles for runtime integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use game_content::{GameRegistry, LevelService, ZoneRegistry};
use game_core::env::{CollectibleKeySpec, KeySpec, MapSpec, NpcSpec, SecondaryGateSpec};
use game_core::{
    CompletionRule, GameDefinition, GameType, LevelDefinition, NpcKind, StateSnapshot, VimKey,
    ZoneSpec,
};
use runtime::{
    Cutscene, CutsceneKey, CutscenePlayer, CutsceneService, MessageOptions, Navigator, Renderer,
    Result, RuntimeError, SelectGameUseCase,
};

// ===== renderer =====

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    Frame { zone_id: String, cursor: (i32, i32) },
    KeyInfo(String),
    Message { text: String, speaker: Option<String> },
}

#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<Rendered>>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<Rendered> {
        self.events.lock().unwrap().clone()
    }

    pub fn frames(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Rendered::Frame { .. }))
            .count()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Rendered::Message { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, snapshot: &StateSnapshot) {
        self.events.lock().unwrap().push(Rendered::Frame {
            zone_id: snapshot.zone_id.clone(),
            cursor: (snapshot.cursor.position().x, snapshot.cursor.position().y),
        });
    }

    fn show_key_info(&self, key: &VimKey) {
        self.events
            .lock()
            .unwrap()
            .push(Rendered::KeyInfo(key.key.clone()));
    }

    fn show_message(&self, text: &str, options: MessageOptions) {
        self.events.lock().unwrap().push(Rendered::Message {
            text: text.to_string(),
            speaker: options.speaker,
        });
    }
}

// ===== navigator =====

#[derive(Default)]
pub struct RecordingNavigator {
    pub calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate_to_level(&self, game_id: &str, level_id: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((game_id.to_string(), level_id.to_string()));
        Ok(())
    }
}

// ===== cutscenes =====

#[derive(Default)]
pub struct RecordingPlayer {
    pub played: Mutex<Vec<String>>,
    /// Renderer events already emitted when each cutscene started.
    pub rendered_before: Mutex<Vec<Vec<Rendered>>>,
    renderer: Option<Arc<RecordingRenderer>>,
}

impl RecordingPlayer {
    pub fn watching(renderer: Arc<RecordingRenderer>) -> Self {
        Self {
            renderer: Some(renderer),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CutscenePlayer for RecordingPlayer {
    async fn play(&self, cutscene: &Cutscene) -> Result<()> {
        self.played.lock().unwrap().push(cutscene.title.clone());
        if let Some(renderer) = &self.renderer {
            self.rendered_before.lock().unwrap().push(renderer.events());
        }
        Ok(())
    }
}

pub struct FailingCutsceneService;

#[async_trait]
impl CutsceneService for FailingCutsceneService {
    async fn should_show(&self, _key: &CutsceneKey) -> Result<bool> {
        Err(RuntimeError::Cutscene("lookup failed".into()))
    }

    async fn story(&self, _key: &CutsceneKey) -> Result<Option<Cutscene>> {
        Err(RuntimeError::Cutscene("fetch failed".into()))
    }

    async fn mark_shown(&self, _key: &CutsceneKey) -> Result<()> {
        Ok(())
    }
}

// ===== content =====

/// Zone builder over a text map where `#` is wall and `.` is grass.
pub struct ZoneFixture {
    spec: ZoneSpec,
}

impl ZoneFixture {
    pub fn new(id: &str, rows: &[&str], start: (i32, i32), gate: (i32, i32)) -> Self {
        Self {
            spec: ZoneSpec {
                id: id.to_string(),
                name: id.to_string(),
                description: String::new(),
                map: MapSpec {
                    rows: rows.iter().map(|r| r.to_string()).collect(),
                    legend: HashMap::from([
                        ('.', "grass".to_string()),
                        ('#', "wall".to_string()),
                    ]),
                },
                cursor_start: start,
                keys: vec![],
                collectible_keys: vec![],
                gate,
                secondary_gates: vec![],
                npcs: vec![],
                text_labels: vec![],
                completion: Default::default(),
                requires_explicit_confirmation: false,
            },
        }
    }

    pub fn key(mut self, key: &str, position: (i32, i32)) -> Self {
        self.spec.keys.push(KeySpec {
            key: key.to_string(),
            name: key.to_uppercase(),
            description: String::new(),
            position,
        });
        self
    }

    pub fn collectible(mut self, id: &str, position: (i32, i32)) -> Self {
        self.spec.collectible_keys.push(CollectibleKeySpec {
            id: id.to_string(),
            position,
        });
        self
    }

    pub fn secondary_gate(mut self, position: (i32, i32), cost: u32) -> Self {
        self.spec
            .secondary_gates
            .push(SecondaryGateSpec { position, cost });
        self
    }

    pub fn npc(mut self, id: &str, position: (i32, i32), kind: NpcKind, lines: &[&str]) -> Self {
        self.spec.npcs.push(NpcSpec {
            id: id.to_string(),
            name: id.to_uppercase(),
            position,
            kind,
            dialogue: lines.iter().map(|l| l.to_string()).collect(),
        });
        self
    }

    pub fn completion(mut self, rule: CompletionRule) -> Self {
        self.spec.completion = rule;
        self
    }

    pub fn explicit_confirmation(mut self) -> Self {
        self.spec.requires_explicit_confirmation = true;
        self
    }

    pub fn build(self) -> ZoneSpec {
        self.spec
    }
}

/// `levels` are `(level_id, zone ids)` in play order for game `"test"`.
pub fn selector(zones: Vec<ZoneSpec>, levels: &[(&str, &[&str])]) -> SelectGameUseCase {
    let game = GameDefinition {
        id: "test".into(),
        name: "Test".into(),
        game_type: GameType::LevelBased,
        default_level: levels[0].0.to_string(),
        levels: levels
            .iter()
            .map(|(id, zones)| LevelDefinition {
                id: id.to_string(),
                name: id.to_string(),
                zones: zones.iter().map(|z| z.to_string()).collect(),
                description: String::new(),
            })
            .collect(),
        features: vec![],
    };
    let games = Arc::new(GameRegistry::new(vec![game], "test").unwrap());
    let zones = Arc::new(ZoneRegistry::from_specs(zones).unwrap());
    SelectGameUseCase::new(LevelService::new(games), zones)
}

pub const DELAY: Duration = Duration::from_millis(2000);
