//! Level-based progression state machine.
//!
//! [`GameState`] is the single authoritative answer to "where is the player,
//! which zone and level are active, and what has been collected". Zones are
//! visited strictly in the order listed by the level; the zone index never
//! decreases and a zone is recorded as completed exactly when the player leaves
//! it through its gate.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::action::Direction;
use crate::env::{ConfigError, ZoneProvider};
use crate::state::{
    CollectibleKey, Cursor, LevelProgress, Position, ProgressionError, StateSnapshot, VimKey,
    Zone,
};

/// The ordered zones of one level plus the level that follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelPlan {
    pub game_id: String,
    pub level_id: String,
    pub zones: Vec<String>,
    pub next_level_id: Option<String>,
}

/// Result of [`GameState::execute_progression`]. At most one transition
/// happens per call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProgressionOutcome {
    #[default]
    None,
    /// The next zone has been loaded.
    Zone {
        previous_zone_id: String,
        new_zone_id: String,
    },
    /// The level is finished; loading the next one is up to the caller.
    Level {
        completed_level_id: String,
        next_level_id: String,
    },
}

impl ProgressionOutcome {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Zone { .. } => "zone",
            Self::Level { .. } => "level",
        }
    }
}

pub struct GameState {
    plan: LevelPlan,
    provider: Arc<dyn ZoneProvider>,
    current_zone_index: usize,
    completed_zones: BTreeSet<String>,
    esc_progression_pressed: HashSet<String>,
    zone: Zone,
    cursor: Cursor,
    /// Set once the level outcome has been emitted; a level completes once.
    level_completion_reported: bool,
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("plan", &self.plan)
            .field("current_zone_index", &self.current_zone_index)
            .field("completed_zones", &self.completed_zones)
            .field("zone", &self.zone)
            .field("cursor", &self.cursor)
            .field("level_completion_reported", &self.level_completion_reported)
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// Loads the first zone of `plan`.
    pub fn new(plan: LevelPlan, provider: Arc<dyn ZoneProvider>) -> Result<Self, ConfigError> {
        let first = plan
            .zones
            .first()
            .ok_or_else(|| ConfigError::EmptyLevel(plan.level_id.clone()))?;
        let zone = provider.create_zone(first)?;
        let cursor = Cursor::new(zone.cursor_start_position());

        Ok(Self {
            plan,
            provider,
            current_zone_index: 0,
            completed_zones: BTreeSet::new(),
            esc_progression_pressed: HashSet::new(),
            zone,
            cursor,
            level_completion_reported: false,
        })
    }

    // ===== queries =====

    pub fn game_id(&self) -> &str {
        &self.plan.game_id
    }

    pub fn level_id(&self) -> &str {
        &self.plan.level_id
    }

    pub fn zone_ids(&self) -> &[String] {
        &self.plan.zones
    }

    pub fn next_level_id(&self) -> Option<&str> {
        self.plan.next_level_id.as_deref()
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn current_zone_id(&self) -> &str {
        self.zone.id()
    }

    pub fn current_zone_index(&self) -> usize {
        self.current_zone_index
    }

    pub fn completed_zones(&self) -> &BTreeSet<String> {
        &self.completed_zones
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn available_keys(&self) -> &[VimKey] {
        self.zone.available_keys()
    }

    pub fn is_key_collected(&self, identity: &str) -> bool {
        self.zone.has_collected(identity)
    }

    pub fn is_cursor_at_gate(&self) -> bool {
        self.cursor.position() == self.zone.gate().position()
    }

    /// Whether the cursor may enter `position` (map tile, then gate override).
    pub fn is_walkable(&self, position: Position) -> bool {
        self.zone.is_walkable(position)
    }

    // ===== mutations =====

    /// Replaces the cursor after a move in `direction`.
    ///
    /// Horizontal moves update the remembered column; vertical moves keep it.
    pub fn move_cursor(&mut self, direction: Direction, position: Position) {
        self.cursor = if direction.is_vertical() {
            self.cursor.move_to_with_column_memory(position)
        } else {
            self.cursor.move_to(position, true)
        };
    }

    /// Collects `key` if it is currently available; a no-op otherwise.
    pub fn collect_key(&mut self, key: &VimKey) -> Option<VimKey> {
        self.zone.collect_key(key)
    }

    pub fn collect_collectible_key(&mut self, key: &CollectibleKey) -> Option<CollectibleKey> {
        self.zone.collect_collectible_key(key)
    }

    pub fn try_unlock_secondary_gate(&mut self, position: Position) -> bool {
        self.zone.try_unlock_secondary_gate(position)
    }

    pub fn try_open_gate(&mut self) -> bool {
        self.zone.try_open_gate()
    }

    /// Records the explicit confirmation gesture for the current zone.
    pub fn mark_esc_progression_pressed(&mut self) {
        self.esc_progression_pressed
            .insert(self.zone.id().to_string());
    }

    pub fn is_esc_progression_pressed(&self) -> bool {
        self.esc_progression_pressed.contains(self.zone.id())
    }

    // ===== progression rules =====

    pub fn is_current_zone_complete(&self) -> bool {
        self.zone.is_complete()
    }

    pub fn has_next_zone(&self) -> bool {
        self.current_zone_index + 1 < self.plan.zones.len()
    }

    /// True only on the last zone, once it is complete, and when every earlier
    /// zone was completed on the way here.
    pub fn is_level_complete(&self) -> bool {
        !self.has_next_zone()
            && self.is_current_zone_complete()
            && self.completed_zones.len() == self.current_zone_index
    }

    pub fn should_progress_to_next_zone(&self) -> bool {
        self.is_current_zone_complete() && self.has_next_zone() && self.is_cursor_at_gate()
    }

    /// Whether the level outcome was already emitted for this level.
    pub fn is_level_completion_reported(&self) -> bool {
        self.level_completion_reported
    }

    pub fn should_progress_to_next_level(&self) -> bool {
        !self.level_completion_reported
            && self.is_level_complete()
            && self.is_cursor_at_gate()
            && self.plan.next_level_id.is_some()
            && (!self.zone.requires_explicit_confirmation() || self.is_esc_progression_pressed())
    }

    /// Leaves the current zone through its gate and loads the next one.
    ///
    /// Key state does not carry over: the new zone starts with all of its keys
    /// available and the cursor at its start position.
    pub fn progress_to_next_zone(&mut self) -> Result<(), ProgressionError> {
        if !self.is_current_zone_complete() {
            return Err(ProgressionError::ZoneIncomplete {
                zone_id: self.zone.id().to_string(),
            });
        }
        if !self.has_next_zone() {
            return Err(ProgressionError::NoNextZone {
                zone_id: self.zone.id().to_string(),
                level_id: self.plan.level_id.clone(),
            });
        }

        let next_id = &self.plan.zones[self.current_zone_index + 1];
        let next_zone = self.provider.create_zone(next_id)?;

        self.completed_zones.insert(self.zone.id().to_string());
        self.current_zone_index += 1;
        let mut previous = std::mem::replace(&mut self.zone, next_zone);
        previous.cleanup();
        self.cursor = Cursor::new(self.zone.cursor_start_position());
        Ok(())
    }

    /// Performs at most one transition, trying the zone before the level.
    pub fn execute_progression(&mut self) -> Result<ProgressionOutcome, ProgressionError> {
        if self.should_progress_to_next_zone() {
            let previous_zone_id = self.zone.id().to_string();
            self.progress_to_next_zone()?;
            return Ok(ProgressionOutcome::Zone {
                previous_zone_id,
                new_zone_id: self.zone.id().to_string(),
            });
        }

        if !self.should_progress_to_next_level() {
            return Ok(ProgressionOutcome::None);
        }

        Ok(match self.plan.next_level_id.clone() {
            Some(next_level_id) => {
                self.level_completion_reported = true;
                ProgressionOutcome::Level {
                    completed_level_id: self.plan.level_id.clone(),
                    next_level_id,
                }
            }
            None => ProgressionOutcome::None,
        })
    }

    // ===== presentation =====

    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress {
            zone_index: self.current_zone_index,
            zone_count: self.plan.zones.len(),
            completed_zones: self.completed_zones.len(),
            keys_collected: self.zone.collected_keys().len(),
            keys_total: self.zone.total_keys(),
            level_complete: self.is_level_complete(),
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        let zone = &self.zone;
        StateSnapshot {
            game_id: self.plan.game_id.clone(),
            level_id: self.plan.level_id.clone(),
            zone_id: zone.id().to_string(),
            zone_name: zone.name().to_string(),
            zone_description: zone.description().to_string(),
            map: Arc::clone(zone.map()),
            cursor: self.cursor,
            available_keys: zone.available_keys().to_vec(),
            collected_keys: zone
                .collected_keys()
                .iter()
                .map(|k| k.identity().to_string())
                .collect(),
            collectible_keys: zone.available_collectible_keys().to_vec(),
            collectible_keys_held: zone.collected_collectible_keys().len(),
            text_labels: zone.text_labels().to_vec(),
            gate: *zone.gate(),
            secondary_gates: zone.secondary_gates().to_vec(),
            npcs: zone.active_npcs().to_vec(),
            progress: self.level_progress(),
        }
    }
}
