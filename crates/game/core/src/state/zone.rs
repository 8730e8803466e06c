//! Zone aggregate: one playable area.
//!
//! A zone is the single owner of its key state. Keys move from "available" to
//! "collected" exactly once and never come back, so for every zone
//! `available_keys().len() + collected_keys().len() == total_keys()`.

use std::collections::HashSet;
use std::sync::Arc;

use crate::env::{CompletionRule, ConfigError, GameMap, GridMap, ZoneSpec, to_position};
use crate::state::{CollectibleKey, Gate, Npc, Position, SecondaryGate, VimKey};

/// Free-floating text drawn on the map (signposts, hints).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLabel {
    pub text: String,
    pub position: Position,
}

#[derive(Clone)]
pub struct Zone {
    id: String,
    name: String,
    description: String,
    map: Arc<dyn GameMap>,
    cursor_start: Position,
    available_keys: Vec<VimKey>,
    collected_keys: Vec<VimKey>,
    available_collectibles: Vec<CollectibleKey>,
    collected_collectibles: Vec<CollectibleKey>,
    gate: Gate,
    secondary_gates: Vec<SecondaryGate>,
    npcs: Vec<Npc>,
    text_labels: Vec<TextLabel>,
    completion: CompletionRule,
    requires_explicit_confirmation: bool,
}

impl std::fmt::Debug for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Zone")
            .field("id", &self.id)
            .field("dimensions", &self.map.dimensions())
            .field("available_keys", &self.available_keys.len())
            .field("collected_keys", &self.collected_keys.len())
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        map: Arc<dyn GameMap>,
        cursor_start: Position,
        gate_position: Position,
    ) -> Self {
        let mut zone = Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            map,
            cursor_start,
            available_keys: Vec::new(),
            collected_keys: Vec::new(),
            available_collectibles: Vec::new(),
            collected_collectibles: Vec::new(),
            gate: Gate::closed(gate_position),
            secondary_gates: Vec::new(),
            npcs: Vec::new(),
            text_labels: Vec::new(),
            completion: CompletionRule::AllKeys,
            requires_explicit_confirmation: false,
        };
        zone.reset_gate();
        zone
    }

    /// Builds a fresh zone from authored content, validating it on the way.
    pub fn from_spec(spec: &ZoneSpec) -> Result<Self, ConfigError> {
        let map = GridMap::from_rows(&spec.map.rows, &spec.map.legend)?;
        let bounds = map.dimensions();
        let check = |what: &'static str, position: Position| {
            if bounds.contains(position) {
                Ok(position)
            } else {
                Err(ConfigError::OutOfBounds {
                    zone: spec.id.clone(),
                    what,
                    position,
                })
            }
        };

        let cursor_start = check("cursor start", to_position(spec.cursor_start))?;
        let gate_position = check("gate", to_position(spec.gate))?;

        let secondary_gates = spec
            .secondary_gates
            .iter()
            .map(|g| {
                let position = check("secondary gate", to_position(g.position))?;
                Ok(SecondaryGate::new(position, g.cost))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        // Pickups must sit on ground the cursor can stand on, never on the gate.
        let reachable = |what: &'static str, position: Position| {
            let position = check(what, position)?;
            let behind_secondary_gate = secondary_gates.iter().any(|g| g.position() == position);
            if position != gate_position && (map.is_walkable(position) || behind_secondary_gate) {
                Ok(position)
            } else {
                Err(ConfigError::UnreachablePickup {
                    zone: spec.id.clone(),
                    what,
                    position,
                })
            }
        };

        let mut seen = HashSet::new();
        let mut keys = Vec::with_capacity(spec.keys.len());
        for key in &spec.keys {
            if !seen.insert(key.key.as_str()) {
                return Err(ConfigError::DuplicateKey {
                    zone: spec.id.clone(),
                    key: key.key.clone(),
                });
            }
            let position = reachable("key", to_position(key.position))?;
            keys.push(VimKey::new(&key.key, &key.name, &key.description, position));
        }

        let collectibles = spec
            .collectible_keys
            .iter()
            .map(|c| {
                let position = reachable("collectible key", to_position(c.position))?;
                Ok(CollectibleKey::new(&c.id, position))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let npcs = spec
            .npcs
            .iter()
            .map(|n| {
                let position = check("npc", to_position(n.position))?;
                let npc = Npc::new(&n.id, &n.name, position, n.kind.clone());
                Ok(npc.with_dialogue(n.dialogue.clone()))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let text_labels = spec
            .text_labels
            .iter()
            .map(|label| TextLabel {
                text: label.text.clone(),
                position: to_position(label.position),
            })
            .collect();

        let mut zone = Self::new(&spec.id, &spec.name, Arc::new(map), cursor_start, gate_position)
            .with_description(&spec.description)
            .with_keys(keys)
            .with_collectible_keys(collectibles)
            .with_secondary_gates(secondary_gates)
            .with_npcs(npcs)
            .with_text_labels(text_labels)
            .with_completion(spec.completion);
        zone.requires_explicit_confirmation = spec.requires_explicit_confirmation;
        Ok(zone)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_keys(mut self, keys: Vec<VimKey>) -> Self {
        self.available_keys = keys;
        self.collected_keys.clear();
        self.reset_gate();
        self
    }

    #[must_use]
    pub fn with_collectible_keys(mut self, keys: Vec<CollectibleKey>) -> Self {
        self.available_collectibles = keys;
        self
    }

    #[must_use]
    pub fn with_secondary_gates(mut self, gates: Vec<SecondaryGate>) -> Self {
        self.secondary_gates = gates;
        self
    }

    #[must_use]
    pub fn with_npcs(mut self, npcs: Vec<Npc>) -> Self {
        self.npcs = npcs;
        self
    }

    #[must_use]
    pub fn with_text_labels(mut self, labels: Vec<TextLabel>) -> Self {
        self.text_labels = labels;
        self
    }

    #[must_use]
    pub fn with_completion(mut self, completion: CompletionRule) -> Self {
        self.completion = completion;
        self.reset_gate();
        self
    }

    #[must_use]
    pub fn requiring_explicit_confirmation(mut self) -> Self {
        self.requires_explicit_confirmation = true;
        self
    }

    /// Under [`CompletionRule::AllKeys`] a zone without keys has nothing to
    /// unlock, so its gate starts open.
    fn reset_gate(&mut self) {
        let mut gate = Gate::closed(self.gate.position());
        if self.available_keys.is_empty() && self.gate_opens_with_last_key() {
            gate.open();
        }
        self.gate = gate;
    }

    fn gate_opens_with_last_key(&self) -> bool {
        self.completion == CompletionRule::AllKeys
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn map(&self) -> &Arc<dyn GameMap> {
        &self.map
    }

    pub fn cursor_start_position(&self) -> Position {
        self.cursor_start
    }

    pub fn available_keys(&self) -> &[VimKey] {
        &self.available_keys
    }

    pub fn collected_keys(&self) -> &[VimKey] {
        &self.collected_keys
    }

    pub fn total_keys(&self) -> usize {
        self.available_keys.len() + self.collected_keys.len()
    }

    pub fn has_collected(&self, identity: &str) -> bool {
        self.collected_keys.iter().any(|k| k.identity() == identity)
    }

    pub fn available_collectible_keys(&self) -> &[CollectibleKey] {
        &self.available_collectibles
    }

    /// Collected collectible keys that have not been spent yet.
    pub fn collected_collectible_keys(&self) -> &[CollectibleKey] {
        &self.collected_collectibles
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    pub fn secondary_gates(&self) -> &[SecondaryGate] {
        &self.secondary_gates
    }

    pub fn active_npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn text_labels(&self) -> &[TextLabel] {
        &self.text_labels
    }

    pub fn requires_explicit_confirmation(&self) -> bool {
        self.requires_explicit_confirmation
    }

    pub fn key_at(&self, position: Position) -> Option<&VimKey> {
        self.available_keys.iter().find(|k| k.position == position)
    }

    pub fn collectible_key_at(&self, position: Position) -> Option<&CollectibleKey> {
        self.available_collectibles
            .iter()
            .find(|k| k.position == position)
    }

    /// First NPC standing on `position`.
    pub fn npc_at(&self, position: Position) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.position == position)
    }

    /// Moves `key` from available to collected.
    ///
    /// Returns `None` (and changes nothing) when the key is not currently
    /// available, including keys that were already collected. Under
    /// [`CompletionRule::AllKeys`] collecting the last key opens the gate.
    pub fn collect_key(&mut self, key: &VimKey) -> Option<VimKey> {
        let index = self.available_keys.iter().position(|k| k == key)?;
        let collected = self.available_keys.remove(index);
        self.collected_keys.push(collected.clone());
        if self.available_keys.is_empty() && self.gate_opens_with_last_key() {
            self.gate.open();
        }
        Some(collected)
    }

    /// Opens a closed main gate once every key is collected.
    ///
    /// Returns `true` only when this call opened the gate.
    pub fn try_open_gate(&mut self) -> bool {
        if self.gate.is_open() || !self.available_keys.is_empty() {
            return false;
        }
        self.gate.open();
        true
    }

    pub fn collect_collectible_key(&mut self, key: &CollectibleKey) -> Option<CollectibleKey> {
        let index = self.available_collectibles.iter().position(|k| k == key)?;
        let collected = self.available_collectibles.remove(index);
        self.collected_collectibles.push(collected.clone());
        Some(collected)
    }

    pub fn is_complete(&self) -> bool {
        let keys_done = self.available_keys.is_empty();
        match self.completion {
            CompletionRule::AllKeys => keys_done,
            CompletionRule::AllKeysAndGateOpen => keys_done && self.gate.is_open(),
        }
    }

    /// Whether the cursor may stand on `position`.
    ///
    /// A gate (main or secondary) decides on its own open state and ignores
    /// the tile beneath; everything else defers to the map.
    pub fn is_walkable(&self, position: Position) -> bool {
        if !self.map.is_valid_position(position) {
            return false;
        }
        if self.gate.position() == position {
            return self.gate.is_walkable();
        }
        if let Some(gate) = self.secondary_gates.iter().find(|g| g.position() == position) {
            return gate.is_walkable();
        }
        self.map.is_walkable(position)
    }

    /// Spends collectible keys to open the closed secondary gate at `position`.
    pub fn try_unlock_secondary_gate(&mut self, position: Position) -> bool {
        let Some(gate) = self
            .secondary_gates
            .iter_mut()
            .find(|g| g.position() == position && !g.is_open())
        else {
            return false;
        };

        let cost = gate.cost() as usize;
        if self.collected_collectibles.len() < cost {
            return false;
        }

        gate.open();
        self.collected_collectibles = self.collected_collectibles.split_off(cost);
        true
    }

    /// Releases per-zone presentation data once the player has left.
    pub fn cleanup(&mut self) {
        self.npcs.clear();
        self.text_labels.clear();
    }
}
