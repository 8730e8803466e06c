use std::collections::HashMap;

use game_core::{ConfigError, Zone, ZoneProvider, ZoneSpec};

/// Zone specs keyed by id. Implements [`ZoneProvider`] for `GameState`.
#[derive(Clone, Debug, Default)]
pub struct ZoneRegistry {
    specs: HashMap<String, ZoneSpec>,
    order: Vec<String>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry, rejecting specs that would not produce a valid zone.
    pub fn from_specs(specs: impl IntoIterator<Item = ZoneSpec>) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec)?;
        }
        Ok(registry)
    }

    /// Adds or replaces a zone spec after validating it.
    pub fn register(&mut self, spec: ZoneSpec) -> Result<(), ConfigError> {
        Zone::from_spec(&spec)?;
        if !self.specs.contains_key(&spec.id) {
            self.order.push(spec.id.clone());
        } else {
            tracing::debug!(zone = %spec.id, "replacing zone spec");
        }
        self.specs.insert(spec.id.clone(), spec);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl ZoneProvider for ZoneRegistry {
    fn create_zone(&self, zone_id: &str) -> Result<Zone, ConfigError> {
        let spec = self
            .specs
            .get(zone_id)
            .ok_or_else(|| ConfigError::UnknownZone(zone_id.to_string()))?;
        Zone::from_spec(spec)
    }

    fn zone_config(&self, zone_id: &str) -> Option<&ZoneSpec> {
        self.specs.get(zone_id)
    }

    fn available_zone_ids(&self) -> Vec<String> {
        self.order.clone()
    }
}
