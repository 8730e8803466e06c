use crate::env::{ConfigError, ZoneInfo, ZoneSpec};
use crate::state::Zone;

/// Constructs zones by id.
///
/// Every call to [`ZoneProvider::create_zone`] returns a fresh zone with all
/// keys available and all gates closed; the caller owns it exclusively.
pub trait ZoneProvider: Send + Sync {
    fn create_zone(&self, zone_id: &str) -> Result<Zone, ConfigError>;

    fn zone_config(&self, zone_id: &str) -> Option<&ZoneSpec>;

    fn has_zone(&self, zone_id: &str) -> bool {
        self.zone_config(zone_id).is_some()
    }

    fn available_zone_ids(&self) -> Vec<String>;

    fn all_zone_info(&self) -> Vec<ZoneInfo> {
        self.available_zone_ids()
            .iter()
            .filter_map(|id| self.zone_config(id))
            .map(ZoneInfo::from)
            .collect()
    }
}
