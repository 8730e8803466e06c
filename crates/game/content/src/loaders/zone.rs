//! Zone definition loader.

use std::path::Path;

use game_core::ZoneSpec;

use crate::loaders::{LoadResult, read_file};

/// Loader for zone definitions from RON files.
pub struct ZoneLoader;

impl ZoneLoader {
    /// Load a single zone from a RON file.
    pub fn load(path: &Path) -> LoadResult<ZoneSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse zone {}: {}", path.display(), e))
    }

    /// Load every `*.ron` file in `dir`, sorted by file name.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<ZoneSpec>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read zone dir {}: {}", dir.display(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        paths.iter().map(|path| Self::load(path)).collect()
    }

    /// Parse a zone from RON text.
    pub fn parse(content: &str) -> LoadResult<ZoneSpec> {
        let spec: ZoneSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse zone RON: {}", e))?;
        Ok(spec)
    }
}
