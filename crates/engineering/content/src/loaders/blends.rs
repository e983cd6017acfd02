//! Blend mode override loader.

use std::collections::BTreeMap;
use std::path::Path;

use engineering_core::{BlendMode, StatName};

use crate::loaders::{LoadResult, read_file};

/// Loader for per-stat blend mode overrides from RON files.
///
/// The file is a map from stat name to mode number: `0.0` replaces, `1.0`
/// adds, any other positive `N` scales by `1 + delta / N`.
///
/// ```ron
/// { RoundsPerShot: 0.0, Jitter: 1.0, Mass: 100.0 }
/// ```
pub struct BlendTableLoader;

impl BlendTableLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<StatName, BlendMode>> {
        let content = read_file(path)?;
        let values: BTreeMap<StatName, f64> = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse blend table {}: {}", path.display(), e)
        })?;

        values
            .into_iter()
            .map(|(stat, value)| {
                BlendMode::from_value(stat, value)
                    .map(|mode| (stat, mode))
                    .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
            })
            .collect()
    }
}
