//! Experimental effect catalog loader.

use std::path::Path;

use engineering_core::SpecialEffect;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Effect catalog structure for RON files.
///
/// ```ron
/// (
///     effects: [
///         (
///             id: "special_incendiary_rounds",
///             name: "Incendiary Rounds",
///             deltas: { RateOfFire: -5.0, ThermalLoad: 200.0 },
///         ),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectCatalogRon {
    pub effects: Vec<SpecialEffect>,
}

/// Loader for experimental effects from RON files.
pub struct EffectLoader;

impl EffectLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SpecialEffect>> {
        let content = read_file(path)?;
        let catalog: EffectCatalogRon = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse effect catalog {}: {}", path.display(), e)
        })?;

        Ok(catalog.effects)
    }
}
