//! Modifier rule override loader.

use std::path::Path;

use engineering_core::ModifierRule;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Rule overrides for RON files. Conditions use the `+text` / `-text` form.
///
/// ```ron
/// (
///     rules: [
///         (
///             label: "RateOfFire",
///             targets: [
///                 (stat: RateOfFire),
///                 (stat: DamagePerSecond),
///                 (stat: BurstInterval, invert: true, exceptions: ["-hpt_railgun*"]),
///             ],
///         ),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTableRon {
    pub rules: Vec<ModifierRule>,
}

/// Loader for modifier rule overrides from RON files.
pub struct RuleTableLoader;

impl RuleTableLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ModifierRule>> {
        let content = read_file(path)?;
        let table: RuleTableRon = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse modifier rules {}: {}", path.display(), e)
        })?;

        Ok(table.rules)
    }
}
