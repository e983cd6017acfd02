//! Engine configuration loader.

use std::path::Path;

use engineering_core::EngineeringConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
///
/// ```toml
/// integer_rounding = "truncate"
/// default_blend_divisor = 100.0
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults;
    /// an out-of-range blend divisor is a parse error.
    pub fn load(path: &Path) -> LoadResult<EngineeringConfig> {
        let content = read_file(path)?;
        let config: EngineeringConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))?;

        Ok(config)
    }
}
