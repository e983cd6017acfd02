//! Module catalog loader.

use std::path::Path;

use engineering_core::{ModuleCatalog, ModuleDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Module catalog structure for RON files.
///
/// ```ron
/// (
///     modules: [
///         (
///             item_type: "hpt_multicannon_gimbal_huge",
///             name: "4G Gimballed Multi-Cannon",
///             stats: { Mass: 16.0, Damage: 3.46, AmmoClipSize: 90.0 },
///         ),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCatalogRon {
    pub modules: Vec<ModuleDefinition>,
}

/// Loader for module catalogs from RON files.
pub struct ModuleLoader;

impl ModuleLoader {
    /// Load module definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ModuleDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse module catalog {}: {}", path.display(), e))
    }

    /// Load a RON file straight into a [`ModuleCatalog`].
    pub fn load_catalog(path: &Path) -> LoadResult<ModuleCatalog> {
        let modules = Self::load(path)?;
        tracing::debug!("loaded {} module(s) from {}", modules.len(), path.display());
        Ok(ModuleCatalog::from_modules(modules))
    }

    fn parse(content: &str) -> LoadResult<Vec<ModuleDefinition>> {
        let catalog: ModuleCatalogRon = ron::from_str(content)?;
        Ok(catalog.modules)
    }
}
