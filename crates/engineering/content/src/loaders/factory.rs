//! Content factory for building engineering content from data files.

use std::path::{Path, PathBuf};

use engineering_core::{
    EffectCatalog, EngineeringConfig, ModifierRuleTable, ModuleCatalog, SpecialEffectBlendTable,
};

use crate::content::EngineeringContent;
use crate::loaders::{
    BlendTableLoader, ConfigLoader, EffectLoader, LoadResult, ModuleLoader, RuleTableLoader,
};

/// Content factory that loads engineering content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── modules.ron   (required)
/// ├── effects.ron   (optional, merged over built-in effects)
/// ├── rules.ron     (optional, merged over built-in rules)
/// ├── blends.ron    (optional, merged over built-in blend modes)
/// └── config.toml   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const MODULES_FILE: &'static str = "modules.ron";
    pub const EFFECTS_FILE: &'static str = "effects.ron";
    pub const RULES_FILE: &'static str = "rules.ron";
    pub const BLENDS_FILE: &'static str = "blends.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load everything in the data directory.
    pub fn load(&self) -> LoadResult<EngineeringContent> {
        Ok(EngineeringContent {
            modules: self.load_modules()?,
            effects: self.load_effects()?,
            rules: self.load_rules()?,
            blends: self.load_blends()?,
            config: self.load_config()?,
        })
    }

    /// Load the module catalog from `modules.ron`.
    pub fn load_modules(&self) -> LoadResult<ModuleCatalog> {
        ModuleLoader::load_catalog(&self.data_dir.join(Self::MODULES_FILE))
    }

    /// Built-in effects, overridden by `effects.ron` when present.
    pub fn load_effects(&self) -> LoadResult<EffectCatalog> {
        let mut catalog = EffectCatalog::builtin().clone();
        if let Some(path) = self.optional(Self::EFFECTS_FILE) {
            for effect in EffectLoader::load(&path)? {
                if catalog.insert(effect).is_some() {
                    tracing::debug!("effect overridden by {}", path.display());
                }
            }
        }
        Ok(catalog)
    }

    /// Built-in rules, overridden by `rules.ron` when present.
    pub fn load_rules(&self) -> LoadResult<ModifierRuleTable> {
        let mut table = ModifierRuleTable::builtin().clone();
        if let Some(path) = self.optional(Self::RULES_FILE) {
            for rule in RuleTableLoader::load(&path)? {
                table.insert(rule);
            }
        }
        Ok(table)
    }

    /// Built-in blend modes, overridden by `blends.ron` when present.
    pub fn load_blends(&self) -> LoadResult<SpecialEffectBlendTable> {
        let mut table = SpecialEffectBlendTable::builtin().clone();
        if let Some(path) = self.optional(Self::BLENDS_FILE) {
            for (stat, mode) in BlendTableLoader::load(&path)? {
                table.set(stat, mode);
            }
        }
        Ok(table)
    }

    /// Configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<EngineeringConfig> {
        match self.optional(Self::CONFIG_FILE) {
            Some(path) => ConfigLoader::load(&path),
            None => Ok(EngineeringConfig::default()),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn optional(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.join(file);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!("{} not found, using built-in content", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_optional_files_fall_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_rules().unwrap().len(), ModifierRuleTable::builtin().len());
        assert_eq!(factory.load_effects().unwrap().len(), EffectCatalog::builtin().len());
        assert_eq!(&factory.load_blends().unwrap(), SpecialEffectBlendTable::builtin());
        assert_eq!(factory.load_config().unwrap(), EngineeringConfig::default());
    }

    #[test]
    fn modules_file_is_required() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load().unwrap_err();
        assert!(err.to_string().contains("modules.ron"));
    }
}
