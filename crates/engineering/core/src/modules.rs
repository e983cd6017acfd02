//! Base module definitions.

use std::collections::HashMap;

use crate::stats::StatBlock;

/// An unengineered module as sold in outfitting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleDefinition {
    /// Internal type name, e.g. `hpt_multicannon_gimbal_huge`.
    pub item_type: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub stats: StatBlock,
}

impl ModuleDefinition {
    pub fn new(item_type: impl Into<String>, name: impl Into<String>, stats: StatBlock) -> Self {
        Self {
            item_type: item_type.into(),
            name: name.into(),
            stats,
        }
    }
}

/// Resolves an internal item type name to its base definition.
pub trait ModuleOracle: Send + Sync {
    fn module(&self, item_type: &str) -> Option<&ModuleDefinition>;
}

/// In-memory module catalog keyed by lower-cased item type name.
#[derive(Clone, Debug, Default)]
pub struct ModuleCatalog {
    modules: HashMap<String, ModuleDefinition>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_modules(modules: impl IntoIterator<Item = ModuleDefinition>) -> Self {
        let mut catalog = Self::new();
        for module in modules {
            catalog.insert(module);
        }
        catalog
    }

    pub fn insert(&mut self, module: ModuleDefinition) -> Option<ModuleDefinition> {
        self.modules.insert(module.item_type.to_ascii_lowercase(), module)
    }

    /// All modules, in no particular order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleDefinition> + '_ {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleOracle for ModuleCatalog {
    fn module(&self, item_type: &str) -> Option<&ModuleDefinition> {
        self.modules.get(&item_type.to_ascii_lowercase())
    }
}
