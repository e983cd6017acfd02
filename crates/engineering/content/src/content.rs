//! Owned set of tables an engine can run on.

use engineering_core::{
    EffectCatalog, EngineeringConfig, EngineeringEngine, ModifierRuleTable, ModuleCatalog,
    SpecialEffectBlendTable,
};

/// Everything needed to engineer modules: the module catalog plus the tables
/// and configuration driving the engine.
#[derive(Clone, Debug, Default)]
pub struct EngineeringContent {
    pub modules: ModuleCatalog,
    pub effects: EffectCatalog,
    pub rules: ModifierRuleTable,
    pub blends: SpecialEffectBlendTable,
    pub config: EngineeringConfig,
}

impl EngineeringContent {
    /// Built-in tables and default configuration with the given modules.
    pub fn builtin(modules: ModuleCatalog) -> Self {
        Self {
            modules,
            effects: EffectCatalog::builtin().clone(),
            rules: ModifierRuleTable::builtin().clone(),
            blends: SpecialEffectBlendTable::builtin().clone(),
            config: EngineeringConfig::default(),
        }
    }

    /// An engine borrowing this content's tables.
    pub fn engine(&self) -> EngineeringEngine<'_> {
        EngineeringEngine::new(&self.rules, &self.blends, &self.effects, &self.config)
    }
}
