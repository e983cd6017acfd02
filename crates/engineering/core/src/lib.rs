//! Engineering-modifier application for outfitting modules.
//!
//! `engineering-core` turns a module's base stats plus the modifiers the
//! crafting system applied to it into the engineered stats. It is pure: no
//! I/O, and all tables are immutable statics shared across threads. Loading
//! catalogs and tables from files lives in `engineering-content`.
//!
//! Entry points are [`EngineeringEngine::apply`] for a bare stat block and
//! [`EngineeringRecord::apply`] for a record resolved through a
//! [`ModuleOracle`].
pub mod blend;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod modifier;
pub mod modules;
pub mod record;
pub mod rules;
pub mod stats;

pub use blend::{BlendMode, SpecialEffectBlendTable};
pub use config::{ConfigError, EngineeringConfig};
pub use effects::{EffectCatalog, SpecialEffect, SpecialEffectOracle};
pub use engine::{ChangeSource, EngineeringEngine, EngineeringOutcome, EngineeringWarning, StatChange};
pub use error::{EngineError, ErrorSeverity};
pub use modifier::ModifierEntry;
pub use modules::{ModuleCatalog, ModuleDefinition, ModuleOracle};
pub use record::{EngineeringError, EngineeringRecord};
pub use rules::{
    Condition, ConditionSense, ItemContext, ModifierRule, ModifierRuleTable, RuleParseError,
    TargetSpec,
};
pub use stats::{IntegerRounding, StatBlock, StatKind, StatName, StatValue};
