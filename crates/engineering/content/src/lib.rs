//! Data-driven engineering content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Module catalogs (base stats per item type, RON)
//! - Experimental effect catalogs (RON)
//! - Modifier rule overrides (RON)
//! - Blend mode overrides (RON)
//! - Engine configuration (TOML)
//!
//! Overrides are layered on top of the tables built into `engineering-core`,
//! so a data directory only needs to carry what it changes.

pub mod content;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use content::EngineeringContent;

#[cfg(feature = "loaders")]
pub use loaders::{
    BlendTableLoader, ConfigLoader, ContentFactory, EffectLoader, ModuleLoader, RuleTableLoader,
};
