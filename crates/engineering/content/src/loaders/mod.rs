//! Content loaders for reading engineering data from files.
//!
//! Each loader turns one RON/TOML file into core types; [`ContentFactory`]
//! ties them together for a data directory.

pub mod blends;
pub mod config;
pub mod effects;
pub mod factory;
pub mod modules;
pub mod rules;

pub use blends::BlendTableLoader;
pub use config::ConfigLoader;
pub use effects::EffectLoader;
pub use factory::ContentFactory;
pub use modules::ModuleLoader;
pub use rules::RuleTableLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
