//! Subcommands of the `engineer` binary.

mod apply;
mod effects;
mod modules;

pub use apply::Apply;
pub use effects::Effects;
pub use modules::Modules;

/// Output format shared by the subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Summary,
    /// Pretty-printed JSON
    Json,
}
