//! `engineer`: apply engineering records to outfitting modules.
//!
//! Content (module catalog, table overrides, engine config) is read from a
//! data directory; see `engineering_content::ContentFactory` for its layout.
//!
//! ```bash
//! engineer apply hpt_multicannon_gimbal_huge record.json
//! engineer --data-dir ./data modules int_shieldgenerator_size5_class3
//! engineer effects --format json
//! ```

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Apply, Effects, Modules};
use config::CliConfig;
use engineering_content::ContentFactory;

/// Apply engineering modifiers to outfitting modules
#[derive(Parser)]
#[command(name = "engineer")]
#[command(about = "Apply engineering modifiers to outfitting modules", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides ENGINEER_DATA_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Engineer a module from a JSON engineering record
    Apply(Apply),

    /// List modules or show one module's base stats
    Modules(Modules),

    /// List experimental effects
    Effects(Effects),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    tracing::debug!("Data directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    match cli.command {
        Command::Apply(cmd) => cmd.execute(&factory),
        Command::Modules(cmd) => cmd.execute(&factory),
        Command::Effects(cmd) => cmd.execute(&factory),
    }
}
