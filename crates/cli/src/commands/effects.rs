//! List experimental effects with the blend mode each delta uses.

use anyhow::Result;
use clap::Parser;
use console::style;
use engineering_content::ContentFactory;
use engineering_core::BlendMode;

use super::OutputFormat;

/// List experimental effects (built-in plus data directory overrides)
#[derive(Parser)]
pub struct Effects {
    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Effects {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let catalog = factory.load_effects()?;
        let blends = factory.load_blends()?;
        let config = factory.load_config()?;

        let mut effects: Vec<_> = catalog.effects().collect();
        effects.sort_by(|a, b| a.id.cmp(&b.id));

        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&effects)?);
            return Ok(());
        }

        for effect in effects {
            println!("{} {}", style(&effect.id).bold().cyan(), effect.name);
            for (stat, delta) in effect.deltas() {
                let mode = match blends.mode_or(stat, config.default_blend_divisor()) {
                    BlendMode::Replace => "=".to_owned(),
                    BlendMode::Add => "+".to_owned(),
                    BlendMode::Percent(divisor) => format!("%/{divisor}"),
                };
                println!("  {:<28} {:>8} {}", stat.to_string(), delta, style(mode).dim());
            }
        }
        Ok(())
    }
}
