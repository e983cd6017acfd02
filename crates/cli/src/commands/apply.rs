//! Apply an engineering record to a module.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use engineering_content::ContentFactory;
use engineering_core::{ChangeSource, EngineeringOutcome, EngineeringRecord};

use super::OutputFormat;

/// Engineer a module from a JSON engineering record
#[derive(Parser)]
pub struct Apply {
    /// Internal item type of the module (e.g., hpt_multicannon_gimbal_huge)
    #[arg(value_name = "ITEM_TYPE")]
    item_type: String,

    /// JSON file holding the engineering record
    #[arg(value_name = "RECORD")]
    record: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Apply {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let (record, outcome) = self.engineer(factory)?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
            OutputFormat::Summary => print_summary(&self.item_type, &record, &outcome),
        }
        Ok(())
    }

    fn engineer(&self, factory: &ContentFactory) -> Result<(EngineeringRecord, EngineeringOutcome)> {
        let json = std::fs::read_to_string(&self.record)
            .with_context(|| format!("Failed to read record: {}", self.record.display()))?;
        let record: EngineeringRecord = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse record: {}", self.record.display()))?;

        let content = factory.load()?;
        tracing::info!(
            "Applying {} grade {} to {}",
            record.blueprint_name,
            record.level,
            self.item_type
        );

        let outcome = record.apply(&content.engine(), &content.modules, &self.item_type)?;
        Ok((record, outcome))
    }
}

fn print_summary(item_type: &str, record: &EngineeringRecord, outcome: &EngineeringOutcome) {
    println!("{} {}", style("Module:").bold().cyan(), item_type);
    println!(
        "{} {} (grade {})",
        style("Blueprint:").bold().cyan(),
        record.blueprint_name,
        record.level
    );
    if let Some(effect) = &record.experimental_effect {
        let name = record.experimental_effect_localised.as_deref().unwrap_or(effect);
        println!("{} {}", style("Experimental:").bold().cyan(), name);
    }

    println!();
    println!("{}", style("Changes").bold());
    if outcome.changes.is_empty() {
        println!("  (none)");
    }
    for change in &outcome.changes {
        let source = match &change.source {
            ChangeSource::Primary { label } => style(label.clone()).white(),
            ChangeSource::Secondary { label } => style(format!("via {label}")).dim(),
            ChangeSource::SpecialEffect { id } => style(id.clone()).magenta(),
        };
        let arrow = match change.improved {
            Some(true) => style("->").green(),
            Some(false) => style("->").red(),
            None => style("->").white(),
        };
        println!(
            "  {:<28} {:>12} {} {:<12} {}",
            change.stat.to_string(),
            change.before.to_string(),
            arrow,
            change.after.to_string(),
            source
        );
    }

    if outcome.has_warnings() {
        println!();
        println!("{}", style("Warnings").bold().yellow());
        for warning in &outcome.warnings {
            println!("  {} {}", style("!").yellow(), warning);
        }
    }

    println!();
    println!("{}", style("Stats").bold());
    for (stat, value) in outcome.stats.iter() {
        println!("  {:<28} {}", stat.to_string(), value);
    }
}
