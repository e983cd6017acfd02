//! List the module catalog or show one module's base stats.

use anyhow::{Result, anyhow};
use clap::Parser;
use console::style;
use engineering_content::ContentFactory;
use engineering_core::ModuleOracle;

use super::OutputFormat;

/// List modules in the data directory
#[derive(Parser)]
pub struct Modules {
    /// Show the base stats of this item type instead of listing
    #[arg(value_name = "ITEM_TYPE")]
    item_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Modules {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let catalog = factory.load_modules()?;

        if let Some(item_type) = &self.item_type {
            let module = catalog
                .module(item_type)
                .ok_or_else(|| anyhow!("Unknown module: {}", item_type))?;
            match self.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(module)?),
                OutputFormat::Summary => {
                    println!("{} {}", style(&module.item_type).bold().cyan(), module.name);
                    for (stat, value) in module.stats.iter() {
                        println!("  {:<28} {}", stat.to_string(), value);
                    }
                }
            }
            return Ok(());
        }

        let mut modules: Vec<_> = catalog.modules().collect();
        modules.sort_by(|a, b| a.item_type.cmp(&b.item_type));

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&modules)?),
            OutputFormat::Summary => {
                println!(
                    "{} {}",
                    style("Modules:").bold().cyan(),
                    factory.data_dir().display()
                );
                for module in modules {
                    println!(
                        "  {:<40} {} ({} stats)",
                        module.item_type,
                        module.name,
                        module.stats.len()
                    );
                }
            }
        }
        Ok(())
    }
}
