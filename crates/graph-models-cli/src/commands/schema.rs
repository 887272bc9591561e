//! Prints the JSON Schema of a registered type.

use anyhow::{Context, Result};
use clap::Args;
use graph_models::registry;

use super::input::render_json;
use crate::config::Config;

#[derive(Args)]
pub struct SchemaArgs {
    /// Type name or discriminator.
    pub type_name: String,

    /// Print on one line regardless of `output.pretty`.
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: &SchemaArgs, config: &Config) -> Result<()> {
    let entry = registry::lookup(&args.type_name)?;
    let schema = entry
        .schema()
        .with_context(|| format!("failed to build schema for {}", entry.name))?;
    println!("{}", render_json(&schema, config.output.pretty && !args.compact)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_accepts_discriminator() {
        // Arrange
        let args = SchemaArgs {
            type_name: "#microsoft.graph.windowsInformationProtectionPolicy".to_owned(),
            compact: true,
        };

        // Act
        let result = run(&args, &Config::default());

        // Assert
        assert!(result.is_ok(), "{result:?}");
    }

    #[test]
    fn test_run_rejects_unknown_type() {
        // Arrange
        let args = SchemaArgs {
            type_name: "#microsoft.graph.nothing".to_owned(),
            compact: false,
        };

        // Act
        let result = run(&args, &Config::default());

        // Assert
        assert!(result.is_err());
    }
}
