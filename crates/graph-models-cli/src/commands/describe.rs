//! Shows one registered type and its JSON Schema.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use graph_models::{ModelEntry, registry};

use super::input::render_json;
use crate::config::Config;

#[derive(Args)]
pub struct DescribeArgs {
    /// Type name or discriminator (e.g. "SingleUser" or
    /// "#microsoft.graph.singleUser").
    pub type_name: String,
}

fn detail_lines(entry: &ModelEntry) -> Vec<(&'static str, String)> {
    let mut lines = vec![("Name", entry.name.to_owned()), ("Kind", entry.kind.to_string())];
    if let Some(tag) = entry.odata_type {
        lines.push(("OData type", tag.to_owned()));
    }
    if !entry.discriminators.is_empty() {
        lines.push(("Subtypes", entry.discriminators.join(", ")));
    }
    lines
}

pub fn run(args: &DescribeArgs, config: &Config) -> Result<()> {
    let entry = registry::lookup(&args.type_name)?;
    let schema = entry
        .schema()
        .with_context(|| format!("failed to build schema for {}", entry.name))?;

    println!("{}", style("Type Details").bold().underlined());
    println!();
    for (label, value) in detail_lines(entry) {
        println!("{}: {value}", style(label).cyan());
    }

    println!();
    println!("{}", style("Schema").bold().underlined());
    println!("{}", render_json(&schema, config.output.pretty)?);
    Ok(())
}
