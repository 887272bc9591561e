//! Lists the types registered in the model inventory.

use anyhow::Result;
use clap::{Args, ValueEnum};
use console::style;
use graph_models::{ModelEntry, ModelKind, registry};
use serde_json::{Value, json};

use super::input::render_json;
use crate::config::Config;

/// Output format for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
}

/// Entry kind to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Model,
    Family,
    Collection,
}

impl From<KindFilter> for ModelKind {
    fn from(filter: KindFilter) -> Self {
        match filter {
            KindFilter::Model => Self::Model,
            KindFilter::Family => Self::Family,
            KindFilter::Collection => Self::Collection,
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Output format: "table" for humans or "json" for scripts
    #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,

    /// Only list entries of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindFilter>,
}

/// Shortens `text` to `max` characters, ending in "..." when cut.
fn truncate(text: &str, max: usize) -> String {
    const ELLIPSIS: &str = "...";

    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_none() {
        return head;
    }

    let prefix: String = head.chars().take(max.saturating_sub(ELLIPSIS.len())).collect();
    format!("{prefix}{ELLIPSIS}")
}

fn select(kind: Option<ModelKind>) -> Vec<&'static ModelEntry> {
    registry::entries()
        .into_iter()
        .filter(|entry| kind.is_none_or(|kind| entry.kind == kind))
        .collect()
}

fn entry_to_json(entry: &ModelEntry) -> Value {
    json!({
        "name": entry.name,
        "kind": entry.kind,
        "odataType": entry.odata_type,
        "discriminators": entry.discriminators,
    })
}

pub fn run(args: &ListArgs, config: &Config) -> Result<()> {
    let entries = select(args.kind.map(ModelKind::from));

    if args.format == ListFormat::Json {
        let listing: Vec<Value> = entries.iter().copied().map(entry_to_json).collect();
        println!("{}", render_json(&listing, config.output.pretty)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No types registered");
        return Ok(());
    }

    println!(
        "{:<58} {:<11} {}",
        style("NAME").bold(),
        style("KIND").bold(),
        style("ODATA TYPE").bold()
    );
    println!("{}", "-".repeat(120));

    for entry in &entries {
        let odata_type = entry.odata_type.map_or_else(String::new, |tag| truncate(tag, 50));
        let kind = entry.kind.to_string();
        println!("{:<58} {kind:<11} {odata_type}", entry.name);
    }

    println!("\n{} {} type(s) registered", style("✓").green(), entries.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("#microsoft.graph.user", 50), "#microsoft.graph.user");
    }

    #[test]
    fn test_truncate_cuts_long_text_with_ellipsis() {
        // Act
        let cut = truncate("#microsoft.graph.androidWorkProfileGeneralDeviceConfiguration", 30);

        // Assert
        assert_eq!(cut.chars().count(), 30);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_select_filters_by_kind() {
        // Act
        let families = select(Some(ModelKind::Family));
        let everything = select(None);

        // Assert
        assert!(families.iter().all(|entry| entry.kind == ModelKind::Family));
        assert!(families.iter().any(|entry| entry.name == "SubjectSet"));
        assert!(everything.len() > families.len());
    }

    #[test]
    fn test_entry_to_json_lists_discriminators() {
        // Arrange
        let entry = registry::lookup("IpRange").expect("registered");

        // Act
        let value = entry_to_json(entry);

        // Assert
        assert_eq!(value["kind"], "family");
        assert_eq!(value["odataType"], "#microsoft.graph.ipRange");
        assert_eq!(value["discriminators"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_kind_filter_maps_to_model_kind() {
        assert_eq!(ModelKind::from(KindFilter::Collection), ModelKind::Collection);
        assert_eq!(ModelKind::from(KindFilter::Model), ModelKind::Model);
    }
}
