//! Reading payloads and writing JSON shared by the commands.

use std::{fs, io::Read, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Reads a JSON document from `path`, or from stdin when `path` is absent or
/// `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or is not valid JSON.
pub fn read_json(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_json(&text).with_context(|| format!("{} is not valid JSON", path.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            parse_json(&text).context("stdin is not valid JSON")
        }
    }
}

fn parse_json(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Serializes `value` for stdout.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("failed to serialize output")
}
