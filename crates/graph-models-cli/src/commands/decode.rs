//! Reports what a payload decodes into.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use graph_models::registry;

use super::input::{read_json, render_json};
use crate::config::Config;

#[derive(Args)]
pub struct DecodeArgs {
    /// Type name or discriminator to decode as.
    pub type_name: String,

    /// JSON file to read; stdin when omitted or "-".
    pub input: Option<PathBuf>,
}

pub fn run(args: &DecodeArgs, config: &Config) -> Result<()> {
    let entry = registry::lookup(&args.type_name)?;
    let payload = read_json(args.input.as_deref())?;
    let summary = entry
        .summarize(payload)
        .with_context(|| format!("payload does not decode as {}", entry.name))?;
    println!("{}", render_json(&summary, config.output.pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn args_for(type_name: &str, temp: &TempDir, payload: &str) -> DecodeArgs {
        let path = temp.path().join("payload.json");
        fs::write(&path, payload).expect("write");
        DecodeArgs {
            type_name: type_name.to_owned(),
            input: Some(path),
        }
    }

    #[test]
    fn test_run_decodes_family_payload() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let args = args_for(
            "SubjectSet",
            &temp,
            r##"{"@odata.type":"#microsoft.graph.singleUser","userId":"u1"}"##,
        );

        // Act
        let result = run(&args, &Config::default());

        // Assert
        assert!(result.is_ok(), "{result:?}");
    }

    #[test]
    fn test_run_names_type_on_malformed_payload() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let args = args_for("AccessPackageApprovalStage", &temp, r#"{"durationBeforeAutomaticDenial":"P1X"}"#);

        // Act
        let err = run(&args, &Config::default()).expect_err("invalid duration");

        // Assert
        assert_eq!(err.to_string(), "payload does not decode as AccessPackageApprovalStage");
    }
}
