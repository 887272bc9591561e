//! Decodes a payload, encodes it back and reports what changed.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use graph_models::{
    diff::{self, Divergence, DivergenceKind},
    registry,
};
use serde_json::Value;
use tracing::debug;

use super::input::{read_json, render_json};
use crate::config::Config;

#[derive(Args)]
pub struct RoundtripArgs {
    /// Type name or discriminator to decode as.
    pub type_name: String,

    /// JSON file to read; stdin when omitted or "-".
    pub input: Option<PathBuf>,

    /// Exit non-zero when the re-encoded payload lost data.
    #[arg(long)]
    pub check: bool,

    /// Print the re-encoded payload on one line.
    #[arg(long)]
    pub compact: bool,
}

/// Outcome of comparing a payload with its re-encoding.
#[derive(Debug)]
struct Report {
    divergences: Vec<Divergence>,
    lossless: bool,
}

fn assess(input: &Value, output: &Value, allow_dropped_nulls: bool) -> Report {
    let divergences = diff::diff(input, output);
    let lossless = if allow_dropped_nulls {
        diff::is_lossless(&divergences)
    } else {
        divergences.is_empty()
    };
    Report {
        divergences,
        lossless,
    }
}

pub fn run(args: &RoundtripArgs, config: &Config) -> Result<ExitCode> {
    let entry = registry::lookup(&args.type_name)?;
    let input = read_json(args.input.as_deref())?;
    let output = entry
        .roundtrip(input.clone())
        .with_context(|| format!("payload does not round-trip as {}", entry.name))?;

    println!("{}", render_json(&output, config.output.pretty && !args.compact)?);

    let report = assess(&input, &output, config.roundtrip.allow_dropped_nulls);
    debug!(
        model = entry.name,
        divergences = report.divergences.len(),
        lossless = report.lossless,
        "round trip compared"
    );

    for divergence in &report.divergences {
        let marker = if divergence.kind == DivergenceKind::DroppedNull {
            style("~").yellow()
        } else {
            style("✗").red()
        };
        eprintln!("{marker} {divergence}");
    }

    if report.lossless {
        eprintln!("{} round trip preserved {}", style("✓").green(), entry.name);
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!(
        "{} {} divergence(s) after round trip",
        style("✗").red(),
        report.divergences.len()
    );
    Ok(if args.check {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_assess_identical_documents_is_lossless() {
        // Arrange
        let doc = json!({"a": 1});

        // Act
        let report = assess(&doc, &doc, false);

        // Assert
        assert!(report.divergences.is_empty());
        assert!(report.lossless);
    }

    #[test]
    fn test_assess_dropped_null_depends_on_config() {
        // Arrange
        let input = json!({"displayName": null, "id": "x"});
        let output = json!({"id": "x"});

        // Act
        let allowed = assess(&input, &output, true);
        let strict = assess(&input, &output, false);

        // Assert
        assert_eq!(allowed.divergences.len(), 1);
        assert!(allowed.lossless);
        assert!(!strict.lossless);
    }

    #[test]
    fn test_assess_changed_value_is_lossy() {
        // Arrange
        let input = json!({"createdDateTime": "2024-01-01T00:00:00+00:00"});
        let output = json!({"createdDateTime": "2024-01-01T00:00:00Z"});

        // Act
        let report = assess(&input, &output, true);

        // Assert
        assert_eq!(report.divergences[0].kind, DivergenceKind::Changed);
        assert!(!report.lossless);
    }

    #[test]
    fn test_run_check_fails_on_strict_dropped_null() {
        // Arrange
        let temp = tempfile::TempDir::new().expect("tempdir");
        let path = temp.path().join("stage.json");
        std::fs::write(&path, r#"{"isEscalationEnabled": null}"#).expect("write");
        let args = RoundtripArgs {
            type_name: "AccessPackageApprovalStage".to_owned(),
            input: Some(path),
            check: true,
            compact: true,
        };
        let mut config = Config::default();
        config.roundtrip.allow_dropped_nulls = false;

        // Act
        let code = run(&args, &config).expect("run");

        // Assert
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_run_check_passes_on_lossless_payload() {
        // Arrange
        let temp = tempfile::TempDir::new().expect("tempdir");
        let path = temp.path().join("target.json");
        std::fs::write(
            &path,
            r##"{"@odata.type":"#microsoft.graph.groupAssignmentTarget","groupId":"g","extra":[1,null]}"##,
        )
        .expect("write");
        let args = RoundtripArgs {
            type_name: "DeviceAndAppManagementAssignmentTarget".to_owned(),
            input: Some(path),
            check: true,
            compact: false,
        };

        // Act
        let code = run(&args, &Config::default()).expect("run");

        // Assert
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
