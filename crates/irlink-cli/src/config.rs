//! Pass options: an optional JSON config file with command-line overrides.

use crate::args::CliArgs;
use anyhow::{Context, Result};
use irlink_actualizer::{ActualizerOptions, DiagnosticMode};
use std::path::Path;

pub fn parse_config(source: &str) -> Result<ActualizerOptions> {
    let options = serde_json::from_str(source).context("invalid irlink config")?;
    Ok(options)
}

pub fn load_config(path: &Path) -> Result<ActualizerOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Flags only ever switch behavior on; an option set in the config file is
/// never turned off from the command line.
pub fn apply_cli_overrides(options: &mut ActualizerOptions, args: &CliArgs) {
    if args.accumulate {
        options.diagnostic_mode = DiagnosticMode::Accumulate;
    }
    if args.verify {
        options.verify = true;
    }
}

pub fn resolve_options(args: &CliArgs) -> Result<ActualizerOptions> {
    let mut options = match &args.config {
        Some(path) => load_config(path)?,
        None => ActualizerOptions::default(),
    };
    apply_cli_overrides(&mut options, args);
    Ok(options)
}
