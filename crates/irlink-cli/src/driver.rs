//! Reads a module graph, runs the pass and writes the result.

use crate::args::CliArgs;
use crate::config;
use anyhow::{Context, Result, bail};
use irlink_actualizer::{ActualizationError, ActualizationOutcome, ActualizerOptions, actualize};
use irlink_common::Diagnostic;
use irlink_ir::{IrArena, IrModule};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// The on-disk form of a compilation: every declaration plus the module
/// structure over it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModuleGraph {
    pub arena: IrArena,
    pub main: IrModule,
    #[serde(default)]
    pub dependents: Vec<IrModule>,
}

pub struct RunResult {
    pub graph: ModuleGraph,
    /// Set when the pass succeeded.
    pub outcome: Option<ActualizationOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunResult {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.outcome.is_some()
    }
}

pub fn parse_graph(source: &str) -> Result<ModuleGraph> {
    let graph: ModuleGraph = serde_json::from_str(source).context("invalid module graph")?;
    graph
        .arena
        .validate(std::iter::once(&graph.main).chain(&graph.dependents))
        .context("inconsistent module graph")?;
    Ok(graph)
}

pub fn load_graph(path: &Path) -> Result<ModuleGraph> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read module graph: {}", path.display()))?;
    parse_graph(&source).with_context(|| format!("failed to load module graph: {}", path.display()))
}

/// Run the pass over `graph`. Diagnostics are part of a normal result;
/// only a failed post-pass verification is an error.
pub fn actualize_graph(mut graph: ModuleGraph, options: &ActualizerOptions) -> Result<RunResult> {
    let result = actualize(
        &mut graph.arena,
        &mut graph.main,
        &mut graph.dependents,
        options,
    );
    match result {
        Ok(outcome) => {
            info!(links = outcome.remapping.len(), "graph actualized");
            Ok(RunResult {
                graph,
                outcome: Some(outcome),
                diagnostics: Vec::new(),
            })
        }
        Err(ActualizationError::Verification(violations)) => {
            let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
            bail!(
                "merged graph failed verification:\n  {}",
                details.join("\n  ")
            )
        }
        Err(err) => Ok(RunResult {
            graph,
            outcome: None,
            diagnostics: err.diagnostics().to_vec(),
        }),
    }
}

pub fn run(args: &CliArgs) -> Result<RunResult> {
    let options = config::resolve_options(args)?;
    let graph = load_graph(&args.input)?;
    actualize_graph(graph, &options)
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize output")
}

/// Write the merged graph to `--out` or stdout, and the summary to
/// `--outcome` when requested.
pub fn write_output(result: &RunResult, args: &CliArgs) -> Result<()> {
    let graph = to_json(&result.graph, args.pretty)?;
    match &args.out {
        Some(path) => std::fs::write(path, graph)
            .with_context(|| format!("failed to write merged graph: {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{graph}").context("failed to write merged graph to stdout")?;
        }
    }

    if let (Some(path), Some(outcome)) = (&args.outcome, &result.outcome) {
        let summary = to_json(outcome, args.pretty)?;
        std::fs::write(path, summary)
            .with_context(|| format!("failed to write outcome: {}", path.display()))?;
    }
    Ok(())
}
