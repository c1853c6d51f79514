use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the irlink binary.
#[derive(Parser, Debug)]
#[command(
    name = "irlink",
    version,
    about = "Link expect declarations to their actuals and merge IR modules"
)]
pub struct CliArgs {
    /// Module graph to actualize (`{ "arena", "main", "dependents" }` JSON).
    pub input: PathBuf,

    /// Write the merged graph here instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Write the run summary (remapping, fake overrides, counts) as JSON.
    #[arg(long)]
    pub outcome: Option<PathBuf>,

    /// JSON file with pass options (`diagnosticMode`, `verify`).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Report every diagnostic instead of stopping at the first one.
    #[arg(long)]
    pub accumulate: bool,

    /// Check the merged graph for dangling references before writing it.
    #[arg(long)]
    pub verify: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// When to color diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether stderr is a terminal.
    #[must_use]
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}
