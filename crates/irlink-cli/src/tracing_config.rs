//! Tracing configuration for the `irlink` binary.
//!
//! Supports three output formats controlled by `IRLINK_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`, one level per
//!   pass stage
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! # Every link the pass makes, grouped by stage
//! IRLINK_LOG=debug IRLINK_LOG_FORMAT=tree irlink graph.json
//!
//! # Candidate-level matching for the callable linker only
//! IRLINK_LOG="irlink_actualizer::callable_linker=trace" irlink graph.json
//! ```
//!
//! The subscriber is only initialised when `IRLINK_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `IRLINK_LOG_FORMAT` value; unknown values fall back to text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("IRLINK_LOG_FORMAT").unwrap_or_default())
    }
}

/// `IRLINK_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("IRLINK_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber. Output goes to stderr so it
/// never mixes with the merged graph on stdout.
pub fn init_tracing() {
    let has_irlink_log = std::env::var("IRLINK_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_irlink_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
