//! Pass configuration.

use serde::{Deserialize, Serialize};

/// What the pass does when it reports a diagnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticMode {
    /// Stop at the first unresolved link or override conflict.
    #[default]
    AbortOnFirst,
    /// Run linking and fake-override synthesis to completion, then fail with
    /// every diagnostic. The graph is not rewritten or merged on failure.
    Accumulate,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActualizerOptions {
    pub diagnostic_mode: DiagnosticMode,
    /// Check the post-merge invariants before returning.
    pub verify: bool,
}

impl ActualizerOptions {
    #[must_use]
    pub fn accumulate() -> Self {
        Self {
            diagnostic_mode: DiagnosticMode::Accumulate,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}
