//! Errors returned by the actualization pass.

use crate::verify::Violation;
use irlink_common::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ActualizationError>;

#[derive(Debug, Error)]
pub enum ActualizationError {
    /// First diagnostic, in `DiagnosticMode::AbortOnFirst`.
    #[error("{0}")]
    Diagnostic(Box<Diagnostic>),

    /// Every diagnostic, in `DiagnosticMode::Accumulate`.
    #[error("actualization failed with {} diagnostic(s); first: {}", .0.len(), .0[0])]
    Diagnostics(Vec<Diagnostic>),

    #[error("actualization left the module graph inconsistent: {}", .0[0])]
    Verification(Vec<Violation>),
}

impl ActualizationError {
    /// Diagnostics carried by this error, in report order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Diagnostic(diagnostic) => std::slice::from_ref(diagnostic.as_ref()),
            Self::Diagnostics(diagnostics) => diagnostics,
            Self::Verification(_) => &[],
        }
    }
}
