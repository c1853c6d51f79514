//! Diagnostic reporting for the actualization pass.
//!
//! The reporter is the single place diagnostics are constructed. In
//! `AbortOnFirst` mode each report is turned into an error immediately; in
//! `Accumulate` mode reports are buffered until `finish`.

use crate::error::{ActualizationError, Result};
use crate::options::DiagnosticMode;
use irlink_common::{Diagnostic, diagnostic_codes};
use irlink_ir::{IrArena, SymbolId, render::render};
use tracing::debug;

#[derive(Debug, Default)]
pub struct DiagnosticReporter {
    mode: DiagnosticMode,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReporter {
    #[must_use]
    pub fn new(mode: DiagnosticMode) -> Self {
        Self {
            mode,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> DiagnosticMode {
        self.mode
    }

    /// Diagnostics buffered so far (always empty in `AbortOnFirst` mode).
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// `decl` is properly-expect and no actual counterpart was found.
    pub fn missing_actual(&mut self, arena: &IrArena, decl: SymbolId) -> Result<()> {
        let rendered = render(arena, decl);
        let (file, start, length) = location(arena, decl);
        self.report(Diagnostic::from_code(
            file,
            start,
            length,
            diagnostic_codes::MISSING_ACTUAL,
            &[&rendered],
        ))
    }

    /// `class` inherits `member` from more than one linked supertype and does
    /// not override it.
    pub fn many_interfaces_not_implemented(
        &mut self,
        arena: &IrArena,
        class: SymbolId,
        member: SymbolId,
    ) -> Result<()> {
        let class_text = render(arena, class);
        let member_text = render(arena, member);
        let (file, start, length) = location(arena, class);
        let (member_file, member_start, member_length) = location(arena, member);
        let diagnostic = Diagnostic::from_code(
            file,
            start,
            length,
            diagnostic_codes::MANY_INTERFACES_MEMBER_NOT_IMPLEMENTED,
            &[&class_text, &member_text],
        )
        .with_related(
            member_file,
            member_start,
            member_length,
            format!("{member_text} is inherited from here"),
        );
        self.report(diagnostic)
    }

    fn report(&mut self, diagnostic: Diagnostic) -> Result<()> {
        debug!(code = diagnostic.code, message = %diagnostic.message_text, "diagnostic");
        match self.mode {
            DiagnosticMode::AbortOnFirst => Err(ActualizationError::Diagnostic(Box::new(diagnostic))),
            DiagnosticMode::Accumulate => {
                self.diagnostics.push(diagnostic);
                Ok(())
            }
        }
    }

    /// Fail with every buffered diagnostic, if there are any.
    pub fn finish(&mut self) -> Result<()> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ActualizationError::Diagnostics(std::mem::take(&mut self.diagnostics)))
        }
    }
}

/// File name, start and length used to anchor a diagnostic on `decl`.
fn location(arena: &IrArena, decl: SymbolId) -> (String, u32, u32) {
    let file = arena
        .containing_file(decl)
        .map(|file| arena.file(file).name.clone())
        .unwrap_or_default();
    let span = arena[decl].span;
    (file, span.diagnostic_start(), span.diagnostic_length())
}

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod tests;
