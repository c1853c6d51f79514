//! Common types and utilities for the irlink IR actualizer.
//!
//! This crate provides foundational types used across all irlink crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message table)
//! - Source offsets (`SourceRange`, `UNDEFINED_OFFSET`)

// Diagnostic types and the message table
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, DiagnosticRelatedInformation,
    diagnostic_codes, diagnostic_messages, format_message,
};

// Span - Source offset pairs attached to IR declarations
pub mod span;
pub use span::{SourceRange, UNDEFINED_OFFSET};
