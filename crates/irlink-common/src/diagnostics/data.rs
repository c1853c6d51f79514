//! Message table for linkage diagnostics.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const MISSING_ACTUAL: u32 = 1001;
    pub const MANY_INTERFACES_MEMBER_NOT_IMPLEMENTED: u32 = 1002;
}

pub mod diagnostic_messages {
    pub const MISSING_ACTUAL_FOR: &str = "Missing actual for {0}";
    pub const MUST_OVERRIDE_INHERITED_FROM_MULTIPLE_INTERFACES: &str =
        "{0} must override {1} because it inherits multiple interface methods of it";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::MISSING_ACTUAL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::MISSING_ACTUAL_FOR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::MANY_INTERFACES_MEMBER_NOT_IMPLEMENTED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::MUST_OVERRIDE_INHERITED_FROM_MULTIPLE_INTERFACES,
    },
];
