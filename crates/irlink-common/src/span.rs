//! Source offset pairs for IR declarations.
//!
//! Declarations produced by the frontend carry real offsets into their file.
//! Builtins and compiler-synthesized nodes use `UNDEFINED_OFFSET` for both ends.

use serde::{Deserialize, Serialize};

/// Sentinel offset for synthetic and builtin declarations.
pub const UNDEFINED_OFFSET: i32 = -1;

/// A start/end offset pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: i32,
    pub end: i32,
}

impl SourceRange {
    pub const UNDEFINED: Self = Self {
        start: UNDEFINED_OFFSET,
        end: UNDEFINED_OFFSET,
    };

    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Whether this range marks a builtin or compiler-synthesized node.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.start == UNDEFINED_OFFSET || self.end == UNDEFINED_OFFSET
    }

    /// Start offset for diagnostics; undefined offsets map to 0.
    #[must_use]
    pub fn diagnostic_start(&self) -> u32 {
        u32::try_from(self.start).unwrap_or(0)
    }

    /// Length for diagnostics; undefined or inverted ranges have length 0.
    #[must_use]
    pub fn diagnostic_length(&self) -> u32 {
        if self.is_undefined() {
            return 0;
        }
        self.end
            .checked_sub(self.start)
            .and_then(|length| u32::try_from(length).ok())
            .unwrap_or(0)
    }
}

impl Default for SourceRange {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

#[cfg(test)]
#[path = "tests/span_tests.rs"]
mod tests;
