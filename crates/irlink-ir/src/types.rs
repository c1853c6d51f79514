//! IR type references.

use crate::ids::SymbolId;
use serde::{Deserialize, Serialize};

/// A reference to a classifier (class, type parameter, or builtin) with
/// optional type arguments.
///
/// Type aliases are expanded upstream, so a classifier is never an alias.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IrType {
    pub classifier: SymbolId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<IrType>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl IrType {
    #[must_use]
    pub const fn simple(classifier: SymbolId) -> Self {
        Self {
            classifier,
            arguments: Vec::new(),
            nullable: false,
        }
    }

    #[must_use]
    pub fn with_arguments(classifier: SymbolId, arguments: Vec<IrType>) -> Self {
        Self {
            classifier,
            arguments,
            nullable: false,
        }
    }

    #[must_use]
    pub fn make_nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
