//! Expect → actual symbol mapping.

use indexmap::IndexMap;
use irlink_ir::SymbolId;
use serde::Serialize;

/// Maps each linked expect symbol to its actual counterpart, in link order.
///
/// Keys are properly-expect declarations of dependent modules and values are
/// declarations of the main module (or builtins), so no value is ever a key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Remapping {
    map: IndexMap<SymbolId, SymbolId>,
}

impl Remapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `expect → actual`, returning the previous target if `expect` was
    /// already linked.
    pub fn insert(&mut self, expect: SymbolId, actual: SymbolId) -> Option<SymbolId> {
        self.map.insert(expect, actual)
    }

    #[must_use]
    pub fn get(&self, expect: SymbolId) -> Option<SymbolId> {
        self.map.get(&expect).copied()
    }

    /// The actual counterpart of `id`, or `id` itself when it is not linked.
    #[inline]
    #[must_use]
    pub fn resolve(&self, id: SymbolId) -> SymbolId {
        self.get(id).unwrap_or(id)
    }

    #[must_use]
    pub fn contains(&self, expect: SymbolId) -> bool {
        self.map.contains_key(&expect)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, SymbolId)> + '_ {
        self.map.iter().map(|(&expect, &actual)| (expect, actual))
    }

    /// First entry whose target is itself a key, if any.
    #[must_use]
    pub fn find_chain(&self) -> Option<(SymbolId, SymbolId)> {
        self.iter().find(|&(_, actual)| self.contains(actual))
    }
}

#[cfg(test)]
#[path = "tests/remapping_tests.rs"]
mod tests;
