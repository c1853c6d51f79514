//! Links expect functions and properties to their actuals.

use crate::error::Result;
use crate::remapping::Remapping;
use crate::reporter::DiagnosticReporter;
use crate::signature::signatures_match;
use crate::symbol_table::{ActualSymbolTable, CallableKey};
use irlink_ir::{DeclKind, IrArena, IrModule, SymbolId};
use tracing::{debug, trace};

struct CallableLinker<'a> {
    arena: &'a IrArena,
    table: &'a ActualSymbolTable,
    remapping: &'a mut Remapping,
    reporter: &'a mut DiagnosticReporter,
}

/// Link every properly-expect function and property of the dependent modules.
///
/// Must run after classifier linking: parameter types are compared through
/// the classifier links, and callable keys through the alias map.
#[tracing::instrument(level = "debug", skip_all, fields(modules = dependents.len()))]
pub fn link_callables(
    arena: &IrArena,
    dependents: &[IrModule],
    table: &ActualSymbolTable,
    remapping: &mut Remapping,
    reporter: &mut DiagnosticReporter,
) -> Result<()> {
    let mut linker = CallableLinker {
        arena,
        table,
        remapping,
        reporter,
    };
    for module in dependents {
        for &file in &module.files {
            for &id in &arena.file(file).declarations {
                linker.visit(id)?;
            }
        }
    }
    Ok(())
}

impl CallableLinker<'_> {
    fn visit(&mut self, id: SymbolId) -> Result<()> {
        let arena = self.arena;
        match &arena[id].kind {
            DeclKind::Function(_) if arena.is_proper_expect(id) => self.link_function(id),
            DeclKind::Property(_) if arena.is_proper_expect(id) => self.link_property(id),
            DeclKind::Class(data) => {
                for &member in &data.declarations {
                    self.visit(member)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn link_function(&mut self, expect: SymbolId) -> Result<()> {
        let arena = self.arena;
        let key = CallableKey::of(arena, self.table.type_aliases(), expect);
        let candidates = self.table.functions(&key);
        trace!(%key, candidates = candidates.len(), "matching function");
        let remapping = &*self.remapping;
        let found = candidates
            .iter()
            .copied()
            .find(|&candidate| signatures_match(arena, remapping, expect, candidate));
        let Some(actual) = found else {
            return self.reporter.missing_actual(arena, expect);
        };

        debug!(%key, ?expect, ?actual, "linked function");
        self.remapping.insert(expect, actual);
        let expect_parameters = arena[expect].type_parameters();
        let actual_parameters = arena[actual].type_parameters();
        for (&expect_parameter, &actual_parameter) in expect_parameters.iter().zip(actual_parameters) {
            self.remapping.insert(expect_parameter, actual_parameter);
        }
        Ok(())
    }

    fn link_property(&mut self, expect: SymbolId) -> Result<()> {
        let arena = self.arena;
        let key = CallableKey::of(arena, self.table.type_aliases(), expect);
        let Some(actual) = self.table.property(&key) else {
            return self.reporter.missing_actual(arena, expect);
        };

        debug!(%key, ?expect, ?actual, "linked property");
        self.remapping.insert(expect, actual);
        let (Some(expect_data), Some(actual_data)) =
            (arena[expect].as_property(), arena[actual].as_property())
        else {
            return Ok(());
        };
        if let (Some(expect_getter), Some(actual_getter)) = (expect_data.getter, actual_data.getter) {
            self.remapping.insert(expect_getter, actual_getter);
        }
        if let (Some(expect_setter), Some(actual_setter)) = (expect_data.setter, actual_data.setter) {
            self.remapping.insert(expect_setter, actual_setter);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/callable_linker_tests.rs"]
mod tests;
