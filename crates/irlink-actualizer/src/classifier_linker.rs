//! Links expect classifiers of the dependent modules to their actuals.

use crate::error::Result;
use crate::remapping::Remapping;
use crate::reporter::DiagnosticReporter;
use crate::symbol_table::{ActualSymbolTable, ClassifierKey};
use irlink_ir::{DeclKind, IrArena, IrModule, SymbolId};
use tracing::debug;

struct ClassifierLinker<'a> {
    arena: &'a IrArena,
    table: &'a ActualSymbolTable,
    remapping: &'a mut Remapping,
    reporter: &'a mut DiagnosticReporter,
}

/// Link every properly-expect class, enum entry and class type parameter.
#[tracing::instrument(level = "debug", skip_all, fields(modules = dependents.len()))]
pub fn link_classifiers(
    arena: &IrArena,
    dependents: &[IrModule],
    table: &ActualSymbolTable,
    remapping: &mut Remapping,
    reporter: &mut DiagnosticReporter,
) -> Result<()> {
    let mut linker = ClassifierLinker {
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

impl ClassifierLinker<'_> {
    fn visit(&mut self, id: SymbolId) -> Result<()> {
        let arena = self.arena;
        let proper_expect = arena.is_proper_expect(id);
        match &arena[id].kind {
            DeclKind::Class(data) => {
                if proper_expect {
                    self.link(id)?;
                    for &parameter in &data.type_parameters {
                        self.link(parameter)?;
                    }
                }
                for &member in &data.declarations {
                    self.visit(member)?;
                }
            }
            DeclKind::EnumEntry(_) if proper_expect => self.link(id)?,
            _ => {}
        }
        Ok(())
    }

    fn link(&mut self, expect: SymbolId) -> Result<()> {
        let Some(key) = ClassifierKey::of(self.arena, expect) else {
            return Ok(());
        };
        match self.table.classifier(&key) {
            Some(actual) => {
                debug!(%key, ?expect, ?actual, "linked classifier");
                self.remapping.insert(expect, actual);
                Ok(())
            }
            None => self.reporter.missing_actual(self.arena, expect),
        }
    }
}

#[cfg(test)]
#[path = "tests/classifier_linker_tests.rs"]
mod tests;
