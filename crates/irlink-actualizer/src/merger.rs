//! Folds the dependent modules into the main module.

use irlink_ir::{IrArena, IrModule};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Properly-expect declarations detached from dependent files.
    pub removed_declarations: usize,
    pub moved_files: usize,
}

/// Remove properly-expect declarations from the dependent files, then move
/// the files onto the end of `main` in module order. Dependents are left
/// empty.
#[tracing::instrument(level = "debug", skip_all, fields(main = %main.name, modules = dependents.len()))]
pub fn merge_modules(arena: &mut IrArena, main: &mut IrModule, dependents: &mut [IrModule]) -> MergeSummary {
    let mut summary = MergeSummary::default();
    for module in dependents.iter() {
        for &file in &module.files {
            let removed = arena.remove_from_file(file, |arena, id| arena.is_proper_expect(id));
            summary.removed_declarations += removed.len();
        }
    }
    for module in dependents.iter_mut() {
        summary.moved_files += module.files.len();
        main.files.append(&mut module.files);
    }
    debug!(
        removed = summary.removed_declarations,
        moved = summary.moved_files,
        "modules merged"
    );
    summary
}

#[cfg(test)]
#[path = "tests/merger_tests.rs"]
mod tests;
