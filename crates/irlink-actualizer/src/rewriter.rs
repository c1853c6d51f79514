//! Redirects references from expect symbols to their actuals.

use crate::remapping::Remapping;
use irlink_ir::{IrArena, IrModule, SymbolId, SymbolRefs, owned_children};
use tracing::debug;

/// Rewrite every symbol reference in the dependent modules that is a key of
/// `remapping`. Properly-expect subtrees are skipped; the merger drops them.
/// Returns the number of rewritten references.
#[tracing::instrument(level = "debug", skip_all, fields(links = remapping.len()))]
pub fn rewrite_references(arena: &mut IrArena, dependents: &[IrModule], remapping: &Remapping) -> usize {
    let mut rewritten = 0;
    if remapping.is_empty() {
        return rewritten;
    }
    for module in dependents {
        for &file in &module.files {
            let roots = arena.file(file).declarations.clone();
            for root in roots {
                rewrite_tree(arena, root, remapping, &mut rewritten);
            }
        }
    }
    debug!(rewritten, "references rewritten");
    rewritten
}

fn rewrite_tree(arena: &mut IrArena, id: SymbolId, remapping: &Remapping, rewritten: &mut usize) {
    if arena.is_proper_expect(id) {
        return;
    }
    arena[id].for_each_ref_mut(&mut |symbol: &mut SymbolId| {
        if let Some(actual) = remapping.get(*symbol) {
            *symbol = actual;
            *rewritten += 1;
        }
    });
    for child in owned_children(&arena[id]) {
        rewrite_tree(arena, child, remapping, rewritten);
    }
}

#[cfg(test)]
#[path = "tests/rewriter_tests.rs"]
mod tests;
