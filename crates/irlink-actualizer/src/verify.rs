//! Post-pass consistency checks.
//!
//! A successful run leaves the main module closed over its own declarations:
//! no reference points at an expect declaration or at one the merger
//! detached, and every fake override is a member of the class it was made
//! for.

use crate::remapping::Remapping;
use irlink_ir::{DeclParent, IrArena, IrModule, SymbolId, SymbolRefs};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("remapping chains {expect} -> {actual}, which is itself remapped")]
    RemappingChain { expect: SymbolId, actual: SymbolId },

    #[error("{owner} references expect declaration {target}")]
    ExpectReference { owner: SymbolId, target: SymbolId },

    #[error("{owner} references detached declaration {target}")]
    DetachedReference { owner: SymbolId, target: SymbolId },

    #[error("fake override {member} is not a member of its class")]
    UnattachedFakeOverride { member: SymbolId },
}

/// Check a finished run over the merged `main` module.
#[tracing::instrument(level = "debug", skip_all, fields(main = %main.name))]
#[must_use]
pub fn verify(
    arena: &IrArena,
    main: &IrModule,
    remapping: &Remapping,
    synthesized: &[SymbolId],
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Some((expect, actual)) = remapping.find_chain() {
        violations.push(Violation::RemappingChain { expect, actual });
    }

    arena.walk_module(main, &mut |owner| {
        arena[owner].for_each_ref(&mut |target| {
            if arena.get(target).is_none() {
                return;
            }
            if arena.is_proper_expect(target) {
                violations.push(Violation::ExpectReference { owner, target });
            } else if arena.containing_file(target).is_none() {
                violations.push(Violation::DetachedReference { owner, target });
            }
        });
    });

    for &member in synthesized {
        let attached = match arena[member].parent {
            DeclParent::Decl(class) => arena[class].members().contains(&member),
            DeclParent::None | DeclParent::File(_) => false,
        };
        if !attached {
            violations.push(Violation::UnattachedFakeOverride { member });
        }
    }

    violations
}

#[cfg(test)]
#[path = "tests/verify_tests.rs"]
mod tests;
