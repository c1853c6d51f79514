//! Structural matching of function signatures across the expect/actual split.

use crate::remapping::Remapping;
use irlink_ir::{FunctionData, IrArena, SymbolId};
use tracing::trace;

/// Whether `candidate` has the value-parameter shape of `function`.
///
/// Parameter counts must be equal and each parameter classifier of `function`,
/// after substitution through `remapping`, must equal the candidate's. A
/// classifier that is a type parameter of `function` itself matches the
/// candidate's type parameter at the same index. Non-functions never match.
#[must_use]
pub fn signatures_match(
    arena: &IrArena,
    remapping: &Remapping,
    function: SymbolId,
    candidate: SymbolId,
) -> bool {
    let (Some(expected), Some(found)) = (arena[function].as_function(), arena[candidate].as_function())
    else {
        return false;
    };
    if expected.value_parameters.len() != found.value_parameters.len() {
        trace!(?function, ?candidate, "parameter count differs");
        return false;
    }
    let matches = expected
        .value_parameters
        .iter()
        .zip(&found.value_parameters)
        .all(|(left, right)| {
            classifiers_match(remapping, left.ty.classifier, right.ty.classifier, expected, found)
        });
    trace!(?function, ?candidate, matches, "compared signatures");
    matches
}

fn classifiers_match(
    remapping: &Remapping,
    left: SymbolId,
    right: SymbolId,
    expected: &FunctionData,
    found: &FunctionData,
) -> bool {
    if remapping.resolve(left) == right {
        return true;
    }
    let left_index = expected.type_parameters.iter().position(|&p| p == left);
    let right_index = found.type_parameters.iter().position(|&p| p == right);
    matches!((left_index, right_index), (Some(l), Some(r)) if l == r)
}

#[cfg(test)]
#[path = "tests/signature_tests.rs"]
mod tests;
