//! Expect/actual actualization.
//!
//! Multiplatform compilation produces one main (platform) module and any
//! number of dependent (common) modules. Dependent modules declare `expect`
//! declarations that the main module implements with `actual` ones.
//! [`actualize`] links each expect declaration to its actual counterpart,
//! materializes inherited members that only exist on the actual side as fake
//! overrides, redirects every reference in the dependent modules to the
//! actuals, and finally moves the dependent files into the main module.
//!
//! Stages run in a fixed order:
//!
//! 1. [`ActualSymbolTable::collect_classifiers`] over the main module
//! 2. [`link_classifiers`]
//! 3. [`ActualSymbolTable::collect_callables`]
//! 4. [`link_callables`]
//! 5. [`add_missing_fake_overrides`]
//! 6. [`rewrite_references`]
//! 7. [`merge_modules`]

pub mod callable_linker;
pub use callable_linker::link_callables;

pub mod classifier_linker;
pub use classifier_linker::link_classifiers;

pub mod error;
pub use error::{ActualizationError, Result};

pub mod fake_overrides;
pub use fake_overrides::add_missing_fake_overrides;

pub mod merger;
pub use merger::{MergeSummary, merge_modules};

pub mod options;
pub use options::{ActualizerOptions, DiagnosticMode};

pub mod remapping;
pub use remapping::Remapping;

pub mod reporter;
pub use reporter::DiagnosticReporter;

pub mod rewriter;
pub use rewriter::rewrite_references;

pub mod signature;

pub mod symbol_table;
pub use symbol_table::{ActualSymbolTable, CallableKey, ClassifierKey, TypeAliasMap};

pub mod verify;
pub use verify::Violation;

use irlink_ir::{IrArena, IrModule, SymbolId};
use serde::Serialize;
use tracing::info;

/// What a successful run did.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualizationOutcome {
    pub remapping: Remapping,
    /// Fake overrides added to dependent classes, in creation order.
    pub synthesized: Vec<SymbolId>,
    pub rewritten_references: usize,
    pub removed_declarations: usize,
    pub moved_files: usize,
}

/// Run the whole pass over `main` and `dependents`, in place.
///
/// On success every dependent file has been moved into `main` and
/// `dependents` are empty. On a diagnostic the graph may hold fake overrides
/// already synthesized but is otherwise untouched: references are only
/// rewritten, and files only moved, once linking succeeded everywhere.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(main = %main.name, dependents = dependents.len())
)]
pub fn actualize(
    arena: &mut IrArena,
    main: &mut IrModule,
    dependents: &mut [IrModule],
    options: &ActualizerOptions,
) -> Result<ActualizationOutcome> {
    let mut reporter = DiagnosticReporter::new(options.diagnostic_mode);
    let mut remapping = Remapping::new();

    let mut table = ActualSymbolTable::collect_classifiers(arena, main);
    link_classifiers(arena, dependents, &table, &mut remapping, &mut reporter)?;
    table.collect_callables(arena);
    link_callables(arena, dependents, &table, &mut remapping, &mut reporter)?;

    let synthesized = add_missing_fake_overrides(arena, dependents, &remapping, &mut reporter)?;
    reporter.finish()?;

    let rewritten_references = rewrite_references(arena, dependents, &remapping);
    let summary = merge_modules(arena, main, dependents);

    if options.verify {
        let violations = verify::verify(arena, main, &remapping, &synthesized);
        if !violations.is_empty() {
            return Err(ActualizationError::Verification(violations));
        }
    }

    info!(
        links = remapping.len(),
        fake_overrides = synthesized.len(),
        moved_files = summary.moved_files,
        "actualization finished"
    );
    Ok(ActualizationOutcome {
        remapping,
        synthesized,
        rewritten_references,
        removed_declarations: summary.removed_declarations,
        moved_files: summary.moved_files,
    })
}
