//! Indexes of the main module's actual declarations.
//!
//! Classifiers are keyed by `ClassifierKey`, whose variant encodes the
//! declaration kind, so an enum entry and a nested class with the same dotted
//! name never collide. Callables are keyed by container name and short name;
//! overloads share a bucket and are told apart by the callable linker.

use indexmap::IndexSet;
use irlink_ir::{DeclKind, FqName, IrArena, IrModule, Name, SymbolId};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt;
use tracing::{trace, warn};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassifierKey {
    /// A class, or an actual type alias standing in for one.
    Class(FqName),
    EnumEntry { enum_class: FqName, entry: Name },
    /// A type parameter of a class or type alias.
    TypeParameter { owner: FqName, name: Name },
}

impl ClassifierKey {
    /// Key under which `id` is indexed or looked up, if it is a classifier.
    #[must_use]
    pub fn of(arena: &IrArena, id: SymbolId) -> Option<Self> {
        let decl = &arena[id];
        match decl.kind {
            DeclKind::Class(_) | DeclKind::TypeAlias(_) => Some(Self::Class(arena.fq_name(id))),
            DeclKind::EnumEntry(_) => Some(Self::EnumEntry {
                enum_class: arena.container_fq_name(id),
                entry: decl.name.clone(),
            }),
            DeclKind::TypeParameter(_) => Some(Self::TypeParameter {
                owner: arena.container_fq_name(id),
                name: decl.name.clone(),
            }),
            DeclKind::Function(_) | DeclKind::Property(_) | DeclKind::Other(_) => None,
        }
    }
}

impl fmt::Display for ClassifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(fq_name) => write!(f, "class {fq_name}"),
            Self::EnumEntry { enum_class, entry } => write!(f, "entry {enum_class}.{entry}"),
            Self::TypeParameter { owner, name } => write!(f, "type parameter {name} of {owner}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallableKey {
    pub container: FqName,
    pub name: Name,
}

impl CallableKey {
    #[must_use]
    pub fn new(container: FqName, name: Name) -> Self {
        Self { container, name }
    }

    /// Key of `id`, with its container name substituted through `aliases`.
    #[must_use]
    pub fn of(arena: &IrArena, aliases: &TypeAliasMap, id: SymbolId) -> Self {
        let container = arena.container_fq_name(id);
        let container = aliases.get(&container).cloned().unwrap_or(container);
        Self::new(container, arena[id].name.clone())
    }
}

impl fmt::Display for CallableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.container.is_root() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.container, self.name)
        }
    }
}

/// Actual type alias name → qualified name of the class it expands to.
pub type TypeAliasMap = FxHashMap<FqName, FqName>;

#[derive(Debug, Default)]
pub struct ActualSymbolTable {
    classifiers: FxHashMap<ClassifierKey, SymbolId>,
    type_aliases: TypeAliasMap,
    /// Roots whose callables are indexed, in discovery order.
    actual_declarations: IndexSet<SymbolId>,
    functions: FxHashMap<CallableKey, SmallVec<[SymbolId; 1]>>,
    properties: FxHashMap<CallableKey, SymbolId>,
}

impl ActualSymbolTable {
    /// Index the classifiers of `main` and record its actual declarations.
    #[tracing::instrument(level = "debug", skip_all, fields(module = %main.name))]
    #[must_use]
    pub fn collect_classifiers(arena: &IrArena, main: &IrModule) -> Self {
        let mut table = Self::default();
        for &file in &main.files {
            for &id in &arena.file(file).declarations {
                table.visit_classifier(arena, id, true);
            }
        }
        trace!(
            classifiers = table.classifiers.len(),
            aliases = table.type_aliases.len(),
            roots = table.actual_declarations.len(),
            "collected classifiers"
        );
        table
    }

    fn visit_classifier(&mut self, arena: &IrArena, id: SymbolId, top_level: bool) {
        let decl = &arena[id];
        let proper_expect = arena.is_proper_expect(id);
        match &decl.kind {
            DeclKind::TypeAlias(data) => {
                if decl.is_actual() {
                    let target = data.expanded_type.classifier;
                    self.insert_classifier(ClassifierKey::Class(arena.fq_name(id)), target);
                    if arena.get(target).and_then(|d| d.as_class()).is_some() {
                        self.actual_declarations.insert(target);
                        self.type_aliases
                            .insert(arena.fq_name(id), arena.fq_name(target));
                    }
                } else if top_level && !proper_expect {
                    self.actual_declarations.insert(id);
                }
            }
            DeclKind::Class(data) => {
                if !proper_expect {
                    self.insert_classifier(ClassifierKey::Class(arena.fq_name(id)), id);
                    if top_level {
                        self.actual_declarations.insert(id);
                    }
                    for &member in &data.declarations {
                        if matches!(arena[member].kind, DeclKind::Class(_) | DeclKind::EnumEntry(_)) {
                            self.visit_classifier(arena, member, false);
                        }
                    }
                }
            }
            DeclKind::EnumEntry(_) => {
                if !proper_expect
                    && let Some(key) = ClassifierKey::of(arena, id)
                {
                    self.insert_classifier(key, id);
                }
            }
            DeclKind::Function(_)
            | DeclKind::Property(_)
            | DeclKind::TypeParameter(_)
            | DeclKind::Other(_) => {
                if top_level && !proper_expect {
                    self.actual_declarations.insert(id);
                }
            }
        }

        // Function type parameters are linked positionally by the callable linker.
        if !proper_expect && matches!(decl.kind, DeclKind::Class(_) | DeclKind::TypeAlias(_)) {
            for &parameter in decl.type_parameters() {
                if let Some(key) = ClassifierKey::of(arena, parameter) {
                    self.insert_classifier(key, parameter);
                }
            }
        }
    }

    fn insert_classifier(&mut self, key: ClassifierKey, actual: SymbolId) {
        if let Some(previous) = self.classifiers.insert(key.clone(), actual)
            && previous != actual
        {
            warn!(%key, ?previous, ?actual, "classifier key collision; keeping the later declaration");
        }
    }

    /// Index every function and property reachable from the actual roots.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn collect_callables(&mut self, arena: &IrArena) {
        let roots: Vec<SymbolId> = self.actual_declarations.iter().copied().collect();
        for root in roots {
            self.visit_callable(arena, root);
        }
        trace!(
            function_keys = self.functions.len(),
            properties = self.properties.len(),
            "collected callables"
        );
    }

    fn visit_callable(&mut self, arena: &IrArena, id: SymbolId) {
        let decl = &arena[id];
        match &decl.kind {
            DeclKind::Function(_) => {
                let key = CallableKey::new(arena.container_fq_name(id), decl.name.clone());
                self.functions.entry(key).or_default().push(id);
            }
            DeclKind::Property(_) => {
                let key = CallableKey::new(arena.container_fq_name(id), decl.name.clone());
                self.properties.entry(key).or_insert(id);
            }
            DeclKind::Class(data) => {
                for &member in &data.declarations {
                    self.visit_callable(arena, member);
                }
            }
            DeclKind::EnumEntry(_)
            | DeclKind::TypeAlias(_)
            | DeclKind::TypeParameter(_)
            | DeclKind::Other(_) => {}
        }
    }

    #[must_use]
    pub fn classifier(&self, key: &ClassifierKey) -> Option<SymbolId> {
        self.classifiers.get(key).copied()
    }

    #[must_use]
    pub fn type_aliases(&self) -> &TypeAliasMap {
        &self.type_aliases
    }

    #[must_use]
    pub fn actual_declarations(&self) -> &IndexSet<SymbolId> {
        &self.actual_declarations
    }

    /// Candidate functions for `key`, in declaration order.
    #[must_use]
    pub fn functions(&self, key: &CallableKey) -> &[SymbolId] {
        self.functions.get(key).map_or(&[], |bucket| bucket.as_slice())
    }

    #[must_use]
    pub fn property(&self, key: &CallableKey) -> Option<SymbolId> {
        self.properties.get(key).copied()
    }
}

#[cfg(test)]
#[path = "tests/symbol_table_tests.rs"]
mod tests;
