//! Fake-override synthesis for classes whose supertypes became actual.
//!
//! After linking, a non-expect class in a dependent module may extend an
//! actual class or interface declaring members the expect declaration never
//! had. Each such member is materialized in the subclass as a fake override:
//! a body-less clone whose `overridden_symbols` points at the actual member.
//!
//! Members synthesized for one supertype are buffered and spliced into the
//! class once that supertype is done; the by-name index is rebuilt at each
//! supertype boundary, so a later supertype sees them. An inherited member
//! that matches any member the class already has is reported as a conflict.

use crate::error::Result;
use crate::remapping::Remapping;
use crate::reporter::DiagnosticReporter;
use crate::signature::signatures_match;
use irlink_ir::{
    DeclFlags, DeclKind, DeclOrigin, DeclParent, Declaration, FunctionData, IrArena, IrModule,
    Name, PropertyData, SymbolId, SymbolRefs,
};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

type MembersByName = FxHashMap<Name, SmallVec<[SymbolId; 2]>>;

#[derive(Clone, Copy, Debug)]
enum Pending {
    Function(SymbolId),
    Property(SymbolId),
}

struct FakeOverrideBuilder<'a> {
    arena: &'a mut IrArena,
    remapping: &'a Remapping,
    reporter: &'a mut DiagnosticReporter,
    synthesized: Vec<SymbolId>,
}

/// Add fake overrides to every non-expect class of the dependent modules.
/// Returns the synthesized members in creation order.
#[tracing::instrument(level = "debug", skip_all, fields(modules = dependents.len()))]
pub fn add_missing_fake_overrides(
    arena: &mut IrArena,
    dependents: &[IrModule],
    remapping: &Remapping,
    reporter: &mut DiagnosticReporter,
) -> Result<Vec<SymbolId>> {
    let mut classes = Vec::new();
    for module in dependents {
        arena.walk_module(module, &mut |id| {
            if arena[id].as_class().is_some() && !arena.is_proper_expect(id) {
                classes.push(id);
            }
        });
    }

    let mut builder = FakeOverrideBuilder {
        arena,
        remapping,
        reporter,
        synthesized: Vec::new(),
    };
    for class in classes {
        builder.process_class(class)?;
    }
    debug!(synthesized = builder.synthesized.len(), "fake overrides added");
    Ok(builder.synthesized)
}

impl FakeOverrideBuilder<'_> {
    fn process_class(&mut self, class: SymbolId) -> Result<()> {
        let super_types: Vec<SymbolId> = self.arena[class]
            .as_class()
            .map(|data| data.super_types.iter().map(|ty| ty.classifier).collect())
            .unwrap_or_default();

        for super_type in super_types {
            let Some(actual_class) = self.remapping.get(super_type) else {
                continue;
            };
            let Some(actual_members) = self.arena[actual_class]
                .as_class()
                .map(|data| data.declarations.clone())
            else {
                continue;
            };

            let members_by_name = self.members_by_name(class);
            let mut pending = Vec::new();
            for member in actual_members {
                if let Some(entry) = self.inspect(class, member, &members_by_name)? {
                    pending.push(entry);
                }
            }

            for entry in pending {
                let id = match entry {
                    Pending::Function(actual) => self.clone_function(actual, class, None),
                    Pending::Property(actual) => self.clone_property(actual, class),
                };
                self.arena.push_child(DeclParent::Decl(class), id);
                trace!(?class, fake_override = ?id, "spliced fake override");
                self.synthesized.push(id);
            }
        }
        Ok(())
    }

    /// Own members of `class` with defined offsets, grouped by name.
    fn members_by_name(&self, class: SymbolId) -> MembersByName {
        let mut index = MembersByName::default();
        for &member in self.arena[class].members() {
            let decl = &self.arena[member];
            if !decl.span.is_undefined() {
                index.entry(decl.name.clone()).or_default().push(member);
            }
        }
        index
    }

    /// Decide what to do with one inherited `member`: a pending clone, or a
    /// conflict when `class` already has a member it would collide with.
    fn inspect(
        &mut self,
        class: SymbolId,
        member: SymbolId,
        members_by_name: &MembersByName,
    ) -> Result<Option<Pending>> {
        let decl = &self.arena[member];
        if decl.span.is_undefined() {
            return Ok(None);
        }
        let existing = members_by_name.get(&decl.name).map_or(&[][..], |bucket| bucket.as_slice());
        let pending = match &decl.kind {
            DeclKind::Function(data) if !data.is_constructor => {
                let arena = &*self.arena;
                let matching = existing.iter().copied().find(|&own| {
                    arena[own].as_function().is_some()
                        && signatures_match(arena, self.remapping, own, member)
                });
                match matching {
                    Some(own) => {
                        trace!(?class, ?member, ?own, "inherited member already present");
                        None
                    }
                    None => Some(Pending::Function(member)),
                }
            }
            DeclKind::Property(_) if existing.is_empty() => Some(Pending::Property(member)),
            DeclKind::Property(_) => None,
            _ => return Ok(None),
        };
        if pending.is_none() {
            self.conflict(class, member)?;
        }
        Ok(pending)
    }

    fn conflict(&mut self, class: SymbolId, member: SymbolId) -> Result<()> {
        self.reporter
            .many_interfaces_not_implemented(self.arena, class, member)
    }

    /// Clone the actual function `source` as a fake override owned by `class`.
    /// Accessors pass the property they belong to.
    fn clone_function(
        &mut self,
        source: SymbolId,
        class: SymbolId,
        corresponding_property: Option<SymbolId>,
    ) -> SymbolId {
        let original = &self.arena[source];
        let Some(data) = original.as_function() else {
            return source;
        };
        let old_parameters = data.type_parameters.clone();
        let clone = Declaration {
            name: original.name.clone(),
            parent: DeclParent::Decl(class),
            flags: original.flags - DeclFlags::LINKAGE,
            origin: DeclOrigin::FakeOverride,
            span: original.span,
            annotations: original.annotations.clone(),
            kind: DeclKind::Function(FunctionData {
                visibility: data.visibility,
                modality: data.modality,
                is_constructor: false,
                type_parameters: Vec::new(),
                dispatch_receiver: data.dispatch_receiver.clone(),
                extension_receiver: data.extension_receiver.clone(),
                context_receiver_count: data.context_receiver_count,
                value_parameters: data.value_parameters.clone(),
                return_type: data.return_type.clone(),
                overridden_symbols: vec![source],
                corresponding_property,
                body: None,
            }),
        };
        let id = self.arena.alloc(clone);

        let mut substitution = FxHashMap::default();
        let mut fresh = Vec::with_capacity(old_parameters.len());
        for old in old_parameters {
            let mut parameter = self.arena[old].clone();
            parameter.parent = DeclParent::Decl(id);
            parameter.origin = DeclOrigin::FakeOverride;
            parameter.flags -= DeclFlags::LINKAGE;
            let new = self.arena.alloc(parameter);
            substitution.insert(old, new);
            fresh.push(new);
        }
        if !substitution.is_empty() {
            let mut redirect = |symbol: &mut SymbolId| {
                if let Some(&new) = substitution.get(&*symbol) {
                    *symbol = new;
                }
            };
            self.arena[id].for_each_ref_mut(&mut redirect);
            for &new in &fresh {
                self.arena[new].for_each_ref_mut(&mut redirect);
            }
        }
        if let Some(data) = self.arena[id].as_function_mut() {
            data.type_parameters = fresh;
        }
        id
    }

    fn clone_property(&mut self, source: SymbolId, class: SymbolId) -> SymbolId {
        let original = &self.arena[source];
        let Some(data) = original.as_property() else {
            return source;
        };
        let (getter, setter) = (data.getter, data.setter);
        let clone = Declaration {
            name: original.name.clone(),
            parent: DeclParent::Decl(class),
            flags: original.flags - DeclFlags::LINKAGE,
            origin: DeclOrigin::FakeOverride,
            span: original.span,
            annotations: original.annotations.clone(),
            kind: DeclKind::Property(PropertyData {
                visibility: data.visibility,
                modality: data.modality,
                getter: None,
                setter: None,
                backing_field_type: data.backing_field_type.clone(),
                overridden_symbols: vec![source],
                initializer: None,
            }),
        };
        let id = self.arena.alloc(clone);

        let getter = getter.map(|getter| self.clone_function(getter, class, Some(id)));
        let setter = setter.map(|setter| self.clone_function(setter, class, Some(id)));
        if let Some(data) = self.arena[id].as_property_mut() {
            data.getter = getter;
            data.setter = setter;
        }
        id
    }
}

#[cfg(test)]
#[path = "tests/fake_overrides_tests.rs"]
mod tests;
