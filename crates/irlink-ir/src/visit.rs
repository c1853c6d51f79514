//! Symbol reference walking.
//!
//! `SymbolRefs` enumerates the *reference* fields of a node: the symbols a node
//! points at without owning them. Ownership links (member lists, accessors,
//! type-parameter lists) are enumerated separately by `owned_children`, so a
//! rewrite through `for_each_ref_mut` can never detach a subtree.

use crate::decl::{DeclKind, Declaration, ValueParameter};
use crate::expr::{Annotation, Expression};
use crate::ids::SymbolId;
use crate::types::IrType;
use smallvec::SmallVec;

pub trait SymbolRefs {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F);
    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F);

    /// Collect every reference in visit order.
    fn collect_refs(&self) -> Vec<SymbolId> {
        let mut refs = Vec::new();
        self.for_each_ref(&mut |id| refs.push(id));
        refs
    }
}

impl SymbolRefs for IrType {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F) {
        f(self.classifier);
        for argument in &self.arguments {
            argument.for_each_ref(f);
        }
    }

    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F) {
        f(&mut self.classifier);
        for argument in &mut self.arguments {
            argument.for_each_ref_mut(f);
        }
    }
}

impl SymbolRefs for ValueParameter {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F) {
        self.ty.for_each_ref(f);
    }

    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F) {
        self.ty.for_each_ref_mut(f);
    }
}

impl SymbolRefs for Annotation {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F) {
        f(self.class);
        for argument in &self.arguments {
            argument.for_each_ref(f);
        }
    }

    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F) {
        f(&mut self.class);
        for argument in &mut self.arguments {
            argument.for_each_ref_mut(f);
        }
    }
}

impl<T: SymbolRefs> SymbolRefs for Option<T> {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F) {
        if let Some(inner) = self {
            inner.for_each_ref(f);
        }
    }

    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F) {
        if let Some(inner) = self {
            inner.for_each_ref_mut(f);
        }
    }
}

impl<T: SymbolRefs> SymbolRefs for Vec<T> {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F) {
        for item in self {
            item.for_each_ref(f);
        }
    }

    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F) {
        for item in self {
            item.for_each_ref_mut(f);
        }
    }
}

impl<T: SymbolRefs> SymbolRefs for Box<T> {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F) {
        (**self).for_each_ref(f);
    }

    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F) {
        (**self).for_each_ref_mut(f);
    }
}

impl SymbolRefs for Expression {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F) {
        match self {
            Expression::Const(_) | Expression::GetValue { .. } => {}
            Expression::Call {
                callee,
                receiver,
                type_arguments,
                arguments,
            } => {
                f(*callee);
                receiver.for_each_ref(f);
                type_arguments.for_each_ref(f);
                arguments.for_each_ref(f);
            }
            Expression::ConstructorCall {
                constructor,
                ty,
                arguments,
            } => {
                f(*constructor);
                ty.for_each_ref(f);
                arguments.for_each_ref(f);
            }
            Expression::GetProperty { property, receiver } => {
                f(*property);
                receiver.for_each_ref(f);
            }
            Expression::SetProperty {
                property,
                receiver,
                value,
            } => {
                f(*property);
                receiver.for_each_ref(f);
                value.for_each_ref(f);
            }
            Expression::GetEnumEntry { entry } => f(*entry),
            Expression::GetObject { class } => f(*class),
            Expression::TypeOperator {
                operand, argument, ..
            } => {
                operand.for_each_ref(f);
                argument.for_each_ref(f);
            }
            Expression::Block { statements } => statements.for_each_ref(f),
            Expression::Return { target, value } => {
                f(*target);
                value.for_each_ref(f);
            }
        }
    }

    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F) {
        match self {
            Expression::Const(_) | Expression::GetValue { .. } => {}
            Expression::Call {
                callee,
                receiver,
                type_arguments,
                arguments,
            } => {
                f(callee);
                receiver.for_each_ref_mut(f);
                type_arguments.for_each_ref_mut(f);
                arguments.for_each_ref_mut(f);
            }
            Expression::ConstructorCall {
                constructor,
                ty,
                arguments,
            } => {
                f(constructor);
                ty.for_each_ref_mut(f);
                arguments.for_each_ref_mut(f);
            }
            Expression::GetProperty { property, receiver } => {
                f(property);
                receiver.for_each_ref_mut(f);
            }
            Expression::SetProperty {
                property,
                receiver,
                value,
            } => {
                f(property);
                receiver.for_each_ref_mut(f);
                value.for_each_ref_mut(f);
            }
            Expression::GetEnumEntry { entry } => f(entry),
            Expression::GetObject { class } => f(class),
            Expression::TypeOperator {
                operand, argument, ..
            } => {
                operand.for_each_ref_mut(f);
                argument.for_each_ref_mut(f);
            }
            Expression::Block { statements } => statements.for_each_ref_mut(f),
            Expression::Return { target, value } => {
                f(target);
                value.for_each_ref_mut(f);
            }
        }
    }
}

/// References held by the declaration node itself; children are not visited.
impl SymbolRefs for Declaration {
    fn for_each_ref<F: FnMut(SymbolId)>(&self, f: &mut F) {
        self.annotations.for_each_ref(f);
        match &self.kind {
            DeclKind::Class(data) => data.super_types.for_each_ref(f),
            DeclKind::EnumEntry(data) => data.initializer.for_each_ref(f),
            DeclKind::Function(data) => {
                data.dispatch_receiver.for_each_ref(f);
                data.extension_receiver.for_each_ref(f);
                data.value_parameters.for_each_ref(f);
                data.return_type.for_each_ref(f);
                for overridden in &data.overridden_symbols {
                    f(*overridden);
                }
                if let Some(property) = data.corresponding_property {
                    f(property);
                }
                data.body.for_each_ref(f);
            }
            DeclKind::Property(data) => {
                data.backing_field_type.for_each_ref(f);
                for overridden in &data.overridden_symbols {
                    f(*overridden);
                }
                data.initializer.for_each_ref(f);
            }
            DeclKind::TypeAlias(data) => data.expanded_type.for_each_ref(f),
            DeclKind::TypeParameter(data) => data.super_types.for_each_ref(f),
            DeclKind::Other(data) => {
                for reference in &data.references {
                    f(*reference);
                }
                data.types.for_each_ref(f);
                data.body.for_each_ref(f);
            }
        }
    }

    fn for_each_ref_mut<F: FnMut(&mut SymbolId)>(&mut self, f: &mut F) {
        self.annotations.for_each_ref_mut(f);
        match &mut self.kind {
            DeclKind::Class(data) => data.super_types.for_each_ref_mut(f),
            DeclKind::EnumEntry(data) => data.initializer.for_each_ref_mut(f),
            DeclKind::Function(data) => {
                data.dispatch_receiver.for_each_ref_mut(f);
                data.extension_receiver.for_each_ref_mut(f);
                data.value_parameters.for_each_ref_mut(f);
                data.return_type.for_each_ref_mut(f);
                for overridden in &mut data.overridden_symbols {
                    f(overridden);
                }
                if let Some(property) = &mut data.corresponding_property {
                    f(property);
                }
                data.body.for_each_ref_mut(f);
            }
            DeclKind::Property(data) => {
                data.backing_field_type.for_each_ref_mut(f);
                for overridden in &mut data.overridden_symbols {
                    f(overridden);
                }
                data.initializer.for_each_ref_mut(f);
            }
            DeclKind::TypeAlias(data) => data.expanded_type.for_each_ref_mut(f),
            DeclKind::TypeParameter(data) => data.super_types.for_each_ref_mut(f),
            DeclKind::Other(data) => {
                for reference in &mut data.references {
                    f(reference);
                }
                data.types.for_each_ref_mut(f);
                data.body.for_each_ref_mut(f);
            }
        }
    }
}

/// Declarations owned by `decl`, in a stable order: type parameters, then
/// accessors, then members.
#[must_use]
pub fn owned_children(decl: &Declaration) -> SmallVec<[SymbolId; 8]> {
    let mut children = SmallVec::new();
    match &decl.kind {
        DeclKind::Class(data) => {
            children.extend(data.type_parameters.iter().copied());
            children.extend(data.declarations.iter().copied());
        }
        DeclKind::Function(data) => children.extend(data.type_parameters.iter().copied()),
        DeclKind::Property(data) => {
            children.extend(data.getter);
            children.extend(data.setter);
        }
        DeclKind::TypeAlias(data) => children.extend(data.type_parameters.iter().copied()),
        DeclKind::EnumEntry(_) | DeclKind::TypeParameter(_) | DeclKind::Other(_) => {}
    }
    children
}

#[cfg(test)]
#[path = "tests/visit_tests.rs"]
mod tests;
