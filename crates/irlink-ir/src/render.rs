//! One-line textual rendering of declarations for diagnostic messages.

use crate::arena::IrArena;
use crate::decl::{ClassKind, DeclKind};
use crate::flags::DeclFlags;
use crate::ids::SymbolId;
use crate::types::IrType;
use std::fmt::Write;

/// Render a type using the short name of its classifier.
#[must_use]
pub fn render_type(arena: &IrArena, ty: &IrType) -> String {
    let mut out = String::new();
    write_type(arena, ty, &mut out);
    out
}

fn write_type(arena: &IrArena, ty: &IrType, out: &mut String) {
    match arena.get(ty.classifier) {
        Some(decl) => out.push_str(decl.name.as_str()),
        None => {
            let _ = write!(out, "<unbound {}>", ty.classifier);
        }
    }
    if !ty.arguments.is_empty() {
        out.push('<');
        for (i, argument) in ty.arguments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_type(arena, argument, out);
        }
        out.push('>');
    }
    if ty.nullable {
        out.push('?');
    }
}

fn class_keyword(kind: ClassKind) -> &'static str {
    match kind {
        ClassKind::Class => "CLASS",
        ClassKind::Interface => "INTERFACE",
        ClassKind::EnumClass => "ENUM_CLASS",
        ClassKind::Object => "OBJECT",
        ClassKind::AnnotationClass => "ANNOTATION_CLASS",
    }
}

/// Render a declaration, e.g. `expect FUN pkg.bar(x: Int): Unit`.
#[must_use]
pub fn render(arena: &IrArena, id: SymbolId) -> String {
    let decl = &arena[id];
    let mut out = String::new();
    if decl.flags.contains(DeclFlags::EXPECT) {
        out.push_str("expect ");
    } else if decl.flags.contains(DeclFlags::ACTUAL) {
        out.push_str("actual ");
    }
    if decl.is_fake_override() {
        out.push_str("fake_override ");
    }

    let fq_name = arena.fq_name(id);
    match &decl.kind {
        DeclKind::Class(data) => {
            let _ = write!(out, "{} {}", class_keyword(data.class_kind), fq_name);
            write_type_parameters(arena, &data.type_parameters, &mut out);
        }
        DeclKind::EnumEntry(_) => {
            let _ = write!(out, "ENUM_ENTRY {fq_name}");
        }
        DeclKind::Function(data) => {
            let keyword = if data.is_constructor { "CONSTRUCTOR" } else { "FUN" };
            let _ = write!(out, "{keyword} ");
            write_type_parameters(arena, &data.type_parameters, &mut out);
            if !data.type_parameters.is_empty() {
                out.push(' ');
            }
            if let Some(receiver) = &data.extension_receiver {
                write_type(arena, &receiver.ty, &mut out);
                out.push('.');
            }
            let _ = write!(out, "{fq_name}(");
            for (i, parameter) in data.value_parameters.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if parameter.is_vararg {
                    out.push_str("vararg ");
                }
                let _ = write!(out, "{}: ", parameter.name);
                write_type(arena, &parameter.ty, &mut out);
            }
            out.push_str("): ");
            write_type(arena, &data.return_type, &mut out);
        }
        DeclKind::Property(data) => {
            let keyword = if decl.flags.contains(DeclFlags::VAR) {
                "var"
            } else {
                "val"
            };
            let _ = write!(out, "PROPERTY {keyword} {fq_name}");
            let ty = data
                .getter
                .and_then(|getter| arena[getter].as_function())
                .map(|getter| &getter.return_type)
                .or(data.backing_field_type.as_ref());
            if let Some(ty) = ty {
                out.push_str(": ");
                write_type(arena, ty, &mut out);
            }
        }
        DeclKind::TypeAlias(data) => {
            let _ = write!(out, "TYPEALIAS {fq_name} = ");
            write_type(arena, &data.expanded_type, &mut out);
        }
        DeclKind::TypeParameter(_) => {
            let _ = write!(
                out,
                "TYPE_PARAMETER {} of {}",
                decl.name,
                arena.container_fq_name(id)
            );
        }
        DeclKind::Other(_) => {
            let _ = write!(out, "DECLARATION {fq_name}");
        }
    }
    out
}

fn write_type_parameters(arena: &IrArena, type_parameters: &[SymbolId], out: &mut String) {
    if type_parameters.is_empty() {
        return;
    }
    out.push('<');
    for (i, &parameter) in type_parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(arena[parameter].name.as_str());
    }
    out.push('>');
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
