use super::*;
use crate::builder::IrBuilder;
use crate::decl::ClassKind;
use crate::module::IrModule;

#[test]
fn renders_expect_function_with_parameters() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("common");
    let file = b.file(&mut module, "a.kt", "pkg");
    let int = b.builtin_class("Int");
    let unit = b.builtin_class("Unit");
    let bar = b.function(file, "bar", &[("x", IrType::simple(int))], IrType::simple(unit));
    b.expect(bar);

    assert_eq!(render(b.arena(), bar), "expect FUN pkg.bar(x: Int): Unit");
}

#[test]
fn renders_classifiers_by_kind() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("common");
    let file = b.file(&mut module, "a.kt", "pkg");
    let iface = b.class(file, "IfaceA", ClassKind::Interface);
    let enum_class = b.class(file, "E", ClassKind::EnumClass);
    let entry = b.enum_entry(enum_class, "Foo");
    let generic = b.class(file, "Box", ClassKind::Class);
    let tp = b.type_parameter(generic, "T");
    b.actual(generic);

    let arena = b.arena();
    assert_eq!(render(arena, iface), "INTERFACE pkg.IfaceA");
    assert_eq!(render(arena, entry), "ENUM_ENTRY pkg.E.Foo");
    assert_eq!(render(arena, generic), "actual CLASS pkg.Box<T>");
    assert_eq!(render(arena, tp), "TYPE_PARAMETER T of pkg.Box");
}

#[test]
fn renders_property_type_and_nullable_arguments() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("common");
    let file = b.file(&mut module, "a.kt", "pkg");
    let string = b.builtin_class("String");
    let list = b.builtin_class("List");
    let ty = IrType::with_arguments(list, vec![IrType::simple(string).make_nullable()]);
    let names = b.property(file, "names", ty, true);

    assert_eq!(render(b.arena(), names), "PROPERTY var pkg.names: List<String?>");
}

#[test]
fn unbound_classifiers_render_without_panicking() {
    let arena = IrArena::new();
    assert_eq!(
        render_type(&arena, &IrType::simple(SymbolId(5))),
        "<unbound #5>"
    );
}
