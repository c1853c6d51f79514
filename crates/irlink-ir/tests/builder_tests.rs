//! Tests for `IrBuilder` graph construction.

use irlink_ir::{
    ClassKind, DeclFlags, DeclParent, IrArena, IrBuilder, IrModule, IrType, SymbolRefs,
};

#[test]
fn builtin_classes_are_shared_and_synthetic() {
    let mut b = IrBuilder::new();
    let first = b.builtin_class("Int");
    let second = b.builtin_class("Int");
    assert_eq!(first, second);
    assert!(b.arena()[first].span.is_undefined());
}

#[test]
fn source_declarations_get_distinct_offsets() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("main");
    let file = b.file(&mut module, "a.kt", "p");
    let a = b.class(file, "A", ClassKind::Class);
    let c = b.class(file, "C", ClassKind::Class);

    let arena = b.arena();
    assert!(!arena[a].span.is_undefined());
    assert!(arena[a].span.end < arena[c].span.start);
}

#[test]
fn var_property_gets_named_accessors() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("main");
    let file = b.file(&mut module, "a.kt", "p");
    let int = b.builtin_class("Int");
    let class = b.class(file, "Counter", ClassKind::Class);
    let count = b.property(class, "count", IrType::simple(int), true);
    b.expect(count);

    let arena = b.arena();
    let data = arena[count].as_property().unwrap();
    let getter = data.getter.unwrap();
    let setter = data.setter.unwrap();
    assert_eq!(arena[getter].name.as_str(), "<get-count>");
    assert_eq!(arena[setter].name.as_str(), "<set-count>");
    assert_eq!(arena[getter].parent, DeclParent::Decl(class));
    assert_eq!(arena[class].members(), &[count]);
    assert!(arena[setter].flags.contains(DeclFlags::EXPECT));
    assert!(arena[count].flags.contains(DeclFlags::VAR));
    assert_eq!(
        arena[getter].as_function().unwrap().corresponding_property,
        Some(count)
    );
}

#[test]
fn constructors_have_no_dispatch_receiver() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("main");
    let file = b.file(&mut module, "a.kt", "p");
    let int = b.builtin_class("Int");
    let class = b.class(file, "Point", ClassKind::Class);
    let init = b.constructor(class, &[("x", IrType::simple(int))]);
    let method = b.function(class, "norm", &[], IrType::simple(int));

    let arena = b.arena();
    let init = arena[init].as_function().unwrap();
    assert!(init.is_constructor);
    assert!(init.dispatch_receiver.is_none());
    assert_eq!(
        arena[method].as_function().unwrap().dispatch_receiver.as_ref().map(|p| p.ty.classifier),
        Some(class)
    );
}

#[test]
fn arena_survives_json_transport() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("main");
    let file = b.file(&mut module, "a.kt", "p");
    let int = b.builtin_class("Int");
    let class = b.class(file, "Foo", ClassKind::Interface);
    b.expect(class);
    let tp = b.type_parameter(class, "T");
    b.function(class, "get", &[("index", IrType::simple(int))], IrType::simple(tp));

    let arena = b.into_arena();
    let json = serde_json::to_string(&arena).unwrap();
    let restored: IrArena = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), arena.len());
    assert!(restored.validate([&module]).is_ok());
    assert_eq!(restored.fq_name(class).as_str(), "p.Foo");
    assert!(restored.is_proper_expect(tp));
    for (id, decl) in arena.iter() {
        assert_eq!(restored[id].collect_refs(), decl.collect_refs());
    }
}
