use super::*;
use crate::builder::IrBuilder;
use crate::decl::ClassKind;
use crate::expr::{Annotation, ConstValue};
use crate::module::IrModule;

#[test]
fn type_refs_include_arguments_in_order() {
    let ty = IrType::with_arguments(
        SymbolId(1),
        vec![IrType::simple(SymbolId(2)), IrType::simple(SymbolId(3)).make_nullable()],
    );
    assert_eq!(ty.collect_refs(), vec![SymbolId(1), SymbolId(2), SymbolId(3)]);
}

#[test]
fn expression_refs_cover_nested_calls() {
    let expr = Expression::Block {
        statements: vec![
            Expression::Call {
                callee: SymbolId(10),
                receiver: Some(Box::new(Expression::GetObject { class: SymbolId(11) })),
                type_arguments: vec![IrType::simple(SymbolId(12))],
                arguments: vec![Expression::GetEnumEntry { entry: SymbolId(13) }],
            },
            Expression::Return {
                target: SymbolId(14),
                value: Box::new(Expression::Const(ConstValue::Int(1))),
            },
        ],
    };
    assert_eq!(
        expr.collect_refs(),
        vec![SymbolId(10), SymbolId(11), SymbolId(12), SymbolId(13), SymbolId(14)]
    );
}

#[test]
fn mutable_walk_rewrites_every_reference() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("common");
    let file = b.file(&mut module, "a.kt", "p");
    let int = b.builtin_class("Int");
    let marker = b.class(file, "Marker", ClassKind::AnnotationClass);
    let function = b.function(file, "f", &[("x", IrType::simple(int))], IrType::simple(int));
    b.arena_mut()[function].annotations.push(Annotation {
        class: marker,
        arguments: Vec::new(),
    });

    let replacement = SymbolId(77);
    let mut arena = b.into_arena();
    arena[function].for_each_ref_mut(&mut |id| {
        if *id == int {
            *id = replacement;
        }
    });

    let data = arena[function].as_function().unwrap();
    assert_eq!(data.value_parameters[0].ty.classifier, replacement);
    assert_eq!(data.return_type.classifier, replacement);
    assert_eq!(arena[function].annotations[0].class, marker);
}

#[test]
fn declaration_refs_exclude_owned_children() {
    let mut b = IrBuilder::new();
    let mut module = IrModule::new("common");
    let file = b.file(&mut module, "a.kt", "p");
    let base = b.class(file, "Base", ClassKind::Interface);
    let class = b.class(file, "Foo", ClassKind::Class);
    b.super_type(class, IrType::simple(base));
    let tp = b.type_parameter(class, "T");
    let int = b.builtin_class("Int");
    let member = b.function(class, "m", &[], IrType::simple(int));

    let arena = b.arena();
    assert_eq!(arena[class].collect_refs(), vec![base]);
    assert_eq!(owned_children(&arena[class]).as_slice(), &[tp, member]);
}
