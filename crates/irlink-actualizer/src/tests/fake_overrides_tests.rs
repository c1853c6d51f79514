use super::*;
use crate::options::DiagnosticMode;
use irlink_ir::{ClassKind, FileId, IrBuilder, IrType};

struct Graph {
    b: IrBuilder,
    common: IrModule,
    main_file: FileId,
    common_file: FileId,
    remapping: Remapping,
}

fn graph() -> Graph {
    let mut b = IrBuilder::new();
    let mut main = IrModule::new("main");
    let mut common = IrModule::new("common");
    let main_file = b.file(&mut main, "platform.kt", "p");
    let common_file = b.file(&mut common, "common.kt", "p");
    Graph {
        b,
        common,
        main_file,
        common_file,
        remapping: Remapping::new(),
    }
}

impl Graph {
    /// An expect interface in common linked to an actual one in main.
    fn linked_interface(&mut self, name: &str) -> (SymbolId, SymbolId) {
        let expect = self.b.class(self.common_file, name, ClassKind::Interface);
        self.b.expect(expect);
        let actual = self.b.class(self.main_file, name, ClassKind::Interface);
        self.b.actual(actual);
        self.remapping.insert(expect, actual);
        (expect, actual)
    }

    fn subclass(&mut self, name: &str, supers: &[SymbolId]) -> SymbolId {
        let class = self.b.class(self.common_file, name, ClassKind::Class);
        for &super_type in supers {
            self.b.super_type(class, IrType::simple(super_type));
        }
        class
    }

    fn run(&mut self, mode: DiagnosticMode) -> (Result<Vec<SymbolId>>, DiagnosticReporter) {
        let mut reporter = DiagnosticReporter::new(mode);
        let result = add_missing_fake_overrides(
            self.b.arena_mut(),
            std::slice::from_ref(&self.common),
            &self.remapping,
            &mut reporter,
        );
        (result, reporter)
    }
}

#[test]
fn inherited_actual_member_becomes_fake_override() {
    let mut g = graph();
    let unit = g.b.builtin_class("Unit");
    let (expect_iface, actual_iface) = g.linked_interface("Iface");
    let baz = g.b.function(actual_iface, "baz", &[], IrType::simple(unit));
    g.b.actual(baz);
    let class = g.subclass("Impl", &[expect_iface]);

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    let synthesized = result.unwrap();
    assert_eq!(synthesized.len(), 1);

    let arena = g.b.arena();
    let fake = synthesized[0];
    let decl = &arena[fake];
    assert!(decl.is_fake_override());
    assert!(!decl.is_actual());
    assert_eq!(decl.name.as_str(), "baz");
    assert_eq!(decl.parent, DeclParent::Decl(class));
    assert_eq!(decl.span, arena[baz].span);
    let data = decl.as_function().unwrap();
    assert_eq!(data.overridden_symbols, vec![baz]);
    assert!(data.body.is_none());
    assert_eq!(arena[class].members(), &[fake]);
    assert!(!arena.is_proper_expect(fake));
}

#[test]
fn declared_member_matching_inherited_function_is_a_conflict() {
    let mut g = graph();
    let unit = g.b.builtin_class("Unit");
    let (expect_iface, actual_iface) = g.linked_interface("Iface");
    g.b.function(actual_iface, "baz", &[], IrType::simple(unit));
    let class = g.subclass("Impl", &[expect_iface]);
    let own = g.b.function(class, "baz", &[], IrType::simple(unit));

    let (result, reporter) = g.run(DiagnosticMode::Accumulate);
    assert!(result.unwrap().is_empty());
    assert_eq!(g.b.arena()[class].members(), &[own]);

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        irlink_common::diagnostic_codes::MANY_INTERFACES_MEMBER_NOT_IMPLEMENTED
    );
    assert!(diagnostics[0].message_text.starts_with("CLASS p.Impl must override FUN p.Iface.baz()"));
}

#[test]
fn declared_member_named_like_inherited_property_is_a_conflict() {
    let mut g = graph();
    let int = g.b.builtin_class("Int");
    let (expect_iface, actual_iface) = g.linked_interface("Sized");
    g.b.property(actual_iface, "size", IrType::simple(int), false);
    let class = g.subclass("Impl", &[expect_iface]);
    g.b.property(class, "size", IrType::simple(int), false);

    let (result, reporter) = g.run(DiagnosticMode::Accumulate);
    assert!(result.unwrap().is_empty());
    assert_eq!(g.b.arena()[class].members().len(), 1);
    assert_eq!(reporter.diagnostics().len(), 1);

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    assert_eq!(result.unwrap_err().diagnostics().len(), 1);
}

#[test]
fn overload_with_other_parameters_is_still_synthesized() {
    let mut g = graph();
    let unit = g.b.builtin_class("Unit");
    let int = g.b.builtin_class("Int");
    let (expect_iface, actual_iface) = g.linked_interface("Iface");
    g.b.function(actual_iface, "baz", &[("x", IrType::simple(int))], IrType::simple(unit));
    let class = g.subclass("Impl", &[expect_iface]);
    g.b.function(class, "baz", &[], IrType::simple(unit));

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    assert_eq!(result.unwrap().len(), 1);
    assert_eq!(g.b.arena()[class].members().len(), 2);
}

#[test]
fn member_inherited_twice_is_a_conflict() {
    let mut g = graph();
    let unit = g.b.builtin_class("Unit");
    let (expect_a, actual_a) = g.linked_interface("IfaceA");
    let (expect_b, actual_b) = g.linked_interface("IfaceB");
    let baz_a = g.b.function(actual_a, "baz", &[], IrType::simple(unit));
    g.b.function(actual_b, "baz", &[], IrType::simple(unit));
    let class = g.subclass("Impl", &[expect_a, expect_b]);

    let (result, reporter) = g.run(DiagnosticMode::Accumulate);
    let synthesized = result.unwrap();
    assert_eq!(synthesized.len(), 1);
    let data = g.b.arena()[synthesized[0]].as_function().unwrap();
    assert_eq!(data.overridden_symbols, vec![baz_a]);
    assert_eq!(g.b.arena()[class].members(), &[synthesized[0]]);

    let diagnostics = reporter.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].code,
        irlink_common::diagnostic_codes::MANY_INTERFACES_MEMBER_NOT_IMPLEMENTED
    );
    assert!(diagnostics[0].message_text.starts_with("CLASS p.Impl must override FUN p.IfaceB.baz()"));
}

#[test]
fn conflict_aborts_by_default() {
    let mut g = graph();
    let int = g.b.builtin_class("Int");
    let (expect_a, actual_a) = g.linked_interface("IfaceA");
    let (expect_b, actual_b) = g.linked_interface("IfaceB");
    g.b.property(actual_a, "size", IrType::simple(int), false);
    g.b.property(actual_b, "size", IrType::simple(int), false);
    g.subclass("Impl", &[expect_a, expect_b]);

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    let err = result.unwrap_err();
    assert_eq!(err.diagnostics().len(), 1);
}

#[test]
fn synthetic_members_and_constructors_are_skipped() {
    let mut g = graph();
    let unit = g.b.builtin_class("Unit");
    let (expect_base, actual_base) = g.linked_interface("Base");
    let hidden = g.b.function(actual_base, "hidden", &[], IrType::simple(unit));
    g.b.synthetic(hidden);
    g.b.constructor(actual_base, &[]);
    let class = g.subclass("Impl", &[expect_base]);

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    assert!(result.unwrap().is_empty());
    assert!(g.b.arena()[class].members().is_empty());
}

#[test]
fn property_clone_gets_its_own_accessors() {
    let mut g = graph();
    let int = g.b.builtin_class("Int");
    let (expect_iface, actual_iface) = g.linked_interface("Sized");
    let size = g.b.property(actual_iface, "size", IrType::simple(int), true);
    let class = g.subclass("Impl", &[expect_iface]);

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    let synthesized = result.unwrap();
    assert_eq!(synthesized.len(), 1);

    let arena = g.b.arena();
    let fake = synthesized[0];
    let actual_data = arena[size].as_property().unwrap();
    let data = arena[fake].as_property().unwrap();
    assert!(arena[fake].flags.contains(DeclFlags::VAR));
    assert_eq!(data.overridden_symbols, vec![size]);
    assert_eq!(data.backing_field_type, Some(IrType::simple(int)));

    let getter = data.getter.unwrap();
    let setter = data.setter.unwrap();
    assert_ne!(Some(getter), actual_data.getter);
    for (accessor, source) in [(getter, actual_data.getter), (setter, actual_data.setter)] {
        let decl = &arena[accessor];
        assert!(decl.is_fake_override());
        assert_eq!(decl.parent, DeclParent::Decl(class));
        let accessor_data = decl.as_function().unwrap();
        assert_eq!(accessor_data.corresponding_property, Some(fake));
        assert_eq!(accessor_data.overridden_symbols, source.into_iter().collect::<Vec<_>>());
    }
    assert_eq!(arena[class].members(), &[fake]);
}

#[test]
fn type_parameters_are_fresh_copies() {
    let mut g = graph();
    let (expect_iface, actual_iface) = g.linked_interface("Wrapper");
    let unit = g.b.builtin_class("Unit");
    let wrap = g.b.function(actual_iface, "wrap", &[], IrType::simple(unit));
    let t = g.b.type_parameter(wrap, "T");
    {
        let data = g.b.arena_mut()[wrap].as_function_mut().unwrap();
        data.value_parameters = vec![irlink_ir::ValueParameter::new("value", IrType::simple(t))];
        data.return_type = IrType::simple(t);
    }
    g.subclass("Impl", &[expect_iface]);

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    let fake = result.unwrap()[0];

    let arena = g.b.arena();
    let data = arena[fake].as_function().unwrap();
    assert_eq!(data.type_parameters.len(), 1);
    let fresh = data.type_parameters[0];
    assert_ne!(fresh, t);
    assert_eq!(arena[fresh].parent, DeclParent::Decl(fake));
    assert_eq!(arena[fresh].name.as_str(), "T");
    assert_eq!(data.value_parameters[0].ty.classifier, fresh);
    assert_eq!(data.return_type.classifier, fresh);
    assert_eq!(arena[wrap].as_function().unwrap().return_type.classifier, t);
}

#[test]
fn members_are_spliced_in_declaration_order() {
    let mut g = graph();
    let unit = g.b.builtin_class("Unit");
    let (expect_iface, actual_iface) = g.linked_interface("Twice");
    g.b.function(actual_iface, "first", &[], IrType::simple(unit));
    g.b.function(actual_iface, "second", &[], IrType::simple(unit));
    let class = g.subclass("Impl", &[expect_iface]);

    let (result, reporter) = g.run(DiagnosticMode::Accumulate);
    let synthesized = result.unwrap();
    assert_eq!(synthesized.len(), 2);
    assert!(reporter.diagnostics().is_empty());
    let names: Vec<_> = g.b.arena()[class]
        .members()
        .iter()
        .map(|&m| g.b.arena()[m].name.as_str().to_string())
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn unlinked_supertypes_and_expect_classes_are_ignored() {
    let mut g = graph();
    let unit = g.b.builtin_class("Unit");
    let plain = g.b.class(g.common_file, "Plain", ClassKind::Interface);
    g.b.function(plain, "run", &[], IrType::simple(unit));
    let class = g.subclass("Impl", &[plain]);

    let (expect_iface, actual_iface) = g.linked_interface("Iface");
    g.b.function(actual_iface, "baz", &[], IrType::simple(unit));
    let expect_class = g.subclass("ExpectImpl", &[expect_iface]);
    g.b.expect(expect_class);

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    assert!(result.unwrap().is_empty());
    assert!(g.b.arena()[class].members().is_empty());
    assert!(g.b.arena()[expect_class].members().is_empty());
}

#[test]
fn nested_classes_receive_fake_overrides() {
    let mut g = graph();
    let unit = g.b.builtin_class("Unit");
    let (expect_iface, actual_iface) = g.linked_interface("Iface");
    g.b.function(actual_iface, "baz", &[], IrType::simple(unit));
    let outer = g.subclass("Outer", &[]);
    let inner = g.b.class(outer, "Inner", ClassKind::Class);
    g.b.super_type(inner, IrType::simple(expect_iface));

    let (result, _) = g.run(DiagnosticMode::AbortOnFirst);
    let synthesized = result.unwrap();
    assert_eq!(synthesized.len(), 1);
    assert_eq!(g.b.arena()[synthesized[0]].parent, DeclParent::Decl(inner));
}
