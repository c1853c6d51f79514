use super::*;

#[test]
fn resolve_falls_back_to_the_symbol_itself() {
    let mut remapping = Remapping::new();
    remapping.insert(SymbolId(1), SymbolId(7));

    assert_eq!(remapping.resolve(SymbolId(1)), SymbolId(7));
    assert_eq!(remapping.resolve(SymbolId(2)), SymbolId(2));
    assert!(remapping.contains(SymbolId(1)));
    assert!(!remapping.contains(SymbolId(7)));
}

#[test]
fn iteration_follows_link_order() {
    let mut remapping = Remapping::new();
    remapping.insert(SymbolId(5), SymbolId(50));
    remapping.insert(SymbolId(2), SymbolId(20));
    remapping.insert(SymbolId(9), SymbolId(90));

    let keys: Vec<_> = remapping.iter().map(|(expect, _)| expect.0).collect();
    assert_eq!(keys, vec![5, 2, 9]);
}

#[test]
fn relinking_returns_previous_target() {
    let mut remapping = Remapping::new();
    assert_eq!(remapping.insert(SymbolId(1), SymbolId(2)), None);
    assert_eq!(remapping.insert(SymbolId(1), SymbolId(3)), Some(SymbolId(2)));
    assert_eq!(remapping.len(), 1);
}

#[test]
fn find_chain_detects_targets_that_are_keys() {
    let mut remapping = Remapping::new();
    remapping.insert(SymbolId(1), SymbolId(2));
    assert_eq!(remapping.find_chain(), None);

    remapping.insert(SymbolId(2), SymbolId(3));
    assert_eq!(remapping.find_chain(), Some((SymbolId(1), SymbolId(2))));
}

#[test]
fn serializes_as_a_map() {
    let mut remapping = Remapping::new();
    remapping.insert(SymbolId(4), SymbolId(8));
    let json = serde_json::to_string(&remapping).unwrap();
    assert_eq!(json, r#"{"4":8}"#);
}
