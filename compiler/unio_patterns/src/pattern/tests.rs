use pretty_assertions::assert_eq;

use super::*;

fn sp(start: u32) -> Span {
    Span::new(start, start + 1)
}

#[test]
fn alloc_assigns_sequential_ids() {
    let mut arena = PatternArena::new();
    let a = arena.wildcard(sp(0));
    let b = arena.literal(Literal::Int(1), sp(2));
    assert_eq!(a, PatId::new(0));
    assert_eq!(b, PatId::new(1));
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.span(b), sp(2));
}

#[test]
fn catch_all_sees_through_at() {
    let mut arena = PatternArena::new();
    let wild = arena.wildcard(sp(0));
    let named = arena.at(Name::from_raw(7), wild, sp(0));
    let lit = arena.literal(Literal::Int(1), sp(1));
    let bound = arena.binding(Name::from_raw(3), sp(2));
    assert!(arena.is_catch_all(named));
    assert!(arena.is_catch_all(bound));
    assert!(!arena.is_catch_all(lit));
}

#[test]
fn top_alternatives_flatten_nested_or() {
    let mut arena = PatternArena::new();
    let a = arena.literal(Literal::Int(1), sp(0));
    let b = arena.literal(Literal::Int(2), sp(1));
    let c = arena.literal(Literal::Int(3), sp(2));
    let inner = arena.or(vec![b, c], sp(1));
    let named = arena.at(Name::from_raw(1), inner, sp(1));
    let top = arena.or(vec![a, named], sp(0));
    assert_eq!(arena.top_alternatives(top), vec![a, b, c]);
    assert_eq!(arena.top_alternatives(a), vec![a]);
}

#[test]
fn children_in_source_order() {
    let mut arena = PatternArena::new();
    let a = arena.wildcard(sp(0));
    let b = arena.wildcard(sp(1));
    let list = arena.extractor(unio_types::AdtId::from_raw(0), vec![a, b], sp(0));
    let typed = arena.typed(list, Idx::ANY, sp(0));
    assert_eq!(arena.children(list), &[a, b]);
    assert_eq!(arena.children(typed), &[list]);
    assert!(arena.children(a).is_empty());
}

#[test]
fn guarded_cases() {
    let case = Case::new(PatId::new(0), sp(0));
    assert!(!case.is_guarded());
    assert!(case.with_guard(sp(4)).is_guarded());
}
