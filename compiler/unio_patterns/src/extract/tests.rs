use pretty_assertions::assert_eq;
use unio_ir::{Name, Span};
use unio_types::{Literal, Pool, Variance};

use super::*;

fn sp(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

fn extract(pool: &Pool, arena: &PatternArena, pat: PatId) -> Vec<PatternType> {
    PatternTypeExtractor::new(pool, arena).extract(pat).unwrap()
}

#[test]
fn wildcard_and_binding_are_catch_all() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let wild = arena.wildcard(sp(0, 1));
    let bound = arena.binding(Name::from_raw(1), sp(0, 1));
    assert_eq!(extract(&pool, &arena, wild), vec![PatternType::catch_all()]);
    assert_eq!(extract(&pool, &arena, bound), vec![PatternType::catch_all()]);
    assert!(extract(&pool, &arena, wild)[0].is_catch_all());
}

#[test]
fn literal_is_its_own_witness() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let lit = arena.literal(Literal::Int(42), sp(0, 2));
    let forty_two = pool.int_lit(42);
    assert_eq!(
        extract(&pool, &arena, lit),
        vec![PatternType::new(forty_two, vec![forty_two])]
    );
}

#[test]
fn top_level_alternation_yields_one_per_branch() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let a = arena.literal(Literal::Int(42), sp(0, 2));
    let b = arena.literal(Literal::Str(pool.name("s")), sp(5, 8));
    let or = arena.or(vec![a, b], sp(0, 8));

    let result = extract(&pool, &arena, or);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].pt, pool.int_lit(42));
    assert_eq!(result[1].pt, pool.str_lit("s"));

    let mut extractor = PatternTypeExtractor::new(&pool, &arena);
    let pairs = extractor.extract_alternatives(or).unwrap();
    assert_eq!(pairs.iter().map(|(p, _)| *p).collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn ascription_has_no_witnesses() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let wild = arena.wildcard(sp(0, 1));
    let named = arena.at(Name::from_raw(2), wild, sp(0, 1));
    let typed = arena.typed(named, pool.option(Idx::INT), sp(0, 15));

    let result = extract(&pool, &arena, typed);
    assert_eq!(result, vec![PatternType::ascription(pool.option(Idx::INT))]);
    assert!(result[0].is_ascription_only());
    assert!(!result[0].is_catch_all());
}

#[test]
fn at_binding_adds_nothing() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let one = arena.literal(Literal::Int(1), sp(7, 8));
    let some = arena.variant(pool.prelude().some, vec![one], sp(2, 9));
    let named = arena.at(Name::from_raw(3), some, sp(0, 9));

    assert_eq!(extract(&pool, &arena, named), extract(&pool, &arena, some));
}

#[test]
fn product_fields_align_onto_parameters() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let s = arena.literal(Literal::Str(pool.name("s")), sp(7, 10));
    let one = arena.literal(Literal::Int(1), sp(12, 13));
    let pair = arena.variant(pool.prelude().tuple2, vec![s, one], sp(0, 14));

    let result = extract(&pool, &arena, pair);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].pt, pool.tuple2(Idx::STR, Idx::INT));
    assert_eq!(result[0].expr, vec![pool.tuple2(pool.str_lit("s"), pool.int_lit(1))]);
}

#[test]
fn wildcard_fields_leave_parameters_open() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let wild = arena.wildcard(sp(7, 8));
    let one = arena.literal(Literal::Int(1), sp(10, 11));
    let pair = arena.variant(pool.prelude().tuple2, vec![wild, one], sp(0, 12));

    let result = extract(&pool, &arena, pair);
    assert_eq!(result[0].pt, pool.tuple2(Idx::NO_TYPE, Idx::INT));
    assert_eq!(result[0].expr, vec![pool.tuple2(Idx::NO_TYPE, pool.int_lit(1))]);
}

#[test]
fn nested_field_occurrences_are_projected() {
    let mut pool = Pool::new();
    let boxed = pool.declare_product("Box", &[("A", Variance::Covariant)]);
    let a = pool.param(boxed, 0);
    let items = pool.list(a);
    pool.define_fields(boxed, &[("items", items)]);

    let mut arena = PatternArena::new();
    let one = arena.literal(Literal::Int(1), sp(9, 10));
    let two = arena.literal(Literal::Int(2), sp(12, 13));
    let list = arena.extractor(pool.prelude().list, vec![one, two], sp(4, 14));
    let pat = arena.variant(boxed, vec![list], sp(0, 15));

    let result = extract(&pool, &arena, pat);
    assert_eq!(result[0].pt, pool.apply(boxed, &[Idx::INT]));
}

#[test]
fn nested_alternation_is_joined() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let one = arena.literal(Literal::Int(1), sp(5, 6));
    let two = arena.literal(Literal::Int(2), sp(9, 10));
    let or = arena.or(vec![one, two], sp(5, 10));
    let some = arena.variant(pool.prelude().some, vec![or], sp(0, 11));

    let result = extract(&pool, &arena, some);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].pt, pool.some(Idx::INT));
    assert_eq!(
        result[0].expr,
        vec![pool.some(pool.int_lit(1)), pool.some(pool.int_lit(2))]
    );
}

#[test]
fn sequence_extractor_joins_elements() {
    let pool = Pool::new();
    let list = pool.prelude().list;
    let mut arena = PatternArena::new();
    let one = arena.literal(Literal::Int(1), sp(5, 6));
    let two = arena.literal(Literal::Int(2), sp(8, 9));
    let pat = arena.extractor(list, vec![one, two], sp(0, 10));
    let result = extract(&pool, &arena, pat);
    assert_eq!(result[0].pt, pool.list(Idx::INT));
    assert_eq!(result[0].expr, vec![pool.list(Idx::INT)]);

    let empty = arena.extractor(list, vec![], sp(0, 6));
    assert_eq!(extract(&pool, &arena, empty)[0].pt, pool.list(Idx::NEVER));

    let head = arena.literal(Literal::Int(1), sp(5, 6));
    let rest = arena.seq_rest(sp(8, 10));
    let open = arena.extractor(list, vec![head, rest], sp(0, 11));
    assert_eq!(extract(&pool, &arena, open)[0].pt, pool.list(Idx::NO_TYPE));
}

#[test]
fn module_pattern_is_its_own_witness() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let none = arena.variant(pool.prelude().none, vec![], sp(0, 4));
    assert_eq!(
        extract(&pool, &arena, none),
        vec![PatternType::new(pool.none(), vec![pool.none()])]
    );
}

#[test]
fn typed_deconstruction_reprojects_onto_ascription() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let wild = arena.wildcard(sp(5, 6));
    let some = arena.variant(pool.prelude().some, vec![wild], sp(0, 7));
    let typed = arena.typed(some, pool.option(Idx::INT), sp(0, 20));

    let result = extract(&pool, &arena, typed);
    assert_eq!(result[0].pt, pool.some(Idx::INT));
    assert_eq!(
        result[0].expr,
        vec![pool.option(Idx::INT), pool.some(Idx::NO_TYPE)]
    );
}

#[test]
fn ascribed_fields_keep_the_deconstruction_refutable() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let wild = arena.wildcard(sp(5, 6));
    let any_int = arena.typed(wild, Idx::INT, sp(5, 11));
    let some = arena.variant(pool.prelude().some, vec![any_int], sp(0, 12));

    let result = extract(&pool, &arena, some);
    assert_eq!(
        result,
        vec![PatternType::new(pool.some(Idx::INT), vec![pool.some(Idx::INT)])]
    );
    assert!(!result[0].is_ascription_only());

    let elem = arena.wildcard(sp(20, 21));
    let any_str = arena.typed(elem, Idx::STR, sp(20, 26));
    let list = arena.extractor(pool.prelude().list, vec![any_str], sp(15, 27));
    assert_eq!(
        extract(&pool, &arena, list),
        vec![PatternType::new(pool.list(Idx::STR), vec![pool.list(Idx::STR)])]
    );
}

#[test]
fn multi_parameter_extractor_is_rejected() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let a = arena.wildcard(sp(7, 8));
    let b = arena.wildcard(sp(10, 11));
    let pat = arena.extractor(pool.prelude().tuple2, vec![a, b], sp(0, 12));

    let err = PatternTypeExtractor::new(&pool, &arena)
        .extract(pat)
        .unwrap_err();
    assert_eq!(err.span(), sp(0, 12));
    assert_eq!(
        err.to_string(),
        "unsupported pattern: extractor `Tuple2` has 2 type parameters; only single-parameter extractors are supported"
    );
    assert_eq!(err.to_diagnostic().code, unio_diagnostic::ErrorCode::E3001);
}

#[test]
fn field_count_mismatch_is_rejected() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let a = arena.wildcard(sp(5, 6));
    let b = arena.wildcard(sp(8, 9));
    let pat = arena.variant(pool.prelude().some, vec![a, b], sp(0, 10));
    let err = PatternTypeExtractor::new(&pool, &arena)
        .extract(pat)
        .unwrap_err();
    assert!(err.to_string().contains("`Some` has 1 fields"));
}

#[test]
fn abstract_types_cannot_be_deconstructed() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let pat = arena.variant(pool.prelude().option, vec![], sp(0, 6));
    assert!(PatternTypeExtractor::new(&pool, &arena).extract(pat).is_err());
}

#[test]
fn misplaced_sequence_rest_is_rejected() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let rest = arena.seq_rest(sp(5, 7));
    let some = arena.variant(pool.prelude().some, vec![rest], sp(0, 8));
    let err = PatternTypeExtractor::new(&pool, &arena)
        .extract(some)
        .unwrap_err();
    assert_eq!(err.span(), sp(5, 7));

    let top = arena.seq_rest(sp(0, 2));
    assert!(PatternTypeExtractor::new(&pool, &arena).extract(top).is_err());

    let rest = arena.seq_rest(sp(5, 7));
    let one = arena.literal(Literal::Int(1), sp(9, 10));
    let list = arena.extractor(pool.prelude().list, vec![rest, one], sp(0, 11));
    assert!(PatternTypeExtractor::new(&pool, &arena).extract(list).is_err());
}

#[test]
fn witness_cap_collapses_to_constructor_type() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let lits: Vec<PatId> = (0..3)
        .map(|i| arena.literal(Literal::Int(i), sp(0, 1)))
        .collect();
    let left = arena.or(lits.clone(), sp(0, 1));
    let right = arena.or(lits, sp(0, 1));
    let pair = arena.variant(pool.prelude().tuple2, vec![left, right], sp(0, 10));

    let full = extract(&pool, &arena, pair);
    assert_eq!(full[0].expr.len(), 9);

    let capped = PatternTypeExtractor::new(&pool, &arena)
        .with_max_witnesses(4)
        .extract(pair)
        .unwrap();
    assert_eq!(capped[0].expr, vec![pool.tuple2(Idx::INT, Idx::INT)]);
}

#[test]
fn deeply_nested_patterns_do_not_recurse() {
    let pool = Pool::new();
    let some = pool.prelude().some;
    let mut arena = PatternArena::new();
    let mut pat = arena.wildcard(sp(0, 1));
    for _ in 0..5_000 {
        pat = arena.variant(some, vec![pat], sp(0, 1));
    }
    let result = extract(&pool, &arena, pat);
    assert_eq!(result.len(), 1);
    assert_eq!(pool.constructor(result[0].pt), Some(some));
}

#[test]
fn field_alignments_are_cached_per_product() {
    let pool = Pool::new();
    let mut arena = PatternArena::new();
    let a = arena.wildcard(sp(0, 1));
    let b = arena.wildcard(sp(0, 1));
    let first = arena.variant(pool.prelude().some, vec![a], sp(0, 1));
    let second = arena.variant(pool.prelude().some, vec![b], sp(0, 1));

    let mut extractor = PatternTypeExtractor::new(&pool, &arena);
    extractor.extract(first).unwrap();
    extractor.extract(second).unwrap();
    assert_eq!(extractor.into_cache().len(), 1);
}
