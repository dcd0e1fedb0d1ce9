use pretty_assertions::assert_eq;
use unio_types::Pool;

use super::*;

struct Fixture {
    pool: Pool,
    foo: Idx,
    bar: Idx,
    baz: Idx,
}

fn fixture() -> Fixture {
    let mut pool = Pool::new();
    let foo = pool.declare_module("Foo");
    let bar = pool.declare_module("Bar");
    let baz = pool.declare_module("Baz");
    let foo = pool.apply(foo, &[]);
    let bar = pool.apply(bar, &[]);
    let baz = pool.apply(baz, &[]);
    Fixture { pool, foo, bar, baz }
}

#[test]
fn expand_is_associative() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let left = f.pool.union(f.pool.union(f.foo, f.bar), f.baz);
    let right = f.pool.union(f.foo, f.pool.union(f.bar, f.baz));
    assert_eq!(algebra.expand(left).members(), &[f.foo, f.bar, f.baz]);
    assert_eq!(algebra.expand(left), algebra.expand(right));
}

#[test]
fn expand_drops_later_duplicates() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let ty = f.pool.union(f.pool.union(f.bar, f.foo), f.pool.union(f.bar, f.baz));
    assert_eq!(algebra.expand(ty).members(), &[f.bar, f.foo, f.baz]);
}

#[test]
fn expand_is_idempotent() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let ty = f.pool.union_of(&[f.foo, f.bar, f.baz]);
    let once = algebra.expand(ty);
    let again = algebra.expand(f.pool.union_of(once.members()));
    assert_eq!(once, again);
}

#[test]
fn non_union_expands_to_itself() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    assert_eq!(algebra.expand(f.foo).members(), &[f.foo]);
}

#[test]
fn expansions_are_cached() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let ty = f.pool.union(f.foo, f.bar);
    algebra.expand(ty);
    algebra.expand(ty);
    let cache = algebra.into_cache();
    assert_eq!(cache.len(), 1);
}

#[test]
fn members_are_part_of_their_union() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let ab = f.pool.union(f.foo, f.bar);
    assert_eq!(algebra.is_part_of_type(f.foo, ab), Ok(()));
    assert_eq!(algebra.is_part_of_type(f.bar, ab), Ok(()));
}

#[test]
fn unrelated_type_is_named_with_target() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let ab = f.pool.union(f.foo, f.bar);
    let err = algebra.is_part_of_type(f.baz, ab).unwrap_err();
    assert_eq!(err.missing, vec![f.baz]);
    assert_eq!(err.message(&f.pool), "Baz is not in {Foo | Bar}.");
}

#[test]
fn union_candidate_lists_every_unmatched_member() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let candidate = f.pool.union_of(&[Idx::INT, f.foo, Idx::STR]);
    let target = f.pool.union(f.foo, f.bar);
    let err = algebra.is_part_of_type(candidate, target).unwrap_err();
    assert_eq!(
        err.message(&f.pool),
        "int is not in {Foo | Bar}.\nstr is not in {Foo | Bar}."
    );
}

#[test]
fn subtypes_are_accepted() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let target = f.pool.union(Idx::INT, f.pool.option(Idx::STR));
    assert!(algebra.is_part_of_type(f.pool.int_lit(42), target).is_ok());
    assert!(algebra.is_part_of_type(f.pool.none(), target).is_ok());
    assert!(algebra.is_part_of_type(f.pool.some(Idx::STR), target).is_ok());
    assert!(algebra.is_part_of_type(f.pool.some(Idx::INT), target).is_err());
}

#[test]
fn never_and_placeholder_edges() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let ab = f.pool.union(f.foo, f.bar);
    assert!(algebra.is_part_of_type(Idx::NEVER, ab).is_ok());

    let open = f.pool.union(f.foo, Idx::NO_TYPE);
    assert!(algebra.is_part_of_type(Idx::STR, open).is_ok());
}

#[test]
fn superset_queries() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let abc = f.pool.union_of(&[f.foo, f.bar, f.baz]);
    let ba = f.pool.union(f.bar, f.foo);
    assert!(algebra.contains_all_of(abc, ba));
    assert!(!algebra.contains_all_of(ba, abc));

    let err = algebra.check_contains_all_of(ba, abc).unwrap_err();
    assert_eq!(err.missing, vec![f.baz]);
}

#[test]
fn intersection_queries() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let ab = f.pool.union(f.foo, f.bar);
    let bc = f.pool.union(f.bar, f.baz);
    let c = f.baz;
    assert!(algebra.contains_some_of(ab, bc));
    assert!(!algebra.contains_some_of(ab, c));
}

#[test]
fn mismatch_diagnostic_carries_code_and_span() {
    let f = fixture();
    let mut algebra = UnionAlgebra::new(&f.pool);
    let err = algebra
        .is_part_of_type(f.baz, f.pool.union(f.foo, f.bar))
        .unwrap_err();
    let diag = err.to_diagnostic(&f.pool, unio_diagnostic::ErrorCode::E3002, unio_ir::Span::new(3, 9));
    assert_eq!(diag.code, unio_diagnostic::ErrorCode::E3002);
    assert_eq!(diag.message, "Baz is not in {Foo | Bar}.");
    assert_eq!(diag.primary_span(), Some(unio_ir::Span::new(3, 9)));
}
