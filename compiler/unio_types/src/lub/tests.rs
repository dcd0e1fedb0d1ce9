use pretty_assertions::assert_eq;

use super::*;

#[test]
fn related_types_pick_the_wider() {
    let pool = Pool::new();
    assert_eq!(pool.lub(Idx::INT, Idx::INT), Idx::INT);
    assert_eq!(pool.lub(pool.int_lit(1), Idx::INT), Idx::INT);
    assert_eq!(pool.lub(Idx::NEVER, Idx::STR), Idx::STR);
    assert_eq!(pool.lub(pool.some(Idx::INT), pool.option(Idx::INT)), pool.option(Idx::INT));
}

#[test]
fn placeholder_absorbs() {
    let pool = Pool::new();
    assert_eq!(pool.lub(Idx::NO_TYPE, Idx::INT), Idx::NO_TYPE);
    assert_eq!(pool.lub(pool.some(Idx::INT), Idx::NO_TYPE), Idx::NO_TYPE);
}

#[test]
fn distinct_literals_widen() {
    let pool = Pool::new();
    assert_eq!(pool.lub(pool.int_lit(1), pool.int_lit(2)), Idx::INT);
    assert_eq!(pool.lub(pool.int_lit(1), pool.str_lit("s")), Idx::ANY);
    assert_eq!(pool.lub(pool.bool_lit(true), pool.bool_lit(false)), Idx::BOOL);
}

#[test]
fn same_constructor_joins_arguments() {
    let pool = Pool::new();
    assert_eq!(
        pool.lub(pool.some(pool.int_lit(1)), pool.some(pool.int_lit(2))),
        pool.some(Idx::INT)
    );
    assert_eq!(
        pool.lub(pool.tuple2(Idx::INT, Idx::NO_TYPE), pool.tuple2(Idx::INT, Idx::STR)),
        pool.tuple2(Idx::INT, Idx::NO_TYPE)
    );
}

#[test]
fn siblings_meet_at_parent() {
    let pool = Pool::new();
    assert_eq!(pool.lub(pool.some(Idx::INT), pool.none()), pool.option(Idx::INT));

    let left = pool.apply(pool.prelude().left, &[Idx::INT]);
    let right = pool.apply(pool.prelude().right, &[Idx::STR]);
    assert_eq!(pool.lub(left, right), pool.either(Idx::INT, Idx::STR));
}

#[test]
fn unrelated_types_meet_at_any() {
    let pool = Pool::new();
    assert_eq!(pool.lub(pool.some(Idx::INT), pool.list(Idx::INT)), Idx::ANY);
    let ones_and_twos = pool.lub(pool.int_lit(1), pool.int_lit(2));
    assert_eq!(pool.lub(ones_and_twos, pool.int_lit(3)), Idx::INT);
}
