use super::*;

#[test]
fn top_bottom_and_placeholder() {
    let pool = Pool::new();
    let opt = pool.option(Idx::INT);
    assert!(pool.is_subtype(Idx::NEVER, opt));
    assert!(pool.is_subtype(opt, Idx::ANY));
    assert!(!pool.is_subtype(Idx::ANY, opt));
    assert!(pool.is_subtype(Idx::NO_TYPE, opt));
    assert!(pool.is_subtype(opt, Idx::NO_TYPE));
}

#[test]
fn literals_conform_to_their_primitive() {
    let pool = Pool::new();
    let one = pool.int_lit(1);
    assert!(pool.is_subtype(one, Idx::INT));
    assert!(!pool.is_subtype(Idx::INT, one));
    assert!(!pool.is_subtype(one, pool.int_lit(2)));
    assert!(!pool.is_subtype(one, Idx::STR));
    assert!(pool.is_subtype(pool.bool_lit(true), Idx::BOOL));
}

#[test]
fn unions_on_either_side() {
    let pool = Pool::new();
    let int_or_str = pool.union(Idx::INT, Idx::STR);
    assert!(pool.is_subtype(Idx::INT, int_or_str));
    assert!(pool.is_subtype(pool.str_lit("s"), int_or_str));
    assert!(!pool.is_subtype(Idx::BOOL, int_or_str));
    assert!(pool.is_subtype(int_or_str, pool.union_of(&[Idx::BOOL, Idx::STR, Idx::INT])));
    assert!(!pool.is_subtype(int_or_str, Idx::INT));
}

#[test]
fn children_upcast_through_parents() {
    let pool = Pool::new();
    let prelude = *pool.prelude();
    assert_eq!(pool.upcast(pool.some(Idx::INT), prelude.option), Some(pool.option(Idx::INT)));
    assert_eq!(pool.upcast(pool.none(), prelude.option), Some(pool.option(Idx::NEVER)));
    assert_eq!(pool.upcast(pool.some(Idx::INT), prelude.either), None);

    assert!(pool.is_subtype(pool.some(Idx::INT), pool.option(Idx::INT)));
    assert!(pool.is_subtype(pool.some(pool.int_lit(1)), pool.option(Idx::INT)));
    assert!(pool.is_subtype(pool.none(), pool.option(Idx::STR)));
    assert!(!pool.is_subtype(pool.option(Idx::INT), pool.some(Idx::INT)));
    assert!(!pool.is_subtype(pool.some(Idx::STR), pool.option(Idx::INT)));
}

#[test]
fn placeholder_arguments_conform() {
    let pool = Pool::new();
    assert!(pool.is_subtype(pool.some(Idx::NO_TYPE), pool.option(Idx::STR)));
    assert!(pool.is_subtype(
        pool.tuple2(Idx::INT, Idx::NO_TYPE),
        pool.tuple2(Idx::INT, Idx::BOOL)
    ));
    assert!(!pool.is_subtype(
        pool.tuple2(Idx::STR, Idx::NO_TYPE),
        pool.tuple2(Idx::INT, Idx::BOOL)
    ));
}

#[test]
fn variance_is_respected() {
    let mut pool = Pool::new();
    let sink = pool.declare_product("Sink", &[("T", Variance::Contravariant)]);
    let cell = pool.declare_product("Cell", &[("T", Variance::Invariant)]);

    let sink_int = pool.apply(sink, &[Idx::INT]);
    let sink_lit = pool.apply(sink, &[pool.int_lit(1)]);
    assert!(pool.is_subtype(sink_int, sink_lit));
    assert!(!pool.is_subtype(sink_lit, sink_int));

    let cell_int = pool.apply(cell, &[Idx::INT]);
    let cell_lit = pool.apply(cell, &[pool.int_lit(1)]);
    assert!(!pool.is_subtype(cell_int, cell_lit));
    assert!(!pool.is_subtype(cell_lit, cell_int));
}

#[test]
fn descendants() {
    let pool = Pool::new();
    let prelude = *pool.prelude();
    assert!(pool.is_descendant(prelude.some, prelude.option));
    assert!(pool.is_descendant(prelude.option, prelude.option));
    assert!(!pool.is_descendant(prelude.option, prelude.some));
    assert!(!pool.is_descendant(prelude.left, prelude.option));
}

#[test]
fn ancestors_nearest_first() {
    let mut pool = Pool::new();
    let animal = pool.declare_abstract("Animal", &[], true);
    let pet = pool.declare_abstract("Pet", &[], true);
    let dog = pool.declare_module("Dog");
    let animal_ty = pool.apply(animal, &[]);
    let pet_ty = pool.apply(pet, &[]);
    pool.extend(pet, animal_ty);
    pool.extend(dog, pet_ty);

    let dog_ty = pool.apply(dog, &[]);
    assert_eq!(pool.ancestors(dog_ty), vec![pet_ty, animal_ty]);
    assert!(pool.is_subtype(dog_ty, animal_ty));
}
