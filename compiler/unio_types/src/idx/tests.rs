use super::*;

#[test]
fn primitives_are_distinct_and_named() {
    let all = [
        Idx::NEVER,
        Idx::ANY,
        Idx::NO_TYPE,
        Idx::INT,
        Idx::FLOAT,
        Idx::BOOL,
        Idx::STR,
        Idx::CHAR,
        Idx::UNIT,
    ];
    for (i, idx) in all.iter().enumerate() {
        assert_eq!(idx.raw() as usize, i);
        assert!(idx.is_primitive());
        assert!(idx.name().is_some());
    }
}

#[test]
fn dynamic_indices_have_no_name() {
    let idx = Idx::from_raw(Idx::PRIMITIVE_COUNT + 3);
    assert!(!idx.is_primitive());
    assert_eq!(idx.name(), None);
    assert_eq!(format!("{idx:?}"), "Idx(12)");
}

#[test]
fn placeholder_predicates() {
    assert!(Idx::NO_TYPE.is_no_type());
    assert!(!Idx::ANY.is_no_type());
    assert!(Idx::NEVER.is_never());
    assert_eq!(format!("{:?}", Idx::NO_TYPE), "Idx(<notype>)");
}
