//! Built-in data types every pool starts with.

use crate::{AdtId, Idx, Pool, Variance};

/// Handles to the prelude data types.
///
/// ```text
/// sealed Option[+A]        Some[+A](value: A) extends Option[A]
///                          None                extends Option[never]
/// sealed Either[+L, +R]    Left[+L](value: L)  extends Either[L, never]
///                          Right[+R](value: R) extends Either[never, R]
/// Tuple2[+A, +B](_1: A, _2: B)
/// List[+A]                 sequence
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Prelude {
    pub option: AdtId,
    pub some: AdtId,
    pub none: AdtId,
    pub either: AdtId,
    pub left: AdtId,
    pub right: AdtId,
    pub tuple2: AdtId,
    pub list: AdtId,
}

impl Prelude {
    pub(crate) const PLACEHOLDER: Prelude = Prelude {
        option: AdtId::from_raw(0),
        some: AdtId::from_raw(0),
        none: AdtId::from_raw(0),
        either: AdtId::from_raw(0),
        left: AdtId::from_raw(0),
        right: AdtId::from_raw(0),
        tuple2: AdtId::from_raw(0),
        list: AdtId::from_raw(0),
    };

    pub(crate) fn register(pool: &mut Pool) -> Prelude {
        use Variance::Covariant;

        let option = pool.declare_abstract("Option", &[("A", Covariant)], true);
        let some = pool.declare_product("Some", &[("A", Covariant)]);
        let a = pool.param(some, 0);
        pool.define_fields(some, &[("value", a)]);
        let parent = pool.apply(option, &[a]);
        pool.extend(some, parent);
        let none = pool.declare_module("None");
        let parent = pool.apply(option, &[Idx::NEVER]);
        pool.extend(none, parent);

        let either = pool.declare_abstract("Either", &[("L", Covariant), ("R", Covariant)], true);
        let left = pool.declare_product("Left", &[("L", Covariant)]);
        let l = pool.param(left, 0);
        pool.define_fields(left, &[("value", l)]);
        let parent = pool.apply(either, &[l, Idx::NEVER]);
        pool.extend(left, parent);
        let right = pool.declare_product("Right", &[("R", Covariant)]);
        let r = pool.param(right, 0);
        pool.define_fields(right, &[("value", r)]);
        let parent = pool.apply(either, &[Idx::NEVER, r]);
        pool.extend(right, parent);

        let tuple2 = pool.declare_product("Tuple2", &[("A", Covariant), ("B", Covariant)]);
        let first = pool.param(tuple2, 0);
        let second = pool.param(tuple2, 1);
        pool.define_fields(tuple2, &[("_1", first), ("_2", second)]);

        let list = pool.declare_sequence("List", ("A", Covariant));

        Prelude {
            option,
            some,
            none,
            either,
            left,
            right,
            tuple2,
            list,
        }
    }
}

impl Pool {
    /// `Option[inner]`.
    pub fn option(&self, inner: Idx) -> Idx {
        self.apply(self.prelude().option, &[inner])
    }

    /// `Some[inner]`.
    pub fn some(&self, inner: Idx) -> Idx {
        self.apply(self.prelude().some, &[inner])
    }

    /// The `None` singleton.
    pub fn none(&self) -> Idx {
        self.apply(self.prelude().none, &[])
    }

    /// `Either[left, right]`.
    pub fn either(&self, left: Idx, right: Idx) -> Idx {
        self.apply(self.prelude().either, &[left, right])
    }

    /// `Tuple2[a, b]`.
    pub fn tuple2(&self, a: Idx, b: Idx) -> Idx {
        self.apply(self.prelude().tuple2, &[a, b])
    }

    /// `List[elem]`.
    pub fn list(&self, elem: Idx) -> Idx {
        self.apply(self.prelude().list, &[elem])
    }
}
