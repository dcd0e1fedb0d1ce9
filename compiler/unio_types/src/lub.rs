//! Least upper bounds.

use smallvec::SmallVec;
use tracing::trace;

use crate::{Idx, Pool, TypeData, Variance};

impl Pool {
    /// Widen a literal type to its primitive; other types are unchanged.
    pub fn widen(&self, ty: Idx) -> Idx {
        match self.data(ty) {
            TypeData::Literal(lit) => lit.base_type(),
            _ => ty,
        }
    }

    /// Least upper bound of two types.
    ///
    /// `NO_TYPE` absorbs everything, also inside arguments. Applications of
    /// one data type join argument-wise. Distinct literals widen to their
    /// primitive, and otherwise the nearest shared ancestor wins. Unrelated
    /// types meet at `any`.
    pub fn lub(&self, a: Idx, b: Idx) -> Idx {
        if a == b {
            return a;
        }
        if a.is_no_type() || b.is_no_type() {
            return Idx::NO_TYPE;
        }
        if let Some(joined) = self.join_arguments(a, b) {
            return joined;
        }
        if self.is_subtype(a, b) {
            return b;
        }
        if self.is_subtype(b, a) {
            return a;
        }
        let (wa, wb) = (self.widen(a), self.widen(b));
        if wa != a || wb != b {
            return self.lub(wa, wb);
        }
        let result = unio_stack::ensure_sufficient_stack(|| self.lub_via_ancestors(a, b));
        trace!(?a, ?b, ?result, "lub");
        result
    }

    /// Join two applications of the same data type position by position.
    /// Fails when a non-covariant position differs.
    fn join_arguments(&self, a: Idx, b: Idx) -> Option<Idx> {
        let (a_adt, a_args) = self.as_adt(a)?;
        let (b_adt, b_args) = self.as_adt(b)?;
        if a_adt != b_adt {
            return None;
        }
        let params = &self.adt(a_adt).params;
        let joined: SmallVec<[Idx; 4]> = unio_stack::ensure_sufficient_stack(|| {
            params
                .iter()
                .zip(a_args.iter().zip(&b_args))
                .map(|(param, (&x, &y))| match param.variance {
                    Variance::Covariant => Some(self.lub(x, y)),
                    Variance::Contravariant | Variance::Invariant => (x == y).then_some(x),
                })
                .collect::<Option<_>>()
        })?;
        Some(self.apply(a_adt, &joined))
    }

    fn lub_via_ancestors(&self, a: Idx, b: Idx) -> Idx {
        if self.as_adt(b).is_none() {
            return Idx::ANY;
        }
        for ancestor in self.ancestors(a) {
            let Some(ancestor_adt) = self.constructor(ancestor) else {
                continue;
            };
            if let Some(b_up) = self.upcast(b, ancestor_adt) {
                return self.lub(ancestor, b_up);
            }
        }
        Idx::ANY
    }
}

#[cfg(test)]
mod tests;
