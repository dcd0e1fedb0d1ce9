//! Subtype checking and upcasting along declared parents.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::{AdtId, Idx, Pool, TypeData, Variance};

impl Pool {
    /// `sub <: sup`.
    ///
    /// `NO_TYPE` on either side always conforms: it stands for a position a
    /// pattern left unconstrained.
    pub fn is_subtype(&self, sub: Idx, sup: Idx) -> bool {
        if sub == sup || sub.is_no_type() || sup.is_no_type() || sub.is_never() || sup == Idx::ANY {
            return true;
        }
        if sub == Idx::ANY {
            return false;
        }
        unio_stack::ensure_sufficient_stack(|| match (self.data(sub), self.data(sup)) {
            (TypeData::Union(a, b), _) => self.is_subtype(a, sup) && self.is_subtype(b, sup),
            (_, TypeData::Union(a, b)) => self.is_subtype(sub, a) || self.is_subtype(sub, b),
            (TypeData::Literal(lit), _) => self.is_subtype(lit.base_type(), sup),
            (TypeData::Adt { .. }, TypeData::Adt { adt: target, args }) => {
                match self.upcast(sub, target) {
                    Some(up) => self.args_conform(target, &self.type_args(up), &args),
                    None => false,
                }
            }
            _ => false,
        })
    }

    fn args_conform(&self, adt: AdtId, sub_args: &[Idx], sup_args: &[Idx]) -> bool {
        let params = &self.adt(adt).params;
        params
            .iter()
            .zip(sub_args.iter().zip(sup_args))
            .all(|(param, (&a, &b))| match param.variance {
                Variance::Covariant => self.is_subtype(a, b),
                Variance::Contravariant => self.is_subtype(b, a),
                Variance::Invariant => self.is_subtype(a, b) && self.is_subtype(b, a),
            })
    }

    /// View `ty` as an instance of the ancestor data type `target`,
    /// substituting arguments along the way. `Some[int]` upcast to `Option`
    /// is `Option[int]`.
    pub fn upcast(&self, ty: Idx, target: AdtId) -> Option<Idx> {
        let mut stack = vec![ty];
        let mut seen = FxHashSet::default();
        while let Some(current) = stack.pop() {
            let Some((adt, args)) = self.as_adt(current) else {
                continue;
            };
            if adt == target {
                return Some(current);
            }
            if !seen.insert(adt) {
                continue;
            }
            for &parent in self.adt(adt).parents.iter().rev() {
                stack.push(self.substitute(parent, adt, &args));
            }
        }
        None
    }

    /// Proper ancestors of `ty`, nearest first, one per data type.
    pub fn ancestors(&self, ty: Idx) -> Vec<Idx> {
        let mut out = Vec::new();
        let mut queue = std::collections::VecDeque::from([ty]);
        let mut seen = FxHashSet::default();
        while let Some(current) = queue.pop_front() {
            let Some((adt, args)) = self.as_adt(current) else {
                continue;
            };
            if !seen.insert(adt) {
                continue;
            }
            if current != ty {
                out.push(current);
            }
            for &parent in &self.adt(adt).parents {
                queue.push_back(self.substitute(parent, adt, &args));
            }
        }
        out
    }

    /// Whether `adt` is `ancestor` or inherits from it.
    pub fn is_descendant(&self, adt: AdtId, ancestor: AdtId) -> bool {
        let mut stack: SmallVec<[AdtId; 8]> = SmallVec::from_elem(adt, 1);
        let mut seen = FxHashSet::default();
        while let Some(current) = stack.pop() {
            if current == ancestor {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            stack.extend(
                self.adt(current)
                    .parents
                    .iter()
                    .filter_map(|&parent| self.constructor(parent)),
            );
        }
        false
    }

    /// Whether two types denote the same type.
    #[inline]
    pub fn same_type(&self, a: Idx, b: Idx) -> bool {
        a == b
    }
}

#[cfg(test)]
mod tests;
