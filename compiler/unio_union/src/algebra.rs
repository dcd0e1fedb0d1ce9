//! Membership, subset and intersection queries over flattened unions.

use rustc_hash::FxHashMap;
use tracing::trace;
use unio_types::{Idx, TypeModel};

use crate::{Union, UnionMismatch};

/// Memoized union expansions, keyed by type identity.
///
/// Holds only recomputable facts, so it can be dropped at any time. One cache
/// lives for one analysis call.
#[derive(Default, Debug)]
pub struct UnionCache {
    expanded: FxHashMap<Idx, Union>,
}

impl UnionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

/// Union queries over a host type model.
pub struct UnionAlgebra<'m, M: TypeModel + ?Sized> {
    model: &'m M,
    cache: UnionCache,
}

impl<'m, M: TypeModel + ?Sized> UnionAlgebra<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self::with_cache(model, UnionCache::new())
    }

    /// Reuse a cache from an earlier algebra over the same model.
    pub fn with_cache(model: &'m M, cache: UnionCache) -> Self {
        UnionAlgebra { model, cache }
    }

    pub fn into_cache(self) -> UnionCache {
        self.cache
    }

    pub fn model(&self) -> &'m M {
        self.model
    }

    /// Flatten `ty` into its union members, depth-first and left to right,
    /// dropping later duplicates. A non-union type expands to itself.
    pub fn expand(&mut self, ty: Idx) -> Union {
        if let Some(hit) = self.cache.expanded.get(&ty) {
            return hit.clone();
        }
        let mut union = Union::new();
        let mut stack = vec![ty];
        while let Some(current) = stack.pop() {
            match self.model.as_union(current) {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => {
                    union.push_unique(current);
                }
            }
        }
        trace!(?ty, members = union.len(), "expanded union");
        self.cache.expanded.insert(ty, union.clone());
        union
    }

    /// Whether a single non-union type fits some member of `union`.
    ///
    /// `never` fits every union, and a union containing `NO_TYPE` accepts
    /// anything.
    pub fn member_fits(&self, ty: Idx, union: &Union) -> bool {
        ty.is_never()
            || union.iter().any(|member| {
                member.is_no_type()
                    || self.model.same_type(ty, member)
                    || self.model.is_subtype(ty, member)
            })
    }

    /// Succeeds when `ty`, or every member of `ty` if it is a union, fits
    /// some member of `union`. The error lists every member that does not.
    pub fn is_part_of(&mut self, ty: Idx, union: &Union) -> Result<(), UnionMismatch> {
        let candidates = self.expand(ty);
        let missing: Vec<Idx> = candidates
            .iter()
            .filter(|&candidate| !self.member_fits(candidate, union))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(UnionMismatch {
                missing,
                target: union.clone(),
            })
        }
    }

    /// [`is_part_of`](Self::is_part_of) against a union given as a type.
    pub fn is_part_of_type(&mut self, ty: Idx, union: Idx) -> Result<(), UnionMismatch> {
        let target = self.expand(union);
        self.is_part_of(ty, &target)
    }

    /// Some member of `expand(u1)` is part of `u2`.
    pub fn contains_some_of(&mut self, u1: Idx, u2: Idx) -> bool {
        let left = self.expand(u1);
        let right = self.expand(u2);
        left.members()
            .iter()
            .any(|&member| self.member_fits(member, &right))
    }

    /// Every member of `expand(u2)` is part of `u1`; `u1` is a superset.
    pub fn contains_all_of(&mut self, u1: Idx, u2: Idx) -> bool {
        self.check_contains_all_of(u1, u2).is_ok()
    }

    /// Like [`contains_all_of`](Self::contains_all_of), reporting the
    /// members of `u2` that `u1` lacks.
    pub fn check_contains_all_of(&mut self, u1: Idx, u2: Idx) -> Result<(), UnionMismatch> {
        let superset = self.expand(u1);
        self.is_part_of(u2, &superset)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
