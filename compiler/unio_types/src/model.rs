//! The query interface the analysis runs against.
//!
//! Union membership and exhaustiveness only need a handful of questions
//! answered about types. [`TypeModel`] collects them so the analysis can run
//! over any host representation that hands out [`Idx`] handles; [`Pool`] is
//! the in-tree implementation.

use smallvec::SmallVec;
use unio_ir::Name;

use crate::{AdtDef, AdtId, Field, Idx, Literal, Pool, Tag};

pub trait TypeModel {
    // === Host judgements ===

    fn is_subtype(&self, sub: Idx, sup: Idx) -> bool;

    fn same_type(&self, a: Idx, b: Idx) -> bool;

    /// Least upper bound; `NO_TYPE` absorbs.
    fn lub(&self, a: Idx, b: Idx) -> Idx;

    /// Direct subtypes of a closed type, empty for open ones.
    fn known_direct_subtypes(&self, ty: Idx) -> Vec<Idx>;

    /// Whether the values of `ty` have a finite set of shapes.
    fn is_closed(&self, ty: Idx) -> bool;

    // === Introspection ===

    fn tag(&self, ty: Idx) -> Tag;

    fn as_union(&self, ty: Idx) -> Option<(Idx, Idx)>;

    fn as_literal(&self, ty: Idx) -> Option<Literal>;

    fn constructor(&self, ty: Idx) -> Option<AdtId>;

    /// Owner and position of a type parameter.
    fn as_param(&self, ty: Idx) -> Option<(AdtId, u32)>;

    fn type_args(&self, ty: Idx) -> SmallVec<[Idx; 4]>;

    /// Fields of an applied product type, instantiated.
    fn fields(&self, ty: Idx) -> Vec<Field>;

    fn adt(&self, id: AdtId) -> &AdtDef;

    /// View `ty` as an instance of the ancestor data type `target`.
    fn upcast(&self, ty: Idx, target: AdtId) -> Option<Idx>;

    fn is_descendant(&self, adt: AdtId, ancestor: AdtId) -> bool;

    /// Instantiate a child data type so it conforms to `target`.
    fn instantiate_child(&self, child: AdtId, target: Idx) -> Option<Idx>;

    // === Construction ===

    fn apply(&self, adt: AdtId, args: &[Idx]) -> Idx;

    fn literal(&self, lit: Literal) -> Idx;

    /// Widen a literal type to its primitive.
    fn widen(&self, ty: Idx) -> Idx;

    // === Rendering ===

    fn format_type(&self, ty: Idx) -> String;

    fn format_literal(&self, lit: Literal) -> String;

    fn lookup(&self, name: Name) -> &str;
}

impl TypeModel for Pool {
    fn is_subtype(&self, sub: Idx, sup: Idx) -> bool {
        Pool::is_subtype(self, sub, sup)
    }

    fn same_type(&self, a: Idx, b: Idx) -> bool {
        Pool::same_type(self, a, b)
    }

    fn lub(&self, a: Idx, b: Idx) -> Idx {
        Pool::lub(self, a, b)
    }

    fn known_direct_subtypes(&self, ty: Idx) -> Vec<Idx> {
        Pool::known_direct_subtypes(self, ty)
    }

    fn is_closed(&self, ty: Idx) -> bool {
        Pool::is_closed(self, ty)
    }

    fn tag(&self, ty: Idx) -> Tag {
        Pool::tag(self, ty)
    }

    fn as_union(&self, ty: Idx) -> Option<(Idx, Idx)> {
        Pool::as_union(self, ty)
    }

    fn as_literal(&self, ty: Idx) -> Option<Literal> {
        Pool::as_literal(self, ty)
    }

    fn constructor(&self, ty: Idx) -> Option<AdtId> {
        Pool::constructor(self, ty)
    }

    fn as_param(&self, ty: Idx) -> Option<(AdtId, u32)> {
        Pool::as_param(self, ty)
    }

    fn type_args(&self, ty: Idx) -> SmallVec<[Idx; 4]> {
        Pool::type_args(self, ty)
    }

    fn fields(&self, ty: Idx) -> Vec<Field> {
        Pool::fields(self, ty)
    }

    fn adt(&self, id: AdtId) -> &AdtDef {
        Pool::adt(self, id)
    }

    fn upcast(&self, ty: Idx, target: AdtId) -> Option<Idx> {
        Pool::upcast(self, ty, target)
    }

    fn is_descendant(&self, adt: AdtId, ancestor: AdtId) -> bool {
        Pool::is_descendant(self, adt, ancestor)
    }

    fn instantiate_child(&self, child: AdtId, target: Idx) -> Option<Idx> {
        Pool::instantiate_child(self, child, target)
    }

    fn apply(&self, adt: AdtId, args: &[Idx]) -> Idx {
        Pool::apply(self, adt, args)
    }

    fn literal(&self, lit: Literal) -> Idx {
        Pool::literal(self, lit)
    }

    fn widen(&self, ty: Idx) -> Idx {
        Pool::widen(self, ty)
    }

    fn format_type(&self, ty: Idx) -> String {
        Pool::format_type(self, ty)
    }

    fn format_literal(&self, lit: Literal) -> String {
        Pool::format_literal(self, lit)
    }

    fn lookup(&self, name: Name) -> &str {
        Pool::lookup(self, name)
    }
}
