//! Declared data types.
//!
//! The hierarchy the analysis reasons about: sealed and open abstract types,
//! product types with named fields (case classes), singleton modules (case
//! objects) and sequences. Parents and field types are written in terms of
//! the declaring type's own parameters.

use unio_ir::Name;

use crate::Idx;

/// Handle to a declared data type in the [`Pool`](crate::Pool) registry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct AdtId(u32);

impl AdtId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Declaration-site variance of a type parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variance {
    Covariant,
    Contravariant,
    Invariant,
}

#[derive(Clone, Debug)]
pub struct TypeParam {
    pub name: Name,
    pub variance: Variance,
}

/// A declared field. `ty` may mention the owner's parameters.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct FieldDef {
    pub name: Name,
    pub ty: Idx,
}

/// A field of an applied product type, with parameters substituted.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Field {
    pub name: Name,
    pub ty: Idx,
}

#[derive(Clone, Debug)]
pub enum AdtKind {
    /// Abstract supertype. Only sealed types have a known, closed set of
    /// children.
    Abstract { sealed: bool },
    /// Product type deconstructed by position.
    Product { fields: Vec<FieldDef> },
    /// Singleton value.
    Module,
    /// Variable-length sequence of its single type parameter.
    Sequence,
}

#[derive(Clone, Debug)]
pub struct AdtDef {
    pub name: Name,
    pub params: Vec<TypeParam>,
    pub kind: AdtKind,
    /// Direct supertypes, in terms of this type's parameters.
    pub parents: Vec<Idx>,
    /// Direct subtypes in declaration order.
    pub children: Vec<AdtId>,
}

impl AdtDef {
    pub fn is_sealed(&self) -> bool {
        matches!(self.kind, AdtKind::Abstract { sealed: true })
    }

    pub fn is_product(&self) -> bool {
        matches!(self.kind, AdtKind::Product { .. })
    }

    pub fn is_module(&self) -> bool {
        matches!(self.kind, AdtKind::Module)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, AdtKind::Sequence)
    }

    /// Declared fields, empty for anything but products.
    pub fn fields(&self) -> &[FieldDef] {
        match &self.kind {
            AdtKind::Product { fields } => fields,
            _ => &[],
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
