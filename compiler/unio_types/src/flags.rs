//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a type is interned, so queries such as
//! "does this type mention a parameter" never walk the type.

use bitflags::bitflags;

use crate::{Idx, Tag};

bitflags! {
    /// Cached properties of an interned type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        /// Mentions a type parameter somewhere; substitution must visit it.
        const HAS_PARAM = 1 << 0;
        /// Mentions the `NO_TYPE` placeholder somewhere.
        const HAS_NO_TYPE = 1 << 1;
        /// Contains a union, at the top or nested in an argument.
        const HAS_UNION = 1 << 2;

        /// Pre-interned primitive.
        const IS_PRIMITIVE = 1 << 8;
        /// Singleton literal type.
        const IS_LITERAL = 1 << 9;
        /// Top-level union.
        const IS_UNION = 1 << 10;
        /// Applied data type.
        const IS_ADT = 1 << 11;

        /// Flags inherited by any type that contains a child with them.
        const PROPAGATE = Self::HAS_PARAM.bits()
            | Self::HAS_NO_TYPE.bits()
            | Self::HAS_UNION.bits();
    }
}

impl TypeFlags {
    /// Flags for a pre-interned primitive.
    pub fn primitive(idx: Idx) -> Self {
        if idx.is_no_type() {
            Self::IS_PRIMITIVE | Self::HAS_NO_TYPE
        } else {
            Self::IS_PRIMITIVE
        }
    }

    /// Flags contributed by a node of the given tag, before children.
    pub fn for_tag(tag: Tag) -> Self {
        match tag {
            Tag::Literal => Self::IS_LITERAL,
            Tag::Union => Self::IS_UNION | Self::HAS_UNION,
            Tag::Adt => Self::IS_ADT,
            Tag::Param => Self::HAS_PARAM,
            Tag::NoType => Self::IS_PRIMITIVE | Self::HAS_NO_TYPE,
            _ => Self::IS_PRIMITIVE,
        }
    }

    /// The part of a child's flags that its parent inherits.
    #[inline]
    pub fn propagated(self) -> Self {
        self & Self::PROPAGATE
    }

    #[inline]
    pub fn has_params(self) -> bool {
        self.contains(Self::HAS_PARAM)
    }

    #[inline]
    pub fn has_no_type(self) -> bool {
        self.contains(Self::HAS_NO_TYPE)
    }
}
