//! Type handle.
//!
//! `Idx` is the only type representation the analysis sees. Every type lives
//! in a [`Pool`](crate::Pool) and is referenced by a 32-bit index. Because the
//! pool hash-conses type data, two handles are equal exactly when the types
//! are structurally equal, so `=:=` is an index comparison.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Pre-interned types (indices 0-8) ===

    /// The bottom type `never`: no values, part of every union.
    pub const NEVER: Self = Self(0);
    /// The top type `any`.
    pub const ANY: Self = Self(1);
    /// The "no constraint" placeholder produced by wildcard patterns.
    pub const NO_TYPE: Self = Self(2);
    /// The `int` type.
    pub const INT: Self = Self(3);
    /// The `float` type.
    pub const FLOAT: Self = Self(4);
    /// The `bool` type.
    pub const BOOL: Self = Self(5);
    /// The `str` type.
    pub const STR: Self = Self(6);
    /// The `char` type.
    pub const CHAR: Self = Self(7);
    /// The unit type `()`, inhabited by exactly one value.
    pub const UNIT: Self = Self(8);

    /// Number of pre-interned types.
    pub const PRIMITIVE_COUNT: u32 = 9;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-interned type.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    /// Check if this is the `NO_TYPE` placeholder.
    #[inline]
    pub const fn is_no_type(self) -> bool {
        self.0 == Self::NO_TYPE.0
    }

    /// Check if this is the bottom type.
    #[inline]
    pub const fn is_never(self) -> bool {
        self.0 == Self::NEVER.0
    }

    /// Human-readable name for pre-interned types.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("never"),
            1 => Some("any"),
            2 => Some("<notype>"),
            3 => Some("int"),
            4 => Some("float"),
            5 => Some("bool"),
            6 => Some("str"),
            7 => Some("char"),
            8 => Some("()"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx({name})"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests;
