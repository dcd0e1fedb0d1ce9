//! Type tags and interned type data.

use smallvec::SmallVec;
use unio_ir::Name;

use crate::{AdtId, Idx};

/// Kind discriminant of an interned type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Tag {
    Never,
    Any,
    NoType,
    Int,
    Float,
    Bool,
    Str,
    Char,
    Unit,
    /// A singleton type holding one literal value, e.g. `42` or `"s"`.
    Literal,
    /// The binary union `a | b`.
    Union,
    /// A declared data type applied to type arguments.
    Adt,
    /// A type parameter of a declared data type.
    Param,
}

impl Tag {
    /// Whether the tag denotes a pre-interned type.
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Tag::Never
                | Tag::Any
                | Tag::NoType
                | Tag::Int
                | Tag::Float
                | Tag::Bool
                | Tag::Str
                | Tag::Char
                | Tag::Unit
        )
    }
}

/// A literal value lifted to the type level.
///
/// Floats are stored by bit pattern so literal types can be hashed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(i64),
    Float(u64),
    Bool(bool),
    Str(Name),
    Char(char),
    Unit,
}

impl Literal {
    /// Build a float literal from its value.
    pub fn float(value: f64) -> Self {
        Literal::Float(value.to_bits())
    }

    /// The primitive type this literal widens to.
    pub const fn base_type(self) -> Idx {
        match self {
            Literal::Int(_) => Idx::INT,
            Literal::Float(_) => Idx::FLOAT,
            Literal::Bool(_) => Idx::BOOL,
            Literal::Str(_) => Idx::STR,
            Literal::Char(_) => Idx::CHAR,
            Literal::Unit => Idx::UNIT,
        }
    }
}

/// Structural data of an interned type. Equal data means equal handle.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    Primitive(Tag),
    Literal(Literal),
    Union(Idx, Idx),
    Adt { adt: AdtId, args: SmallVec<[Idx; 4]> },
    Param { owner: AdtId, index: u32 },
}

impl TypeData {
    pub fn tag(&self) -> Tag {
        match self {
            TypeData::Primitive(tag) => *tag,
            TypeData::Literal(_) => Tag::Literal,
            TypeData::Union(..) => Tag::Union,
            TypeData::Adt { .. } => Tag::Adt,
            TypeData::Param { .. } => Tag::Param,
        }
    }
}
