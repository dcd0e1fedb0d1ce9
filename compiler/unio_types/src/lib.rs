//! Host type model for union membership and pattern analysis.
//!
//! Types are interned in a [`Pool`] and referenced by [`Idx`]. The pool also
//! registers the declared data types (sealed hierarchies, products, modules,
//! sequences) the closed-world analysis enumerates, and answers the
//! judgements the analysis needs: subtyping, least upper bounds, direct
//! subtypes and instantiated fields. [`TypeModel`] is the narrow interface
//! over those judgements.

mod adt;
mod flags;
mod hierarchy;
mod idx;
mod lub;
mod model;
mod pool;
mod prelude;
mod subtype;
mod tag;

pub use adt::{AdtDef, AdtId, AdtKind, Field, FieldDef, TypeParam, Variance};
pub use flags::TypeFlags;
pub use idx::Idx;
pub use model::TypeModel;
pub use pool::Pool;
pub use prelude::Prelude;
pub use tag::{Literal, Tag, TypeData};

unio_ir::static_assert_size!(Idx, 4);
unio_ir::static_assert_size!(AdtId, 4);
