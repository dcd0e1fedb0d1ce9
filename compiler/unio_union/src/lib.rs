//! Union algebra.
//!
//! A declared union such as `Foo | (Bar | Baz)` is a tree of binary union
//! types in the host model. The analysis works on its flattened form, a
//! [`Union`]: an ordered list of distinct members, none of which is itself a
//! union. [`UnionAlgebra`] builds those lists and answers membership
//! (`is_part_of`), subset (`contains_all_of`) and intersection
//! (`contains_some_of`) queries. Failed membership is reported as a
//! [`UnionMismatch`] naming every unmatched type.

mod algebra;
mod mismatch;
mod union;

pub use algebra::{UnionAlgebra, UnionCache};
pub use mismatch::UnionMismatch;
pub use union::{render_union, Union};
