//! Structural patterns and pattern-type extraction.
//!
//! Patterns live in a [`PatternArena`] and are referenced by [`PatId`]. The
//! [`PatternTypeExtractor`] reduces a pattern to one or more
//! [`PatternType`]s: the type the pattern narrows its scrutinee to, and the
//! witness types its syntax proves, which the exhaustiveness checker uses for
//! catch-all detection.
//!
//! Product deconstruction aligns each sub-pattern's type with the type
//! parameter its field mentions, via [`TypeArg`] and [`TypeArgPointer`], so a
//! pattern such as `Tuple2("s", 1)` narrows to `Tuple2[str, int]`.

mod error;
mod extract;
mod pattern;
mod pattern_type;
mod type_arg;

pub use error::ExtractError;
pub use extract::PatternTypeExtractor;
pub use pattern::{Case, PatId, Pattern, PatternArena, PatternKind};
pub use pattern_type::PatternType;
pub use type_arg::{align, resolve_field_args, FieldCache, TypeArg, TypeArgPointer};
