//! Shared leaf types for the unio analysis crates.
//!
//! - [`Span`]: compact byte-offset source location attached to every case and
//!   pattern so diagnostics can point back at the analyzed code.
//! - [`Name`] / [`StringInterner`]: interned identifiers for type, field and
//!   binding names.

mod interner;
mod span;

pub use interner::{InternError, Name, StringInterner};
pub use span::{Span, SpanError};

/// Compile-time assertion that a type has the expected size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}
