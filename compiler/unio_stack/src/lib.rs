//! Stack growth guard for recursive type queries.
//!
//! Subtyping, least-upper-bound computation, type rendering and the
//! usefulness procedure all recurse over the nesting depth of the types and
//! patterns being analyzed. A pathological generic type (`List[List[...]]`
//! nested tens of thousands deep) would overflow a fixed native stack, so
//! those recursion points go through [`ensure_sufficient_stack`].
//!
//! - **Native targets**: grows the stack on demand with `stacker`.
//! - **WASM targets**: plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn is_subtype(&self, sub: Idx, sup: Idx) -> bool {
///     ensure_sufficient_stack(|| self.is_subtype_inner(sub, sup))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nested `[T]` depth counter, shaped like a walk over a list-of-list type.
    fn nesting_depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { nesting_depth(n - 1) + 1 })
    }

    #[test]
    fn shallow_walk_returns_depth() {
        assert_eq!(nesting_depth(16), 16);
    }

    #[test]
    fn deep_walk_does_not_overflow() {
        assert_eq!(nesting_depth(100_000), 100_000);
    }

    #[test]
    fn forwards_result_values() {
        let result: Result<u32, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }
}
