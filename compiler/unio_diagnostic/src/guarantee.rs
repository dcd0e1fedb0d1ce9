//! Type-level proof that an error was reported.

use std::fmt;

/// Proof that at least one hard error was recorded.
///
/// Only [`DiagnosticQueue`](crate::DiagnosticQueue) can create one, so a
/// function returning `Result<T, ErrorGuaranteed>` cannot fail silently.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Create a guarantee from an error count, `None` when the count is zero.
    pub fn from_error_count(count: usize) -> Option<Self> {
        if count > 0 {
            Some(Self::new())
        } else {
            None
        }
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("analysis reported errors")
    }
}

#[cfg(test)]
mod tests;
