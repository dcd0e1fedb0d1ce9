//! Diagnostic system for the union and exhaustiveness analyses.
//!
//! - Error codes for searchability (`E3xxx` for analysis errors, `W3xxx` for
//!   advisory notes)
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (why it's wrong) and suggestions (how to fix)
//!
//! # Batch reporting
//!
//! An analysis call collects every diagnostic it produces in a
//! [`DiagnosticQueue`] and reports them together, so a caller sees every
//! problem of a case-set in one pass.
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one hard error was
//! recorded; only the queue can mint one.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
