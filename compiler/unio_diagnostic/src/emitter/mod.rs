//! Diagnostic emitters.
//!
//! The analysis only produces [`Diagnostic`] values; turning a batch into
//! text is the caller's business, through a [`DiagnosticEmitter`].

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::{Diagnostic, Severity};

/// How many diagnostics of each severity a batch holds.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct BatchSummary {
    pub errors: usize,
    pub warnings: usize,
    pub notes: usize,
}

impl BatchSummary {
    pub fn of(batch: &[Diagnostic]) -> Self {
        batch.iter().fold(BatchSummary::default(), |mut acc, diag| {
            match diag.severity {
                Severity::Error => acc.errors += 1,
                Severity::Warning => acc.warnings += 1,
                Severity::Note => acc.notes += 1,
            }
            acc
        })
    }

    pub fn is_empty(&self) -> bool {
        self.errors + self.warnings + self.notes == 0
    }
}

/// Renders diagnostics to some output.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Closing line for a batch.
    fn emit_summary(&mut self, summary: BatchSummary);

    fn flush(&mut self);

    /// Emit a whole batch followed by its summary.
    fn emit_batch(&mut self, batch: &[Diagnostic]) {
        for diag in batch {
            self.emit(diag);
        }
        self.emit_summary(BatchSummary::of(batch));
        self.flush();
    }
}
