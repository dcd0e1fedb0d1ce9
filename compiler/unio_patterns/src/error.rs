//! Extraction failures.

use thiserror::Error;
use unio_diagnostic::{Diagnostic, ErrorCode};
use unio_ir::Span;

/// A pattern the extractor cannot model.
///
/// Extraction never approximates: an unmodeled shape could make the
/// exhaustiveness check claim coverage it cannot prove.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("unsupported pattern: {message}")]
    Unsupported { message: String, span: Span },

    #[error("malformed pattern tree")]
    Malformed { span: Span },
}

impl ExtractError {
    pub fn unsupported(message: impl Into<String>, span: Span) -> Self {
        Self::Unsupported {
            message: message.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Unsupported { span, .. } | Self::Malformed { span } => *span,
        }
    }

    /// E3001 pointing at the offending pattern.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(ErrorCode::E3001)
            .with_message(self.to_string())
            .with_label(self.span(), "unsupported here");
        match self {
            Self::Unsupported { .. } => diag.with_suggestion(
                "match on the value's type with `_: T` or split the pattern into simpler cases",
            ),
            Self::Malformed { .. } => diag,
        }
    }
}
