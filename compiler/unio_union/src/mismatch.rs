//! Failed membership queries.

use unio_diagnostic::{Diagnostic, ErrorCode};
use unio_ir::Span;
use unio_types::{Idx, TypeModel};

use crate::Union;

/// Types that are not part of a target union.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnionMismatch {
    /// Every unmatched type, in the order it was tested.
    pub missing: Vec<Idx>,
    /// The union the types were tested against.
    pub target: Union,
}

impl UnionMismatch {
    /// One line per unmatched type: `"<Type> is not in {<T1> | <T2>}."`
    pub fn message<M: TypeModel + ?Sized>(&self, model: &M) -> String {
        let target = self.target.render(model);
        self.missing
            .iter()
            .map(|&ty| format!("{} is not in {target}.", model.format_type(ty)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Build a diagnostic with the given code, pointing at `span`.
    pub fn to_diagnostic<M: TypeModel + ?Sized>(
        &self,
        model: &M,
        code: ErrorCode,
        span: Span,
    ) -> Diagnostic {
        let label = if self.missing.len() == 1 {
            "type not in union".to_string()
        } else {
            format!("{} types not in union", self.missing.len())
        };
        Diagnostic::error(code)
            .with_message(self.message(model))
            .with_label(span, label)
    }
}
