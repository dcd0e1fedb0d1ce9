use pretty_assertions::assert_eq;
use unio_ir::Span;

use super::*;
use crate::{Diagnostic, DiagnosticQueue, ErrorCode};

#[test]
fn only_a_positive_count_proves_an_error() {
    assert_eq!(ErrorGuaranteed::from_error_count(0), None);
    assert_eq!(
        ErrorGuaranteed::from_error_count(3),
        Some(ErrorGuaranteed::new())
    );
}

#[test]
fn queue_mints_on_first_error_only() {
    let mut queue = DiagnosticQueue::new();
    queue.push(Diagnostic::note(ErrorCode::W3005).with_label(Span::new(0, 1), "note"));
    assert_eq!(queue.has_errors(), None);

    let proof = queue.emit_error(Diagnostic::error(ErrorCode::E3003).with_label(Span::new(2, 3), "here"));
    assert_eq!(queue.has_errors(), Some(proof));
    assert_eq!(proof.to_string(), "analysis reported errors");
}
