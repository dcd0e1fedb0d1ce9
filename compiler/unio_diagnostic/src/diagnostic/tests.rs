use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builder_collects_every_part() {
    let diag = Diagnostic::error(ErrorCode::E3002)
        .with_message("Baz is not in {Foo | Bar}.")
        .with_label(Span::new(0, 5), "type not in union")
        .with_note("case 3 can never match")
        .with_suggestion("add Baz to the union");

    assert_eq!(diag.code, ErrorCode::E3002);
    assert!(diag.is_error());
    assert_eq!(diag.labels, vec![Label::primary(Span::new(0, 5), "type not in union")]);
    assert_eq!(diag.notes, vec!["case 3 can never match".to_string()]);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn notes_do_not_fail() {
    let diag = Diagnostic::note(ErrorCode::W3005).with_message("could not verify");
    assert!(!diag.is_error());
    assert_eq!(diag.severity, Severity::Note);
}

#[test]
fn primary_and_secondary_spans() {
    let diag = Diagnostic::error(ErrorCode::E3004)
        .with_secondary_label(Span::new(0, 2), "matches Option[int]")
        .with_label(Span::new(10, 15), "case set")
        .with_secondary_label(Span::new(3, 4), "guarded, not counted");
    assert_eq!(diag.primary_span(), Some(Span::new(10, 15)));
    assert_eq!(
        diag.secondary_spans().collect::<Vec<_>>(),
        vec![Span::new(0, 2), Span::new(3, 4)]
    );

    assert_eq!(Diagnostic::error(ErrorCode::E3004).primary_span(), None);
}

#[test]
fn display_lists_each_part_on_its_own_line() {
    let diag = Diagnostic::error(ErrorCode::E3003)
        .with_message("The partial function fails to match on Baz.")
        .with_label(Span::new(0, 5), "case set is declared total")
        .with_secondary_label(Span::new(10, 15), "related")
        .with_note("a note")
        .with_suggestion("a suggestion");

    assert_eq!(
        diag.to_string(),
        "error[E3003]: The partial function fails to match on Baz.\n  \
         --> 0..5: case set is declared total\n   \
         ·  10..15: related\n  \
         = note: a note\n  \
         = help: a suggestion"
    );
}

#[test]
fn severity_names() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.as_str(), "warning");
    assert_eq!(Severity::Note.to_string(), "note");
}
