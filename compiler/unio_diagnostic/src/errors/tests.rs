use super::*;

#[test]
fn every_analysis_code_is_documented() {
    for code in ErrorCode::ALL.iter().filter(|c| c.is_pattern_error()) {
        assert!(ErrorDocs::has_docs(*code), "{code} has no documentation");
    }
}

#[test]
fn docs_start_with_their_code() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(doc.starts_with(&format!("# {code}")), "{code}: {doc}");
    }
}

#[test]
fn internal_codes_have_no_docs() {
    assert!(ErrorDocs::get(ErrorCode::E9002).is_none());
}

#[test]
fn titles_come_from_the_heading() {
    assert_eq!(ErrorDocs::title(ErrorCode::E3004), Some("Patterns are not exhaustive"));
    assert_eq!(ErrorDocs::title(ErrorCode::E9002), None);
}
