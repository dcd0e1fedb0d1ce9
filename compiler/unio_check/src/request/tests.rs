use pretty_assertions::assert_eq;

use super::*;

fn result(case: usize, member: Idx) -> MatchResult {
    MatchResult {
        case,
        span: Span::new(0, 1),
        guarded: false,
        alternative: PatId::new(0),
        member,
        pattern_type: PatternType::ascription(member),
    }
}

#[test]
fn groups_keep_first_appearance_order() {
    let table: MatchTable = vec![
        result(0, Idx::STR),
        result(1, Idx::INT),
        result(2, Idx::STR),
    ]
    .into_iter()
    .collect();

    assert_eq!(table.members(), &[Idx::STR, Idx::INT]);
    assert_eq!(
        table.get(Idx::STR).iter().map(|r| r.case).collect::<Vec<_>>(),
        vec![0, 2]
    );
    assert_eq!(table.len(), 2);
    assert_eq!(table.result_count(), 3);
}

#[test]
fn unmatched_member_has_no_results() {
    let table = MatchTable::new();
    assert!(table.is_empty());
    assert!(!table.contains(Idx::BOOL));
    assert!(table.get(Idx::BOOL).is_empty());
}

#[test]
fn request_defaults_to_total_over_the_whole_union() {
    let request = AnalysisRequest::new(Idx::INT, Vec::new(), Span::new(0, 4));
    assert_eq!(request.completeness, Completeness::Total);
    assert_eq!(request.sub_coverage, SubCoverage::WholeUnion);
    assert_eq!(request.partial().completeness, Completeness::Partial);
}

#[test]
fn request_span_covers_its_cases() {
    let cases = vec![
        Case::new(PatId::new(0), Span::new(12, 20)),
        Case::new(PatId::new(1), Span::new(3, 9)),
    ];
    let request = AnalysisRequest::from_cases(Idx::INT, cases);
    assert_eq!(request.span, Span::new(3, 20));
    assert_eq!(AnalysisRequest::from_cases(Idx::INT, Vec::new()).span, Span::DUMMY);
}
