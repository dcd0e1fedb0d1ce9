//! The analysis pipeline: membership, coverage and exhaustiveness of one
//! case-set.

use tracing::{debug, trace};
use unio_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use unio_ir::Span;
use unio_patterns::{Case, PatId, PatternArena, PatternType, PatternTypeExtractor};
use unio_types::{Idx, TypeModel};
use unio_union::{render_union, Union, UnionAlgebra};

use crate::{
    Analysis, AnalysisFailure, AnalysisRequest, CheckConfig, Completeness, Coverage,
    ExhaustivenessChecker, Limit, MatchResult, MatchTable, SubCoverage,
};

/// Analyze one case-set against its declared union.
///
/// On success the cases are handed back unchanged together with the match
/// table and any advisory notes. On failure every diagnostic of the batch is
/// returned, sorted by span.
pub fn analyze<'r, M: TypeModel + ?Sized>(
    model: &M,
    arena: &PatternArena,
    request: &'r AnalysisRequest,
    config: &CheckConfig,
) -> Result<Analysis<'r>, AnalysisFailure> {
    AnalysisSession::new(model, arena, config).run(request)
}

/// Per-call state: the union expansion cache, the field alignment cache and
/// the diagnostic queue.
///
/// A session may analyze several requests over the same pool; caches carry
/// over, diagnostics do not.
pub struct AnalysisSession<'a, M: TypeModel + ?Sized> {
    model: &'a M,
    arena: &'a PatternArena,
    config: &'a CheckConfig,
    unions: UnionAlgebra<'a, M>,
    extractor: PatternTypeExtractor<'a, M>,
    queue: DiagnosticQueue,
}

impl<'a, M: TypeModel + ?Sized> AnalysisSession<'a, M> {
    pub fn new(model: &'a M, arena: &'a PatternArena, config: &'a CheckConfig) -> Self {
        AnalysisSession {
            model,
            arena,
            config,
            unions: UnionAlgebra::new(model),
            extractor: PatternTypeExtractor::new(model, arena)
                .with_max_witnesses(config.max_witnesses),
            queue: DiagnosticQueue::with_config(config.diagnostics.clone()),
        }
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(union = ?request.union, cases = request.cases.len(), completeness = ?request.completeness)
    )]
    pub fn run<'r>(&mut self, request: &'r AnalysisRequest) -> Result<Analysis<'r>, AnalysisFailure> {
        let union = self.unions.expand(request.union);
        debug!(members = union.len(), "expanded union");

        let mut matches = MatchTable::new();
        for (index, case) in request.cases.iter().enumerate() {
            let alternatives = match self.extractor.extract_alternatives(case.pattern) {
                Ok(alternatives) => alternatives,
                Err(err) => {
                    debug!(case = index, %err, "aborting on unsupported pattern");
                    let guarantee = self.queue.emit_error(err.to_diagnostic());
                    return Err(AnalysisFailure {
                        diagnostics: self.queue.flush(),
                        guarantee,
                    });
                }
            };
            for (alternative, pattern_type) in alternatives {
                self.bind(index, case, alternative, &pattern_type, &union, &mut matches);
            }
        }
        debug!(
            members = matches.len(),
            results = matches.result_count(),
            "bound cases to members"
        );

        if request.completeness == Completeness::Total {
            let required = self.required_members(request, &union);
            self.check_coverage(&required, &matches, request.span);
            for &member in &required {
                let results = matches.get(member);
                if !results.is_empty() {
                    self.check_member(member, results, request.span);
                }
            }
        }

        if let Some(guarantee) = self.queue.has_errors() {
            return Err(AnalysisFailure {
                diagnostics: self.queue.flush(),
                guarantee,
            });
        }
        Ok(Analysis {
            cases: &request.cases,
            matches,
            notes: self.queue.flush(),
        })
    }

    /// Record which union members one alternative of a case can match.
    fn bind(
        &mut self,
        index: usize,
        case: &Case,
        alternative: PatId,
        pattern_type: &PatternType,
        union: &Union,
        matches: &mut MatchTable,
    ) {
        let model = self.model;
        let members: Vec<Idx> = if pattern_type.is_catch_all() {
            union.members().to_vec()
        } else {
            union
                .iter()
                .filter(|&member| {
                    model.is_subtype(pattern_type.pt, member)
                        || model.is_subtype(member, pattern_type.pt)
                })
                .collect()
        };
        trace!(case = index, pt = ?pattern_type.pt, ?members, "bound alternative");

        if members.is_empty() {
            if let Err(mismatch) = self.unions.is_part_of(pattern_type.pt, union) {
                let diag = mismatch
                    .to_diagnostic(model, ErrorCode::E3002, self.arena.span(alternative))
                    .with_note(format!("case {} can never match", index + 1));
                self.queue.push(diag);
            }
            return;
        }

        for member in members {
            matches.push(MatchResult {
                case: index,
                span: case.span,
                guarded: case.is_guarded(),
                alternative,
                member,
                pattern_type: pattern_type.clone(),
            });
        }
    }

    /// The members a total case-set must handle.
    fn required_members(&mut self, request: &AnalysisRequest, union: &Union) -> Vec<Idx> {
        let SubCoverage::Type(sub) = request.sub_coverage else {
            return union.members().to_vec();
        };
        if let Err(mismatch) = self.unions.check_contains_all_of(request.union, sub) {
            self.queue
                .push(mismatch.to_diagnostic(self.model, ErrorCode::E3006, request.span));
        }
        let model = self.model;
        let wanted = self.unions.expand(sub);
        union
            .iter()
            .filter(|&member| {
                wanted
                    .iter()
                    .any(|w| model.is_subtype(member, w) || model.is_subtype(w, member))
            })
            .collect()
    }

    fn check_coverage(&mut self, required: &[Idx], matches: &MatchTable, span: Span) {
        let uncovered: Vec<Idx> = required
            .iter()
            .copied()
            .filter(|&member| !matches.contains(member))
            .collect();
        if uncovered.is_empty() {
            return;
        }
        debug!(?uncovered, "members without a case");

        let model = self.model;
        let message = match uncovered.as_slice() {
            [single] => format!(
                "The partial function fails to match on {}.",
                model.format_type(*single)
            ),
            many => format!(
                "The partial function fails to match on these types: {}.",
                render_union(model, many)
            ),
        };
        self.queue.push(
            Diagnostic::error(ErrorCode::E3003)
                .with_message(message)
                .with_label(span, "case set is declared total")
                .with_suggestion("add a case for every missing type, or declare the case set partial"),
        );
    }

    fn check_member(&mut self, member: Idx, results: &[MatchResult], span: Span) {
        let model = self.model;
        let config = self.config;
        let evidence: Vec<(PatId, &PatternType)> = results
            .iter()
            .filter(|r| config.counts_as_evidence(r.guarded))
            .map(|r| (r.alternative, &r.pattern_type))
            .collect();
        let checker = ExhaustivenessChecker::new(model, self.arena, config);
        let ty = model.format_type(member);

        match checker.check(member, &evidence) {
            Coverage::Covered => {}
            Coverage::Missing {
                counterexamples,
                note,
            } => {
                let message = match counterexamples.as_slice() {
                    [single] => format!(
                        "The patterns for {ty} are not exhaustive; It would fail on the following input: {single}."
                    ),
                    many => format!(
                        "The patterns for {ty} are not exhaustive; It would fail on the following inputs: {}.",
                        many.join(", ")
                    ),
                };
                let mut diag = Diagnostic::error(ErrorCode::E3004)
                    .with_message(message)
                    .with_label(span, format!("patterns for {ty} are not exhaustive"));
                for result in results {
                    let label = if config.counts_as_evidence(result.guarded) {
                        format!("matches {ty}")
                    } else {
                        "guarded, not counted".to_string()
                    };
                    diag = diag.with_secondary_label(result.span, label);
                }
                if let Some(note) = note {
                    diag = diag.with_note(note);
                }
                if evidence.len() < results.len() {
                    diag = diag.with_note("a guard may reject any value, so guarded cases do not prove exhaustiveness");
                }
                self.queue.push(diag);
            }
            Coverage::Inconclusive(limit) => {
                let reason = match limit {
                    Limit::UnfoldDepth(nested) => format!(
                        "{} is nested more than {} times",
                        model.format_type(nested),
                        config.max_unfold_depth
                    ),
                    Limit::StepBudget => {
                        format!("the search exceeded {} steps", config.step_budget)
                    }
                };
                debug!(member = %ty, %reason, "exhaustiveness inconclusive");
                self.queue.push(
                    Diagnostic::note(ErrorCode::W3005)
                        .with_message(format!("exhaustiveness of the patterns for {ty} was not verified"))
                        .with_label(span, "recursive type limit reached")
                        .with_note(reason),
                );
            }
        }
    }
}
