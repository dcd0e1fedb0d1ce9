//! Analysis inputs and outputs.

use rustc_hash::FxHashMap;
use unio_diagnostic::emitter::DiagnosticEmitter;
use unio_diagnostic::{Diagnostic, ErrorGuaranteed};
use unio_ir::Span;
use unio_patterns::{Case, PatId, PatternType};
use unio_types::Idx;

/// Whether the case-set must handle every required union member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Completeness {
    /// Unhandled members are allowed; coverage and exhaustiveness are skipped.
    Partial,
    #[default]
    Total,
}

/// Which members of the declared union a total case-set must handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SubCoverage {
    #[default]
    WholeUnion,
    /// Only the members of this type (usually a sub-union).
    Type(Idx),
}

/// One case-set to analyze against a declared union.
#[derive(Clone, Debug)]
pub struct AnalysisRequest {
    pub union: Idx,
    pub cases: Vec<Case>,
    pub completeness: Completeness,
    pub sub_coverage: SubCoverage,
    /// Where the case-set was written; coverage errors point here.
    pub span: Span,
}

impl AnalysisRequest {
    /// A total request over the whole union.
    pub fn new(union: Idx, cases: Vec<Case>, span: Span) -> Self {
        AnalysisRequest {
            union,
            cases,
            completeness: Completeness::Total,
            sub_coverage: SubCoverage::WholeUnion,
            span,
        }
    }

    /// A total request whose span covers all of its cases.
    pub fn from_cases(union: Idx, cases: Vec<Case>) -> Self {
        let span = Span::covering(cases.iter().map(|case| case.span)).unwrap_or(Span::DUMMY);
        Self::new(union, cases, span)
    }

    #[must_use]
    pub fn with_completeness(mut self, completeness: Completeness) -> Self {
        self.completeness = completeness;
        self
    }

    #[must_use]
    pub fn with_sub_coverage(mut self, sub_coverage: SubCoverage) -> Self {
        self.sub_coverage = sub_coverage;
        self
    }

    /// Shorthand for a partial request.
    #[must_use]
    pub fn partial(self) -> Self {
        self.with_completeness(Completeness::Partial)
    }
}

/// A case bound to one union member.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MatchResult {
    /// Position of the case in the request.
    pub case: usize,
    pub span: Span,
    pub guarded: bool,
    /// The top-level alternative of the case that matched.
    pub alternative: PatId,
    pub member: Idx,
    pub pattern_type: PatternType,
}

/// Match results grouped per union member.
///
/// Members appear in the order their first match was recorded, and each
/// member's results keep case order.
#[derive(Clone, Debug, Default)]
pub struct MatchTable {
    order: Vec<Idx>,
    groups: FxHashMap<Idx, Vec<MatchResult>>,
}

impl MatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: MatchResult) {
        let member = result.member;
        let group = self.groups.entry(member).or_insert_with(|| {
            self.order.push(member);
            Vec::new()
        });
        group.push(result);
    }

    /// Results for `member`, empty when no case touches it.
    pub fn get(&self, member: Idx) -> &[MatchResult] {
        self.groups.get(&member).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, member: Idx) -> bool {
        self.groups.contains_key(&member)
    }

    /// Members with at least one match, in first-appearance order.
    pub fn members(&self) -> &[Idx] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (Idx, &[MatchResult])> + '_ {
        self.order.iter().map(|&member| (member, self.get(member)))
    }

    /// Number of members with at least one match.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of recorded results across all members.
    pub fn result_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl FromIterator<MatchResult> for MatchTable {
    fn from_iter<I: IntoIterator<Item = MatchResult>>(iter: I) -> Self {
        let mut table = MatchTable::new();
        for result in iter {
            table.push(result);
        }
        table
    }
}

/// A successful analysis. The cases are handed back unchanged.
#[derive(Clone, Debug)]
pub struct Analysis<'r> {
    pub cases: &'r [Case],
    pub matches: MatchTable,
    /// Advisory notes, such as inconclusive exhaustiveness.
    pub notes: Vec<Diagnostic>,
}

/// A failed analysis with the full batch of diagnostics.
#[derive(Clone, Debug)]
pub struct AnalysisFailure {
    pub diagnostics: Vec<Diagnostic>,
    pub guarantee: ErrorGuaranteed,
}

impl AnalysisFailure {
    /// The hard errors of the batch.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Render the whole batch, followed by its summary.
    pub fn emit(&self, emitter: &mut impl DiagnosticEmitter) {
        emitter.emit_batch(&self.diagnostics);
    }
}

#[cfg(test)]
mod tests;
