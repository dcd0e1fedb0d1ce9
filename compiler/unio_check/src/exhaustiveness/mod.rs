//! Exhaustiveness of the patterns that cover one target type.
//!
//! The checker runs in three stages:
//!
//! 1. **Catch-all**: a pattern whose witnesses are all `NO_TYPE` (a wildcard
//!    or plain binding, possibly named) covers every value.
//! 2. **Closed targets**: when the target splits into a finite set of
//!    constructors (sealed hierarchy, product, singleton, `bool`, unit,
//!    literal, sequence, union) the usefulness procedure decides coverage
//!    exactly and reports the uncovered value shapes.
//! 3. **Open targets**: otherwise the target is covered only when some
//!    pattern matches it as a whole: its type is a supertype of the target
//!    and every witness it carries is too. The target itself is the
//!    counterexample.
//!
//! Recursive types can make the usefulness search unfold the same data type
//! without end, so the unfolding depth and the number of steps are bounded
//! by [`CheckConfig`]. Hitting either bound makes the result
//! [`Coverage::Inconclusive`], never a false error.

mod usefulness;
mod witness;

use smallvec::smallvec;
use tracing::{debug, trace};
use unio_patterns::{PatId, PatternArena, PatternType};
use unio_types::{Idx, TypeModel};
use unio_union::render_union;

use crate::CheckConfig;
use usefulness::{Column, Matrix, Row};

/// Outcome of one exhaustiveness check.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Coverage {
    Covered,
    /// Some values are not matched.
    Missing {
        /// Uncovered value shapes, rendered as patterns.
        counterexamples: Vec<String>,
        /// Extra context for open targets.
        note: Option<String>,
    },
    /// The search gave up before reaching an answer.
    Inconclusive(Limit),
}

impl Coverage {
    pub fn is_covered(&self) -> bool {
        matches!(self, Coverage::Covered)
    }
}

/// Which bound stopped the usefulness search.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Limit {
    /// This type is nested inside its own data type too often.
    UnfoldDepth(Idx),
    StepBudget,
}

/// Decides whether a set of patterns covers a target type.
pub struct ExhaustivenessChecker<'a, M: TypeModel + ?Sized> {
    model: &'a M,
    arena: &'a PatternArena,
    config: &'a CheckConfig,
}

impl<'a, M: TypeModel + ?Sized> ExhaustivenessChecker<'a, M> {
    pub fn new(model: &'a M, arena: &'a PatternArena, config: &'a CheckConfig) -> Self {
        ExhaustivenessChecker {
            model,
            arena,
            config,
        }
    }

    /// Check `patterns`, each paired with the pattern type extracted from
    /// it, against `target`.
    #[tracing::instrument(level = "debug", skip_all, fields(target = ?target, patterns = patterns.len()))]
    pub fn check(&self, target: Idx, patterns: &[(PatId, &PatternType)]) -> Coverage {
        if patterns.iter().any(|(_, pattern_type)| pattern_type.is_catch_all()) {
            trace!("catch-all pattern");
            return Coverage::Covered;
        }
        if self.model.is_closed(target) {
            self.check_closed(target, patterns)
        } else {
            self.check_open(target, patterns)
        }
    }

    fn check_closed(&self, target: Idx, patterns: &[(PatId, &PatternType)]) -> Coverage {
        let rows: Vec<Row> = patterns.iter().map(|&(pat, _)| smallvec![Some(pat)]).collect();
        let mut matrix = Matrix::new(self.model, self.arena, self.config);
        let result = matrix.missing(rows, &[Column::root(target)]);
        debug!(steps = matrix.steps(), "usefulness finished");

        match result {
            Ok(missing) if missing.is_empty() => Coverage::Covered,
            Ok(missing) => {
                let mut counterexamples: Vec<String> = Vec::with_capacity(missing.len());
                for row in &missing {
                    let rendered = row
                        .first()
                        .map_or_else(|| "_".to_string(), |w| witness::render(self.model, w));
                    if !counterexamples.contains(&rendered) {
                        counterexamples.push(rendered);
                    }
                }
                Coverage::Missing {
                    counterexamples,
                    note: None,
                }
            }
            Err(limit) => Coverage::Inconclusive(limit),
        }
    }

    fn check_open(&self, target: Idx, patterns: &[(PatId, &PatternType)]) -> Coverage {
        let model = self.model;
        let covers = |pattern_type: &PatternType| {
            model.is_subtype(target, pattern_type.pt)
                && pattern_type
                    .expr
                    .iter()
                    .all(|&w| w.is_no_type() || model.is_subtype(target, w))
        };
        if patterns.iter().any(|&(_, pattern_type)| covers(pattern_type)) {
            return Coverage::Covered;
        }

        let mut witnesses: Vec<Idx> = Vec::new();
        for (_, pattern_type) in patterns {
            let proofs: &[Idx] = if pattern_type.expr.is_empty() {
                std::slice::from_ref(&pattern_type.pt)
            } else {
                &pattern_type.expr
            };
            for &w in proofs {
                if !w.is_no_type() && !witnesses.contains(&w) {
                    witnesses.push(w);
                }
            }
        }
        let target_name = model.format_type(target);
        let note = format!(
            "{target_name} is not covered by any of {}",
            render_union(model, &witnesses)
        );
        Coverage::Missing {
            counterexamples: vec![target_name],
            note: Some(note),
        }
    }
}
