//! Analysis configuration.

use unio_diagnostic::DiagnosticConfig;

/// How cases with a guard count towards exhaustiveness.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum GuardPolicy {
    /// A guard may reject any value, so guarded cases prove nothing.
    #[default]
    Strict,
    /// Guarded cases count as if the guard always held.
    Optimistic,
}

/// Limits and policies for one [`analyze`](crate::analyze) call.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CheckConfig {
    pub guard_policy: GuardPolicy,
    /// How many times a data type may appear nested inside itself in the
    /// usefulness search before the result becomes inconclusive.
    pub max_unfold_depth: u32,
    /// Upper bound on usefulness steps for one target type.
    pub step_budget: u32,
    /// Cap on witness tuples built by the extractor's cross product.
    pub max_witnesses: usize,
    /// Cap on counterexamples reported for one target type.
    pub max_counterexamples: usize,
    pub diagnostics: DiagnosticConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            guard_policy: GuardPolicy::Strict,
            max_unfold_depth: 32,
            step_budget: 100_000,
            max_witnesses: 64,
            max_counterexamples: 8,
            diagnostics: DiagnosticConfig::default(),
        }
    }
}

impl CheckConfig {
    /// Strict guards and no cap on reported errors.
    pub fn strict() -> Self {
        CheckConfig {
            diagnostics: DiagnosticConfig::unlimited(),
            ..Self::default()
        }
    }

    /// Guarded cases count as evidence.
    pub fn permissive() -> Self {
        CheckConfig {
            guard_policy: GuardPolicy::Optimistic,
            ..Self::default()
        }
    }

    /// Whether a case with the given guard flag may prove exhaustiveness.
    pub fn counts_as_evidence(&self, guarded: bool) -> bool {
        !guarded || self.guard_policy == GuardPolicy::Optimistic
    }
}
