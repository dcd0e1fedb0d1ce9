use unio_types::Idx;

/// The type a pattern matches, plus the witness types its syntax proves.
///
/// An empty witness list, or `NO_TYPE` entries, mean "no useful witness".
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PatternType {
    pub pt: Idx,
    pub expr: Vec<Idx>,
}

impl PatternType {
    pub fn new(pt: Idx, expr: Vec<Idx>) -> Self {
        PatternType { pt, expr }
    }

    /// Wildcards and plain bindings: match anything, refine nothing.
    pub fn catch_all() -> Self {
        PatternType::new(Idx::NO_TYPE, vec![Idx::NO_TYPE])
    }

    /// `_: T`: matches `T` without proving any constructor of it.
    pub fn ascription(ty: Idx) -> Self {
        PatternType::new(ty, Vec::new())
    }

    /// A literal is its own witness.
    pub fn literal(ty: Idx) -> Self {
        PatternType::new(ty, vec![ty])
    }

    /// Non-empty witnesses, all of them `NO_TYPE`.
    pub fn is_catch_all(&self) -> bool {
        !self.expr.is_empty() && self.expr.iter().all(|w| w.is_no_type())
    }

    /// Matches a type without any refining witness.
    pub fn is_ascription_only(&self) -> bool {
        self.expr.is_empty()
    }
}
