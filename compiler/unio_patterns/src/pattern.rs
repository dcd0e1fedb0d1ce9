//! Pattern syntax tree, arena-allocated.

use unio_ir::{Name, Span};
use unio_types::{AdtId, Idx, Literal};

/// Index of a pattern in a [`PatternArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct PatId(u32);

impl PatId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        PatId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Pattern shapes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// Wildcard: `_`
    Wildcard,
    /// Binding: `x`
    Binding(Name),
    /// At pattern: `x @ Some(_)`
    At { name: Name, pattern: PatId },
    /// Type ascription: `_: T`, `Some(_): Option[int]`
    Typed { pattern: PatId, ty: Idx },
    /// Literal: `42`, `"s"`, `true`, `()`
    Literal(Literal),
    /// Product or module deconstruction by position: `Some(x)`, `Tuple2(a, b)`,
    /// `None`. Modules take no inner patterns.
    Variant { adt: AdtId, inner: Vec<PatId> },
    /// Single-parameter extractor: `List(a, b, _*)`.
    Extractor { adt: AdtId, elements: Vec<PatId> },
    /// Trailing sequence wildcard: `_*`
    SeqRest,
    /// Or pattern: `A | B`
    Or(Vec<PatId>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

/// One case of a case-set: the pattern, where it was written, and the span of
/// its guard if it has one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Case {
    pub pattern: PatId,
    pub span: Span,
    pub guard: Option<Span>,
}

impl Case {
    pub fn new(pattern: PatId, span: Span) -> Self {
        Case {
            pattern,
            span,
            guard: None,
        }
    }

    #[must_use]
    pub fn with_guard(mut self, guard: Span) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }
}

/// Owner of every pattern of an analysis request.
#[derive(Clone, Default, Debug)]
pub struct PatternArena {
    patterns: Vec<Pattern>,
}

impl PatternArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: PatternKind, span: Span) -> PatId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "pattern counts stay far below u32::MAX"
        )]
        let id = PatId::new(self.patterns.len() as u32);
        self.patterns.push(Pattern { kind, span });
        id
    }

    pub fn get(&self, id: PatId) -> &Pattern {
        &self.patterns[id.index()]
    }

    pub fn kind(&self, id: PatId) -> &PatternKind {
        &self.get(id).kind
    }

    pub fn span(&self, id: PatId) -> Span {
        self.get(id).span
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    // === Builders ===

    pub fn wildcard(&mut self, span: Span) -> PatId {
        self.alloc(PatternKind::Wildcard, span)
    }

    pub fn binding(&mut self, name: Name, span: Span) -> PatId {
        self.alloc(PatternKind::Binding(name), span)
    }

    pub fn at(&mut self, name: Name, pattern: PatId, span: Span) -> PatId {
        self.alloc(PatternKind::At { name, pattern }, span)
    }

    pub fn typed(&mut self, pattern: PatId, ty: Idx, span: Span) -> PatId {
        self.alloc(PatternKind::Typed { pattern, ty }, span)
    }

    pub fn literal(&mut self, lit: Literal, span: Span) -> PatId {
        self.alloc(PatternKind::Literal(lit), span)
    }

    pub fn variant(&mut self, adt: AdtId, inner: Vec<PatId>, span: Span) -> PatId {
        self.alloc(PatternKind::Variant { adt, inner }, span)
    }

    pub fn extractor(&mut self, adt: AdtId, elements: Vec<PatId>, span: Span) -> PatId {
        self.alloc(PatternKind::Extractor { adt, elements }, span)
    }

    pub fn seq_rest(&mut self, span: Span) -> PatId {
        self.alloc(PatternKind::SeqRest, span)
    }

    pub fn or(&mut self, alternatives: Vec<PatId>, span: Span) -> PatId {
        self.alloc(PatternKind::Or(alternatives), span)
    }

    // === Queries ===

    /// Direct sub-patterns, in source order.
    pub fn children(&self, id: PatId) -> &[PatId] {
        match self.kind(id) {
            PatternKind::At { pattern, .. } | PatternKind::Typed { pattern, .. } => {
                std::slice::from_ref(pattern)
            }
            PatternKind::Variant { inner: children, .. }
            | PatternKind::Extractor {
                elements: children, ..
            }
            | PatternKind::Or(children) => children,
            PatternKind::Wildcard
            | PatternKind::Binding(_)
            | PatternKind::Literal(_)
            | PatternKind::SeqRest => &[],
        }
    }

    /// Skip `name @` wrappers.
    pub fn strip_at(&self, mut id: PatId) -> PatId {
        while let PatternKind::At { pattern, .. } = self.kind(id) {
            id = *pattern;
        }
        id
    }

    /// Wildcard or binding, possibly under `name @` wrappers.
    pub fn is_catch_all(&self, id: PatId) -> bool {
        matches!(
            self.kind(self.strip_at(id)),
            PatternKind::Wildcard | PatternKind::Binding(_)
        )
    }

    /// The alternatives of a top-level or pattern, flattened left to right.
    /// Any other pattern is its own single alternative.
    pub fn top_alternatives(&self, id: PatId) -> Vec<PatId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let stripped = self.strip_at(current);
            match self.kind(stripped) {
                PatternKind::Or(alternatives) => stack.extend(alternatives.iter().rev()),
                _ => out.push(stripped),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests;
