//! Usefulness over a pattern matrix.
//!
//! Rows are the cases still alive, columns the values still to be matched.
//! A column of a closed type is split into its constructors and the matrix is
//! specialized per constructor; a column of an open type keeps only the rows
//! whose head matches anything. What comes out is the list of value vectors
//! no row matches, each a [`Witness`] per column.
//!
//! Every column remembers the data types unfolded on the way to it. A column
//! whose own data type already appears that many times in its chain stops
//! the search, so only nesting of one type inside itself is bounded, never
//! the width of a row.

use smallvec::{smallvec, SmallVec};
use tracing::trace;
use unio_patterns::{PatId, PatternArena, PatternKind};
use unio_stack::ensure_sufficient_stack;
use unio_types::{AdtId, AdtKind, Idx, Tag, TypeModel};

use super::witness::Witness;
use super::Limit;
use crate::CheckConfig;

/// One matrix cell. `None` is a synthesized wildcard.
pub(super) type Cell = Option<PatId>;

pub(super) type Row = SmallVec<[Cell; 4]>;

/// A constructor of a closed type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub(super) enum Ctor {
    /// A direct subtype: a sealed child, a `bool` literal or a union member.
    /// Its single field is the value viewed at the subtype.
    Subtype(Idx),
    /// The constructor of a product type.
    Product(Idx),
    /// The only value of a module, literal or unit type.
    Singleton(Idx),
    /// Sequences of exactly this length.
    SeqExact(usize),
    /// Sequences of at least this length.
    SeqAtLeast(usize),
}

/// A value still to be matched and the data types enclosing it.
#[derive(Clone, Debug)]
pub(super) struct Column {
    ty: Idx,
    enclosing: SmallVec<[AdtId; 8]>,
}

impl Column {
    pub(super) fn root(ty: Idx) -> Self {
        Column {
            ty,
            enclosing: SmallVec::new(),
        }
    }
}

enum Split {
    Open,
    Finite(Vec<Ctor>),
}

pub(super) struct Matrix<'a, M: TypeModel + ?Sized> {
    model: &'a M,
    arena: &'a PatternArena,
    config: &'a CheckConfig,
    steps: u32,
}

impl<'a, M: TypeModel + ?Sized> Matrix<'a, M> {
    pub(super) fn new(model: &'a M, arena: &'a PatternArena, config: &'a CheckConfig) -> Self {
        Matrix {
            model,
            arena,
            config,
            steps: 0,
        }
    }

    pub(super) fn steps(&self) -> u32 {
        self.steps
    }

    /// Value vectors of the types of `cols` that no row matches.
    pub(super) fn missing(
        &mut self,
        rows: Vec<Row>,
        cols: &[Column],
    ) -> Result<Vec<Vec<Witness>>, Limit> {
        self.steps += 1;
        if self.steps > self.config.step_budget {
            return Err(Limit::StepBudget);
        }

        let Some((col, rest)) = cols.split_first() else {
            return Ok(if rows.is_empty() { vec![Vec::new()] } else { Vec::new() });
        };
        if rows.is_empty() {
            return Ok(vec![cols.iter().map(|c| Witness::Wild(c.ty)).collect()]);
        }
        let ty = col.ty;

        let rows = self.normalize(rows, ty);
        let heads: Vec<PatId> = rows.iter().filter_map(|row| row[0]).collect();
        if heads.is_empty() {
            return self.missing_default(rows, ty, rest);
        }

        match self.split(ty, &heads) {
            Split::Open => self.missing_default(rows, ty, rest),
            Split::Finite(ctors) => {
                self.check_depth(col)?;
                self.missing_ctors(&rows, col, rest, &ctors)
            }
        }
    }

    /// Only rows with a wildcard head survive a column nobody splits.
    fn missing_default(
        &mut self,
        rows: Vec<Row>,
        ty: Idx,
        rest: &[Column],
    ) -> Result<Vec<Vec<Witness>>, Limit> {
        let default: Vec<Row> = rows
            .into_iter()
            .filter(|row| row[0].is_none())
            .map(|row| SmallVec::from_slice(&row[1..]))
            .collect();
        let tails = ensure_sufficient_stack(|| self.missing(default, rest))?;
        Ok(tails
            .into_iter()
            .map(|mut tail| {
                tail.insert(0, Witness::Wild(ty));
                tail
            })
            .collect())
    }

    fn missing_ctors(
        &mut self,
        rows: &[Row],
        col: &Column,
        rest: &[Column],
        ctors: &[Ctor],
    ) -> Result<Vec<Vec<Witness>>, Limit> {
        let ty = col.ty;
        let mut enclosing = col.enclosing.clone();
        if let Some(adt) = self.model.constructor(ty) {
            enclosing.push(adt);
        }

        let mut out = Vec::new();
        for ctor in ctors {
            let field_tys = self.field_types(ty, ctor);
            let arity = field_tys.len();
            let specialized: Vec<Row> = rows
                .iter()
                .filter_map(|row| {
                    let mut next = match row[0] {
                        None => smallvec![None; arity],
                        Some(head) => self.specialize(head, ctor, arity)?,
                    };
                    next.extend_from_slice(&row[1..]);
                    Some(next)
                })
                .collect();
            trace!(?ctor, rows = specialized.len(), "specialized");

            let next_cols: Vec<Column> = field_tys
                .into_iter()
                .map(|ty| Column {
                    ty,
                    enclosing: enclosing.clone(),
                })
                .chain(rest.iter().cloned())
                .collect();
            let found = ensure_sufficient_stack(|| self.missing(specialized, &next_cols))?;
            for mut witness in found {
                let tail = witness.split_off(arity);
                let mut full = Vec::with_capacity(tail.len() + 1);
                full.push(Witness::Ctor {
                    ctor: ctor.clone(),
                    ty,
                    fields: witness,
                });
                full.extend(tail);
                out.push(full);
                if out.len() >= self.config.max_counterexamples {
                    return Ok(out);
                }
            }
        }
        Ok(out)
    }

    /// Strip bindings, expand alternatives and drop ascriptions the column
    /// type already satisfies, until every head is a refutable shape or a
    /// wildcard.
    fn normalize(&self, rows: Vec<Row>, ty: Idx) -> Vec<Row> {
        let mut out = Vec::with_capacity(rows.len());
        let mut stack: Vec<Row> = rows.into_iter().rev().collect();
        while let Some(mut row) = stack.pop() {
            let Some(head) = row[0] else {
                out.push(row);
                continue;
            };
            match self.arena.kind(head) {
                PatternKind::Wildcard | PatternKind::Binding(_) | PatternKind::SeqRest => {
                    row[0] = None;
                    out.push(row);
                }
                PatternKind::At { pattern, .. } => {
                    row[0] = Some(*pattern);
                    stack.push(row);
                }
                PatternKind::Or(alternatives) => {
                    for &alternative in alternatives.iter().rev() {
                        let mut branch = row.clone();
                        branch[0] = Some(alternative);
                        stack.push(branch);
                    }
                }
                PatternKind::Typed { pattern, ty: ascribed }
                    if self.model.is_subtype(ty, *ascribed) =>
                {
                    row[0] = Some(*pattern);
                    stack.push(row);
                }
                _ => out.push(row),
            }
        }
        out
    }

    fn split(&self, ty: Idx, heads: &[PatId]) -> Split {
        if !self.model.is_closed(ty) {
            return Split::Open;
        }
        let subtypes = self.model.known_direct_subtypes(ty);
        if !subtypes.is_empty() {
            return Split::Finite(subtypes.into_iter().map(Ctor::Subtype).collect());
        }
        if let Some(adt) = self.model.constructor(ty) {
            return Split::Finite(match self.model.adt(adt).kind {
                // Sealed with no child that can inhabit this instance.
                AdtKind::Abstract { .. } => Vec::new(),
                AdtKind::Product { .. } => vec![Ctor::Product(ty)],
                AdtKind::Module => vec![Ctor::Singleton(ty)],
                AdtKind::Sequence => self.sequence_ctors(heads),
            });
        }
        match self.model.tag(ty) {
            Tag::Never => Split::Finite(Vec::new()),
            Tag::Unit | Tag::Literal => Split::Finite(vec![Ctor::Singleton(ty)]),
            _ => Split::Open,
        }
    }

    /// Lengths `0..=max` exactly, then "longer than `max`", where `max` is the
    /// longest fixed prefix among the heads.
    fn sequence_ctors(&self, heads: &[PatId]) -> Vec<Ctor> {
        let longest = heads
            .iter()
            .filter_map(|&head| match self.arena.kind(head) {
                PatternKind::Extractor { elements, .. } => {
                    Some(self.sequence_prefix(elements).0.len())
                }
                _ => None,
            })
            .max();
        match longest {
            None => vec![Ctor::SeqAtLeast(0)],
            Some(max) => (0..=max)
                .map(Ctor::SeqExact)
                .chain(std::iter::once(Ctor::SeqAtLeast(max + 1)))
                .collect(),
        }
    }

    /// Fixed elements of an extractor, and whether a trailing `_*` follows.
    fn sequence_prefix<'p>(&self, elements: &'p [PatId]) -> (&'p [PatId], bool) {
        match elements.split_last() {
            Some((&last, prefix))
                if matches!(self.arena.kind(self.arena.strip_at(last)), PatternKind::SeqRest) =>
            {
                (prefix, true)
            }
            _ => (elements, false),
        }
    }

    fn field_types(&self, ty: Idx, ctor: &Ctor) -> Vec<Idx> {
        match ctor {
            Ctor::Subtype(sub) => vec![*sub],
            Ctor::Product(product) => self.model.fields(*product).iter().map(|f| f.ty).collect(),
            Ctor::Singleton(_) => Vec::new(),
            Ctor::SeqExact(len) | Ctor::SeqAtLeast(len) => {
                let elem = self.model.type_args(ty).first().copied().unwrap_or(Idx::ANY);
                vec![elem; *len]
            }
        }
    }

    /// The fields `head` contributes under `ctor`, or `None` when the head
    /// cannot match a value built by `ctor`.
    fn specialize(&self, head: PatId, ctor: &Ctor, arity: usize) -> Option<Row> {
        let model = self.model;
        match (self.arena.kind(head), ctor) {
            (PatternKind::Typed { pattern, ty: ascribed }, Ctor::Subtype(sub)) => {
                if model.is_subtype(*sub, *ascribed) {
                    Some(smallvec![Some(*pattern)])
                } else if self.overlaps(*ascribed, *sub) {
                    Some(smallvec![Some(head)])
                } else {
                    None
                }
            }
            (PatternKind::Literal(lit), Ctor::Subtype(sub)) => {
                model.is_subtype(model.literal(*lit), *sub).then(|| smallvec![Some(head)])
            }
            (PatternKind::Literal(lit), Ctor::Singleton(single)) => {
                (model.literal(*lit) == *single).then(SmallVec::new)
            }
            (
                PatternKind::Variant { adt, .. } | PatternKind::Extractor { adt, .. },
                Ctor::Subtype(sub),
            ) => model
                .constructor(*sub)
                .filter(|&sub_adt| model.is_descendant(*adt, sub_adt))
                .map(|_| smallvec![Some(head)]),
            (
                PatternKind::Variant { adt, inner } | PatternKind::Extractor { adt, elements: inner },
                Ctor::Product(product),
            ) => {
                (model.constructor(*product) == Some(*adt) && inner.len() == arity)
                    .then(|| inner.iter().map(|&p| Some(p)).collect())
            }
            (PatternKind::Variant { adt, .. }, Ctor::Singleton(single)) => {
                (model.constructor(*single) == Some(*adt)).then(SmallVec::new)
            }
            (PatternKind::Extractor { elements, .. }, Ctor::SeqExact(len)) => {
                let (prefix, open) = self.sequence_prefix(elements);
                let fits = if open { prefix.len() <= *len } else { prefix.len() == *len };
                fits.then(|| padded(prefix, *len))
            }
            (PatternKind::Extractor { elements, .. }, Ctor::SeqAtLeast(len)) => {
                let (prefix, open) = self.sequence_prefix(elements);
                (open && prefix.len() <= *len).then(|| padded(prefix, *len))
            }
            _ => None,
        }
    }

    /// Whether some value of `sub` may also be an `ascribed`.
    fn overlaps(&self, ascribed: Idx, sub: Idx) -> bool {
        let model = self.model;
        if model.is_subtype(ascribed, sub) {
            return true;
        }
        match (model.constructor(ascribed), model.constructor(sub)) {
            (Some(a), Some(s)) => model.is_descendant(a, s),
            _ => false,
        }
    }

    /// Fail when the column's data type already encloses it too often.
    fn check_depth(&self, col: &Column) -> Result<(), Limit> {
        let Some(adt) = self.model.constructor(col.ty) else {
            return Ok(());
        };
        let depth = col.enclosing.iter().filter(|&&outer| outer == adt).count();
        if depth >= self.config.max_unfold_depth as usize {
            return Err(Limit::UnfoldDepth(col.ty));
        }
        Ok(())
    }
}

fn padded(prefix: &[PatId], len: usize) -> Row {
    let mut row: Row = prefix.iter().map(|&p| Some(p)).collect();
    row.resize(len, None);
    row
}
