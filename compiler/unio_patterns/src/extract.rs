//! Pattern-type extraction.
//!
//! The walk is iterative: an explicit frame stack visits every pattern twice
//! (enter, then exit once its children are done) and a value stack
//! accumulates each sub-pattern's results in source order.

use smallvec::SmallVec;
use tracing::{debug, trace};
use unio_types::{AdtId, AdtKind, Idx, TypeModel};

use crate::{align, ExtractError, FieldCache, PatId, PatternArena, PatternKind, PatternType, TypeArg};

/// Cap on the witness cross product of one constructor pattern. Larger
/// products collapse to the constructor's own type.
const DEFAULT_MAX_WITNESSES: usize = 64;

enum Frame {
    Enter(PatId),
    Exit(PatId),
}

/// Reduces patterns to [`PatternType`]s against a host type model.
pub struct PatternTypeExtractor<'a, M: TypeModel + ?Sized> {
    model: &'a M,
    arena: &'a PatternArena,
    fields: FieldCache,
    max_witnesses: usize,
}

impl<'a, M: TypeModel + ?Sized> PatternTypeExtractor<'a, M> {
    pub fn new(model: &'a M, arena: &'a PatternArena) -> Self {
        Self::with_cache(model, arena, FieldCache::new())
    }

    pub fn with_cache(model: &'a M, arena: &'a PatternArena, fields: FieldCache) -> Self {
        PatternTypeExtractor {
            model,
            arena,
            fields,
            max_witnesses: DEFAULT_MAX_WITNESSES,
        }
    }

    #[must_use]
    pub fn with_max_witnesses(mut self, limit: usize) -> Self {
        self.max_witnesses = limit.max(1);
        self
    }

    pub fn into_cache(self) -> FieldCache {
        self.fields
    }

    pub fn arena(&self) -> &'a PatternArena {
        self.arena
    }

    /// Every `PatternType` of a pattern. More than one only when the pattern
    /// is an alternation at the top.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn extract(&mut self, root: PatId) -> Result<Vec<PatternType>, ExtractError> {
        let arena = self.arena;
        if matches!(arena.kind(arena.strip_at(root)), PatternKind::SeqRest) {
            return Err(seq_rest_misplaced(arena.span(root)));
        }

        let mut work = vec![Frame::Enter(root)];
        let mut values: Vec<Vec<PatternType>> = Vec::new();
        while let Some(frame) = work.pop() {
            match frame {
                Frame::Enter(id) => self.enter(id, &mut work, &mut values)?,
                Frame::Exit(id) => {
                    let arity = arena.children(id).len();
                    let start = values
                        .len()
                        .checked_sub(arity)
                        .ok_or(ExtractError::Malformed { span: arena.span(id) })?;
                    let children = values.split_off(start);
                    let combined = self.combine(id, children)?;
                    trace!(pattern = ?id, results = combined.len(), "combined");
                    values.push(combined);
                }
            }
        }

        match (values.pop(), values.is_empty()) {
            (Some(result), true) => Ok(result),
            _ => Err(ExtractError::Malformed {
                span: arena.span(root),
            }),
        }
    }

    /// Extract each top-level alternative separately, pairing every result
    /// with the alternative that produced it.
    pub fn extract_alternatives(
        &mut self,
        root: PatId,
    ) -> Result<Vec<(PatId, PatternType)>, ExtractError> {
        let mut out = Vec::new();
        for alternative in self.arena.top_alternatives(root) {
            for pattern_type in self.extract(alternative)? {
                out.push((alternative, pattern_type));
            }
        }
        debug!(pattern = ?root, results = out.len(), "extracted pattern types");
        Ok(out)
    }

    fn enter(
        &mut self,
        id: PatId,
        work: &mut Vec<Frame>,
        values: &mut Vec<Vec<PatternType>>,
    ) -> Result<(), ExtractError> {
        let arena = self.arena;
        match arena.kind(id) {
            PatternKind::Wildcard | PatternKind::Binding(_) | PatternKind::SeqRest => {
                values.push(vec![PatternType::catch_all()]);
            }
            PatternKind::At { pattern, .. } => work.push(Frame::Enter(*pattern)),
            PatternKind::Typed { pattern, ty } => {
                if arena.is_catch_all(*pattern) {
                    values.push(vec![PatternType::ascription(*ty)]);
                } else {
                    work.push(Frame::Exit(id));
                    work.push(Frame::Enter(*pattern));
                }
            }
            PatternKind::Literal(lit) => {
                let ty = self.model.literal(*lit);
                values.push(vec![PatternType::literal(ty)]);
            }
            PatternKind::Or(alternatives) if alternatives.is_empty() => {
                return Err(ExtractError::unsupported(
                    "empty alternation",
                    arena.span(id),
                ));
            }
            PatternKind::Variant { .. } | PatternKind::Extractor { .. } | PatternKind::Or(_) => {
                self.check_seq_rest(id)?;
                work.push(Frame::Exit(id));
                work.extend(arena.children(id).iter().rev().map(|&child| Frame::Enter(child)));
            }
        }
        Ok(())
    }

    /// `_*` may only close the element list of a sequence extractor.
    fn check_seq_rest(&self, id: PatId) -> Result<(), ExtractError> {
        let arena = self.arena;
        let allows_rest = match arena.kind(id) {
            PatternKind::Extractor { adt, .. } => self.model.adt(*adt).is_sequence(),
            _ => false,
        };
        let children = arena.children(id);
        for (i, &child) in children.iter().enumerate() {
            let is_rest = matches!(arena.kind(arena.strip_at(child)), PatternKind::SeqRest);
            if is_rest && !(allows_rest && i + 1 == children.len()) {
                return Err(seq_rest_misplaced(arena.span(child)));
            }
        }
        Ok(())
    }

    fn combine(
        &mut self,
        id: PatId,
        children: Vec<Vec<PatternType>>,
    ) -> Result<Vec<PatternType>, ExtractError> {
        let arena = self.arena;
        let span = arena.span(id);
        match arena.kind(id) {
            PatternKind::Or(_) => Ok(children.into_iter().flatten().collect()),
            PatternKind::Typed { ty, .. } => Ok(children
                .into_iter()
                .flatten()
                .map(|sub| self.reproject(sub, *ty))
                .collect()),
            PatternKind::Extractor { adt, .. } => {
                let def = self.model.adt(*adt);
                if def.arity() != 1 {
                    return Err(ExtractError::unsupported(
                        format!(
                            "extractor `{}` has {} type parameters; only single-parameter extractors are supported",
                            self.model.lookup(def.name),
                            def.arity()
                        ),
                        span,
                    ));
                }
                Ok(vec![self.combine_extractor(*adt, &children)])
            }
            PatternKind::Variant { adt, .. } => {
                self.combine_variant(*adt, &children, span).map(|p| vec![p])
            }
            PatternKind::Wildcard
            | PatternKind::Binding(_)
            | PatternKind::At { .. }
            | PatternKind::Literal(_)
            | PatternKind::SeqRest => Err(ExtractError::Malformed { span }),
        }
    }

    /// `C(p1, .., pn)` for a single-parameter `C`: `C[lub(pts)]`, with
    /// witnesses re-wrapped per combination of sub-witnesses.
    fn combine_extractor(&self, adt: AdtId, children: &[Vec<PatternType>]) -> PatternType {
        if children.is_empty() {
            let empty = self.model.apply(adt, &[Idx::NEVER]);
            return PatternType::new(empty, vec![empty]);
        }
        let elem = self.lub_all(children.iter().flatten().map(|p| p.pt));
        let pt = self.model.apply(adt, &[self.model.widen(elem)]);

        let lists: Vec<Vec<Idx>> = children.iter().map(|list| witnesses(list)).collect();
        let expr = match self.cross(&lists) {
            Some(combos) => dedup(
                combos
                    .iter()
                    .map(|combo| self.model.apply(adt, &[self.lub_all(combo.iter().copied())])),
            ),
            None => vec![pt],
        };
        PatternType::new(pt, expr)
    }

    fn combine_variant(
        &mut self,
        adt: AdtId,
        children: &[Vec<PatternType>],
        span: unio_ir::Span,
    ) -> Result<PatternType, ExtractError> {
        let model = self.model;
        let def = model.adt(adt);
        let name = model.lookup(def.name);
        match &def.kind {
            AdtKind::Module => {
                if !children.is_empty() {
                    return Err(ExtractError::unsupported(
                        format!("`{name}` is a singleton and takes no sub-patterns"),
                        span,
                    ));
                }
                let args: SmallVec<[Idx; 4]> = SmallVec::from_elem(Idx::NO_TYPE, def.arity());
                let pt = model.apply(adt, &args);
                Ok(PatternType::new(pt, vec![pt]))
            }
            AdtKind::Product { fields } => {
                if fields.len() != children.len() {
                    return Err(ExtractError::unsupported(
                        format!(
                            "`{name}` has {} fields but the pattern deconstructs {}",
                            fields.len(),
                            children.len()
                        ),
                        span,
                    ));
                }
                let field_args = self.fields.get_or_resolve(model, adt);
                let field_pts: Vec<PatternType> = children
                    .iter()
                    .map(|list| PatternType::new(self.lub_all(list.iter().map(|p| p.pt)), witnesses(list)))
                    .collect();

                let aligned = self.align_fields(adt, &field_args, &field_pts, true);
                trace!(adt = name, ?aligned, "aligned fields");
                let pt = self.apply_aligned(adt, &aligned);

                let lists: Vec<Vec<Idx>> = field_pts.iter().map(|p| p.expr.clone()).collect();
                let expr = match self.cross(&lists) {
                    Some(combos) => dedup(combos.iter().map(|combo| {
                        let singles: Vec<PatternType> =
                            combo.iter().map(|&w| PatternType::new(w, vec![w])).collect();
                        let aligned = self.align_fields(adt, &field_args, &singles, false);
                        self.apply_aligned(adt, &aligned)
                    })),
                    None => vec![pt],
                };
                Ok(PatternType::new(pt, expr))
            }
            AdtKind::Abstract { .. } | AdtKind::Sequence => Err(ExtractError::unsupported(
                format!("`{name}` cannot be deconstructed; only products and singletons have constructor patterns"),
                span,
            )),
        }
    }

    /// Project every field's pattern type onto the parameter occurrences of
    /// that field.
    fn align_fields(
        &self,
        adt: AdtId,
        field_args: &[Vec<TypeArg>],
        field_pts: &[PatternType],
        widen: bool,
    ) -> Vec<TypeArg> {
        let declared = self.model.adt(adt).fields();
        field_args
            .iter()
            .flatten()
            .filter_map(|arg| {
                let field = declared.get(arg.field)?;
                let matched = field_pts.get(arg.field)?;
                let mut ty = align(self.model, matched.pt, field.ty, &arg.pointer);
                if widen {
                    ty = self.model.widen(ty);
                }
                Some(TypeArg {
                    concrete: Some(PatternType::new(ty, matched.expr.clone())),
                    ..arg.clone()
                })
            })
            .collect()
    }

    /// Apply `adt` to the join of everything aligned onto each parameter;
    /// parameters nothing was aligned onto stay `NO_TYPE`.
    fn apply_aligned(&self, adt: AdtId, aligned: &[TypeArg]) -> Idx {
        let mut bindings: SmallVec<[Option<Idx>; 4]> =
            SmallVec::from_elem(None, self.model.adt(adt).arity());
        for arg in aligned {
            let (Some(concrete), Some(slot)) = (&arg.concrete, bindings.get_mut(arg.param)) else {
                continue;
            };
            *slot = Some(match *slot {
                Some(existing) => self.model.lub(existing, concrete.pt),
                None => concrete.pt,
            });
        }
        let args: SmallVec<[Idx; 4]> = bindings
            .iter()
            .map(|binding| binding.unwrap_or(Idx::NO_TYPE))
            .collect();
        self.model.apply(adt, &args)
    }

    /// `sub : ty` where `sub` deconstructs: keep the narrower of the two,
    /// filling positions `sub` left open from `ty`, and put `ty` first among
    /// the witnesses.
    fn reproject(&self, sub: PatternType, ty: Idx) -> PatternType {
        let pt = self.reproject_type(sub.pt, ty);
        let mut expr = Vec::with_capacity(sub.expr.len() + 1);
        expr.push(ty);
        expr.extend(sub.expr);
        PatternType::new(pt, expr)
    }

    fn reproject_type(&self, inner: Idx, ty: Idx) -> Idx {
        let model = self.model;
        if inner.is_no_type() {
            return ty;
        }
        if let (Some(inner_adt), Some(ty_adt)) = (model.constructor(inner), model.constructor(ty)) {
            if model.is_descendant(inner_adt, ty_adt) {
                let instance = if inner_adt == ty_adt {
                    Some(ty)
                } else {
                    model.instantiate_child(inner_adt, ty)
                };
                let Some(instance) = instance else {
                    return inner;
                };
                let merged: SmallVec<[Idx; 4]> = model
                    .type_args(inner)
                    .iter()
                    .zip(model.type_args(instance).iter())
                    .map(|(&a, &b)| if a.is_no_type() { b } else { a })
                    .collect();
                return model.apply(inner_adt, &merged);
            }
        }
        if model.is_subtype(inner, ty) || !model.is_subtype(ty, inner) {
            inner
        } else {
            ty
        }
    }

    fn lub_all(&self, types: impl IntoIterator<Item = Idx>) -> Idx {
        types
            .into_iter()
            .reduce(|acc, ty| self.model.lub(acc, ty))
            .unwrap_or(Idx::NEVER)
    }

    /// Every combination picking one entry per list, or `None` when there
    /// are more than the witness cap.
    fn cross(&self, lists: &[Vec<Idx>]) -> Option<Vec<SmallVec<[Idx; 4]>>> {
        let total = lists
            .iter()
            .try_fold(1usize, |acc, list| acc.checked_mul(list.len()))?;
        if total > self.max_witnesses {
            return None;
        }
        let mut combos: Vec<SmallVec<[Idx; 4]>> = vec![SmallVec::new()];
        for list in lists {
            combos = combos
                .iter()
                .flat_map(|prefix| {
                    list.iter().map(move |&w| {
                        let mut next = prefix.clone();
                        next.push(w);
                        next
                    })
                })
                .collect();
        }
        Some(combos)
    }
}

/// Witnesses of a sub-pattern list; an ascription stands for its own type.
fn witnesses(list: &[PatternType]) -> Vec<Idx> {
    list.iter()
        .flat_map(|p| {
            if p.expr.is_empty() {
                std::slice::from_ref(&p.pt)
            } else {
                p.expr.as_slice()
            }
        })
        .copied()
        .collect()
}

fn dedup(types: impl Iterator<Item = Idx>) -> Vec<Idx> {
    let mut out: Vec<Idx> = Vec::new();
    for ty in types {
        if !out.contains(&ty) {
            out.push(ty);
        }
    }
    out
}

fn seq_rest_misplaced(span: unio_ir::Span) -> ExtractError {
    ExtractError::unsupported(
        "`_*` is only allowed as the last element of a sequence extractor",
        span,
    )
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
