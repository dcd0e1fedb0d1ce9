//! Closed-world queries: direct subtypes and product fields.

use smallvec::SmallVec;
use tracing::trace;

use crate::{AdtId, AdtKind, Field, Idx, Pool, Tag, TypeData};

impl Pool {
    /// The known direct subtypes of `ty`, instantiated against it.
    ///
    /// Non-empty only for closed types: `bool` splits into its two literals,
    /// a union into its members and a sealed type into the children that can
    /// inhabit the given instance. Children whose instantiation does not
    /// conform to `ty` are unreachable and skipped.
    pub fn known_direct_subtypes(&self, ty: Idx) -> Vec<Idx> {
        match self.data(ty) {
            TypeData::Primitive(Tag::Bool) => vec![self.bool_lit(true), self.bool_lit(false)],
            TypeData::Union(..) => self.flatten_union(ty),
            TypeData::Adt { adt, .. } if self.adt(adt).is_sealed() => {
                let children = self.adt(adt).children.clone();
                children
                    .into_iter()
                    .filter_map(|child| {
                        let instance = self.instantiate_child(child, ty);
                        if instance.is_none() {
                            trace!(child = self.lookup(self.adt(child).name), "unreachable child");
                        }
                        instance
                    })
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Whether every value of `ty` is described by a finite set of shapes:
    /// sealed hierarchies, products, singletons, sequences, `bool`, unit,
    /// literals, unions and `never`.
    pub fn is_closed(&self, ty: Idx) -> bool {
        match self.data(ty) {
            TypeData::Primitive(tag) => matches!(tag, Tag::Bool | Tag::Unit | Tag::Never),
            TypeData::Literal(_) | TypeData::Union(..) => true,
            TypeData::Adt { adt, .. } => !matches!(self.adt(adt).kind, AdtKind::Abstract { sealed: false }),
            TypeData::Param { .. } => false,
        }
    }

    /// Members of a (possibly nested) union, left to right, without duplicates.
    pub fn flatten_union(&self, ty: Idx) -> Vec<Idx> {
        let mut out = Vec::new();
        let mut stack = vec![ty];
        while let Some(current) = stack.pop() {
            match self.as_union(current) {
                Some((a, b)) => {
                    stack.push(b);
                    stack.push(a);
                }
                None => {
                    if !out.contains(&current) {
                        out.push(current);
                    }
                }
            }
        }
        out
    }

    /// Instantiate `child` so that it conforms to `target`.
    ///
    /// Parameters of the child are solved by matching its view as the
    /// target's data type against the target's arguments; parameters left
    /// unconstrained become `any`. Returns `None` when no instance of the
    /// child can be a `target`.
    pub fn instantiate_child(&self, child: AdtId, target: Idx) -> Option<Idx> {
        let (target_adt, target_args) = self.as_adt(target)?;
        let arity = self.adt(child).arity();
        let candidate = if arity == 0 {
            self.apply(child, &[])
        } else {
            let generic = self.generic_self(child);
            let viewed = self.upcast(generic, target_adt)?;
            let mut bindings: SmallVec<[Option<Idx>; 4]> = SmallVec::from_elem(None, arity);
            for (&pattern, &actual) in self.type_args(viewed).iter().zip(&target_args) {
                self.bind_params(pattern, actual, child, &mut bindings);
            }
            let args: SmallVec<[Idx; 4]> = bindings.iter().map(|b| b.unwrap_or(Idx::ANY)).collect();
            self.apply(child, &args)
        };
        self.is_subtype(candidate, target).then_some(candidate)
    }

    fn bind_params(&self, pattern: Idx, actual: Idx, owner: AdtId, bindings: &mut [Option<Idx>]) {
        match (self.data(pattern), self.data(actual)) {
            (TypeData::Param { owner: o, index }, _) if o == owner => {
                if let Some(slot) = bindings.get_mut(index as usize) {
                    *slot = Some(match *slot {
                        Some(existing) => self.lub(existing, actual),
                        None => actual,
                    });
                }
            }
            (TypeData::Adt { adt: p, args: p_args }, TypeData::Adt { adt: a, args: a_args }) if p == a => {
                for (&pa, &aa) in p_args.iter().zip(&a_args) {
                    self.bind_params(pa, aa, owner, bindings);
                }
            }
            _ => {}
        }
    }

    /// Fields of an applied product type with its arguments substituted.
    pub fn fields(&self, ty: Idx) -> Vec<Field> {
        let Some((adt, args)) = self.as_adt(ty) else {
            return Vec::new();
        };
        self.adt(adt)
            .fields()
            .iter()
            .map(|field| Field {
                name: field.name,
                ty: self.substitute(field.ty, adt, &args),
            })
            .collect()
    }
}
