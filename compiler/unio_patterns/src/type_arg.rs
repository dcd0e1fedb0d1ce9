//! Field-to-parameter alignment for product deconstruction.
//!
//! A field's declared type may mention a type parameter of its product
//! directly (`value: A`) or nested inside another data type
//! (`items: List[A]`, `pair: Tuple2[int, Option[A]]`). A [`TypeArg`] records
//! one such occurrence and a [`TypeArgPointer`] the argument path to it, so a
//! sub-pattern's concrete type can be projected back onto the parameter.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use unio_types::{AdtId, Idx, TypeModel};

use crate::PatternType;

/// Path of type-argument positions from a field type's root.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TypeArgPointer {
    path: SmallVec<[u32; 4]>,
}

impl TypeArgPointer {
    /// The empty path: the field type itself.
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn child(&self, index: u32) -> Self {
        let mut path = self.path.clone();
        path.push(index);
        TypeArgPointer { path }
    }

    pub fn indices(&self) -> &[u32] {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// One occurrence of a product's type parameter in one of its fields.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypeArg {
    /// Declared field position.
    pub field: usize,
    /// Position of the type parameter in the product's parameter list.
    pub param: usize,
    /// The field's type is the parameter itself.
    pub direct_match: bool,
    pub pointer: TypeArgPointer,
    /// The aligned pattern type, once a sub-pattern has been matched here.
    pub concrete: Option<PatternType>,
}

/// Type-argument occurrences of every field of `adt`, one list per field.
pub fn resolve_field_args<M: TypeModel + ?Sized>(model: &M, adt: AdtId) -> Vec<Vec<TypeArg>> {
    model
        .adt(adt)
        .fields()
        .iter()
        .enumerate()
        .map(|(field, def)| {
            let mut found = Vec::new();
            let mut stack = vec![(def.ty, TypeArgPointer::root())];
            while let Some((ty, pointer)) = stack.pop() {
                if let Some((owner, index)) = model.as_param(ty) {
                    if owner == adt {
                        found.push(TypeArg {
                            field,
                            param: index as usize,
                            direct_match: pointer.is_root(),
                            pointer,
                            concrete: None,
                        });
                    }
                    continue;
                }
                let indexed: SmallVec<[(u32, Idx); 4]> =
                    (0u32..).zip(model.type_args(ty)).collect();
                for (i, arg) in indexed.into_iter().rev() {
                    stack.push((arg, pointer.child(i)));
                }
            }
            found
        })
        .collect()
}

/// Project `concrete`, a type matched at a field declared as `declared`, onto
/// the parameter occurrence `pointer` designates.
///
/// At every step the concrete type is viewed as the declared level's data
/// type first, so `Some[int]` matched at `Option[A]` yields `int` for `A`.
/// Positions that cannot be followed yield `NO_TYPE`.
pub fn align<M: TypeModel + ?Sized>(
    model: &M,
    concrete: Idx,
    declared: Idx,
    pointer: &TypeArgPointer,
) -> Idx {
    let mut current = concrete;
    let mut level = declared;
    for &step in pointer.indices() {
        if current.is_no_type() {
            return Idx::NO_TYPE;
        }
        let Some(level_adt) = model.constructor(level) else {
            return Idx::NO_TYPE;
        };
        let Some(view) = model.upcast(current, level_adt) else {
            return Idx::NO_TYPE;
        };
        let step = step as usize;
        let (Some(&next), Some(&next_level)) =
            (model.type_args(view).get(step), model.type_args(level).get(step))
        else {
            return Idx::NO_TYPE;
        };
        current = next;
        level = next_level;
    }
    current
}

/// Resolved field alignments, computed once per product type and call.
#[derive(Default, Debug)]
pub struct FieldCache {
    resolved: FxHashMap<AdtId, Rc<[Vec<TypeArg>]>>,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_resolve<M: TypeModel + ?Sized>(
        &mut self,
        model: &M,
        adt: AdtId,
    ) -> Rc<[Vec<TypeArg>]> {
        self.resolved
            .entry(adt)
            .or_insert_with(|| resolve_field_args(model, adt).into())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}
