//! Type construction and data type declaration.

use smallvec::SmallVec;
use tracing::trace;

use crate::{AdtDef, AdtId, AdtKind, FieldDef, Idx, Literal, Pool, TypeData, TypeParam, Variance};

impl Pool {
    // === Type Constructors ===

    /// The singleton type of a literal. The unit literal is the unit type.
    pub fn literal(&self, lit: Literal) -> Idx {
        match lit {
            Literal::Unit => Idx::UNIT,
            lit => self.intern(TypeData::Literal(lit)),
        }
    }

    pub fn int_lit(&self, value: i64) -> Idx {
        self.literal(Literal::Int(value))
    }

    pub fn bool_lit(&self, value: bool) -> Idx {
        self.literal(Literal::Bool(value))
    }

    pub fn str_lit(&self, value: &str) -> Idx {
        self.literal(Literal::Str(self.name(value)))
    }

    /// The binary union `a | b`. `never` is its identity.
    pub fn union(&self, a: Idx, b: Idx) -> Idx {
        if a == b || b.is_never() {
            return a;
        }
        if a.is_never() {
            return b;
        }
        self.intern(TypeData::Union(a, b))
    }

    /// Left-nested union of several types; `never` for an empty slice.
    pub fn union_of(&self, members: &[Idx]) -> Idx {
        members
            .iter()
            .copied()
            .reduce(|acc, ty| self.union(acc, ty))
            .unwrap_or(Idx::NEVER)
    }

    /// A data type applied to arguments.
    pub fn apply(&self, adt: AdtId, args: &[Idx]) -> Idx {
        debug_assert_eq!(
            args.len(),
            self.adt(adt).arity(),
            "wrong number of type arguments for {}",
            self.lookup(self.adt(adt).name)
        );
        self.intern(TypeData::Adt {
            adt,
            args: SmallVec::from_slice(args),
        })
    }

    /// The `index`-th type parameter of `owner`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "parameter lists are tiny"
    )]
    pub fn param(&self, owner: AdtId, index: usize) -> Idx {
        self.intern(TypeData::Param {
            owner,
            index: index as u32,
        })
    }

    /// A data type applied to its own parameters, e.g. `Some[A]`.
    pub fn generic_self(&self, adt: AdtId) -> Idx {
        let args: SmallVec<[Idx; 4]> = (0..self.adt(adt).arity())
            .map(|i| self.param(adt, i))
            .collect();
        self.apply(adt, &args)
    }

    /// Replace the parameters of `owner` in `ty` by `args`.
    pub fn substitute(&self, ty: Idx, owner: AdtId, args: &[Idx]) -> Idx {
        if !self.flags(ty).has_params() {
            return ty;
        }
        unio_stack::ensure_sufficient_stack(|| match self.data(ty) {
            TypeData::Param { owner: o, index } if o == owner => {
                args.get(index as usize).copied().unwrap_or(Idx::ANY)
            }
            TypeData::Union(a, b) => {
                let a = self.substitute(a, owner, args);
                let b = self.substitute(b, owner, args);
                self.union(a, b)
            }
            TypeData::Adt { adt, args: inner } => {
                let inner: SmallVec<[Idx; 4]> = inner
                    .iter()
                    .map(|&arg| self.substitute(arg, owner, args))
                    .collect();
                self.apply(adt, &inner)
            }
            TypeData::Primitive(_) | TypeData::Literal(_) | TypeData::Param { .. } => ty,
        })
    }

    // === Declarations ===

    fn declare(&mut self, name: &str, params: &[(&str, Variance)], kind: AdtKind) -> AdtId {
        let name = self.name(name);
        let params = params
            .iter()
            .map(|&(param, variance)| TypeParam {
                name: self.name(param),
                variance,
            })
            .collect();
        let id = self.push_adt(AdtDef {
            name,
            params,
            kind,
            parents: Vec::new(),
            children: Vec::new(),
        });
        trace!(adt = self.lookup(name), "declared data type");
        id
    }

    /// Declare an abstract type. Only sealed ones are closed for analysis.
    pub fn declare_abstract(
        &mut self,
        name: &str,
        params: &[(&str, Variance)],
        sealed: bool,
    ) -> AdtId {
        self.declare(name, params, AdtKind::Abstract { sealed })
    }

    /// Declare a product type. Fields are added with [`Pool::define_fields`]
    /// once the parameters exist.
    pub fn declare_product(&mut self, name: &str, params: &[(&str, Variance)]) -> AdtId {
        self.declare(name, params, AdtKind::Product { fields: Vec::new() })
    }

    /// Declare a singleton module.
    pub fn declare_module(&mut self, name: &str) -> AdtId {
        self.declare(name, &[], AdtKind::Module)
    }

    /// Declare a sequence type over one element parameter.
    pub fn declare_sequence(&mut self, name: &str, elem: (&str, Variance)) -> AdtId {
        self.declare(name, &[elem], AdtKind::Sequence)
    }

    /// Set the fields of a product type.
    pub fn define_fields(&mut self, adt: AdtId, fields: &[(&str, Idx)]) {
        let fields: Vec<FieldDef> = fields
            .iter()
            .map(|&(name, ty)| FieldDef {
                name: self.name(name),
                ty,
            })
            .collect();
        if let AdtKind::Product { fields: slot } = &mut self.adt_mut(adt).kind {
            *slot = fields;
        }
    }

    /// Record that `child` extends `parent`, a type written in terms of the
    /// child's parameters. The child is appended to the parent's children.
    pub fn extend(&mut self, child: AdtId, parent: Idx) {
        self.adt_mut(child).parents.push(parent);
        if let Some(parent_adt) = self.constructor(parent) {
            let children = &mut self.adt_mut(parent_adt).children;
            if !children.contains(&child) {
                children.push(child);
            }
        }
    }
}
