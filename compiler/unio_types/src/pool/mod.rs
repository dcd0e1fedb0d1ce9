//! Unified type storage.
//!
//! The pool owns every type the analysis touches together with the registry
//! of declared data types. Types are hash-consed: interning identical data
//! twice yields the same [`Idx`].
//!
//! Interning goes through a `RwLock` so that every query, including those
//! that must build new types (substitution, least upper bounds), takes
//! `&self`. Guards are never held across calls back into the pool.

mod construct;
mod format;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use unio_ir::{Name, StringInterner};

use crate::{AdtDef, AdtId, Idx, Literal, Prelude, Tag, TypeData, TypeFlags};

#[derive(Default)]
struct TypeTable {
    items: Vec<TypeData>,
    flags: Vec<TypeFlags>,
    map: FxHashMap<TypeData, Idx>,
}

/// Type pool and data type registry.
pub struct Pool {
    types: RwLock<TypeTable>,
    adts: Vec<AdtDef>,
    interner: StringInterner,
    prelude: Prelude,
}

impl Pool {
    /// Create a pool with the primitives pre-interned and the prelude types
    /// (`Option`, `Either`, `Tuple2`, `List`) registered.
    pub fn new() -> Self {
        let mut table = TypeTable::default();
        let primitives = [
            Tag::Never,
            Tag::Any,
            Tag::NoType,
            Tag::Int,
            Tag::Float,
            Tag::Bool,
            Tag::Str,
            Tag::Char,
            Tag::Unit,
        ];
        for (raw, tag) in (0u32..).zip(primitives) {
            let idx = Idx::from_raw(raw);
            let data = TypeData::Primitive(tag);
            table.items.push(data.clone());
            table.flags.push(TypeFlags::primitive(idx));
            table.map.insert(data, idx);
        }
        debug_assert_eq!(table.items.len(), Idx::PRIMITIVE_COUNT as usize);

        let mut pool = Pool {
            types: RwLock::new(table),
            adts: Vec::new(),
            interner: StringInterner::new(),
            prelude: Prelude::PLACEHOLDER,
        };
        pool.prelude = Prelude::register(&mut pool);
        pool
    }

    /// Intern type data, returning the existing handle when already present.
    pub(crate) fn intern(&self, data: TypeData) -> Idx {
        if let Some(&idx) = self.types.read().map.get(&data) {
            return idx;
        }
        let flags = self.compute_flags(&data);
        let mut table = self.types.write();
        if let Some(&idx) = table.map.get(&data) {
            return idx;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "type counts stay far below u32::MAX"
        )]
        let idx = Idx::from_raw(table.items.len() as u32);
        table.items.push(data.clone());
        table.flags.push(flags);
        table.map.insert(data, idx);
        idx
    }

    fn compute_flags(&self, data: &TypeData) -> TypeFlags {
        let mut flags = TypeFlags::for_tag(data.tag());
        match data {
            TypeData::Union(a, b) => {
                flags |= self.flags(*a).propagated() | self.flags(*b).propagated();
            }
            TypeData::Adt { args, .. } => {
                for &arg in args {
                    flags |= self.flags(arg).propagated();
                }
            }
            TypeData::Primitive(_) | TypeData::Literal(_) | TypeData::Param { .. } => {}
        }
        flags
    }

    // === Queries ===

    /// Structural data of a type, cloned out of the table.
    pub fn data(&self, idx: Idx) -> TypeData {
        self.types.read().items[idx.raw() as usize].clone()
    }

    pub fn tag(&self, idx: Idx) -> Tag {
        self.types.read().items[idx.raw() as usize].tag()
    }

    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.types.read().flags[idx.raw() as usize]
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.types.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The two halves of a binary union.
    pub fn as_union(&self, idx: Idx) -> Option<(Idx, Idx)> {
        match self.data(idx) {
            TypeData::Union(a, b) => Some((a, b)),
            _ => None,
        }
    }

    /// The literal held by a singleton literal type.
    pub fn as_literal(&self, idx: Idx) -> Option<Literal> {
        match self.data(idx) {
            TypeData::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The data type and arguments of an applied data type.
    pub fn as_adt(&self, idx: Idx) -> Option<(AdtId, SmallVec<[Idx; 4]>)> {
        match self.data(idx) {
            TypeData::Adt { adt, args } => Some((adt, args)),
            _ => None,
        }
    }

    /// Owner and position of a type parameter.
    pub fn as_param(&self, idx: Idx) -> Option<(AdtId, u32)> {
        match self.data(idx) {
            TypeData::Param { owner, index } => Some((owner, index)),
            _ => None,
        }
    }

    /// The data type constructor of a type, if it has one.
    pub fn constructor(&self, idx: Idx) -> Option<AdtId> {
        match self.data(idx) {
            TypeData::Adt { adt, .. } => Some(adt),
            _ => None,
        }
    }

    /// Type arguments of an applied data type, empty otherwise.
    pub fn type_args(&self, idx: Idx) -> SmallVec<[Idx; 4]> {
        match self.data(idx) {
            TypeData::Adt { args, .. } => args,
            _ => SmallVec::new(),
        }
    }

    pub fn adt(&self, id: AdtId) -> &AdtDef {
        &self.adts[id.index()]
    }

    /// Iterate over every declared data type.
    pub fn adts(&self) -> impl Iterator<Item = (AdtId, &AdtDef)> {
        (0u32..).zip(&self.adts).map(|(raw, def)| (AdtId::from_raw(raw), def))
    }

    pub(crate) fn adt_mut(&mut self, id: AdtId) -> &mut AdtDef {
        &mut self.adts[id.index()]
    }

    pub(crate) fn push_adt(&mut self, def: AdtDef) -> AdtId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "data type counts stay far below u32::MAX"
        )]
        let id = AdtId::from_raw(self.adts.len() as u32);
        self.adts.push(def);
        id
    }

    /// Look up a declared data type by name.
    pub fn adt_named(&self, name: &str) -> Option<AdtId> {
        self.adts()
            .find(|(_, def)| self.interner.lookup(def.name) == name)
            .map(|(id, _)| id)
    }

    pub fn prelude(&self) -> &Prelude {
        &self.prelude
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Intern a string through the pool's interner.
    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Resolve an interned name.
    pub fn lookup(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("types", &self.len())
            .field("adts", &self.adts.len())
            .finish_non_exhaustive()
    }
}
