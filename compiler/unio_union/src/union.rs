//! The flattened union value.

use smallvec::SmallVec;
use unio_types::{Idx, TypeModel};

/// Ordered, deduplicated members of a union. Never contains a union type.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Union {
    members: SmallVec<[Idx; 4]>,
}

impl Union {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member unless an equal one is already present.
    /// Returns whether it was added.
    pub(crate) fn push_unique(&mut self, ty: Idx) -> bool {
        if self.members.contains(&ty) {
            return false;
        }
        self.members.push(ty);
        true
    }

    pub fn members(&self) -> &[Idx] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = Idx> + '_ {
        self.members.iter().copied()
    }

    pub fn contains(&self, ty: Idx) -> bool {
        self.members.contains(&ty)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Render as `{A | B | C}`.
    pub fn render<M: TypeModel + ?Sized>(&self, model: &M) -> String {
        render_union(model, &self.members)
    }
}

impl FromIterator<Idx> for Union {
    fn from_iter<I: IntoIterator<Item = Idx>>(iter: I) -> Self {
        let mut union = Union::new();
        for ty in iter {
            union.push_unique(ty);
        }
        union
    }
}

impl<'a> IntoIterator for &'a Union {
    type Item = Idx;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Idx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter().copied()
    }
}

/// Render a list of types as a brace-delimited alternation, `{A | B}`.
pub fn render_union<M: TypeModel + ?Sized>(model: &M, members: &[Idx]) -> String {
    let mut out = String::from("{");
    for (i, &member) in members.iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        out.push_str(&model.format_type(member));
    }
    out.push('}');
    out
}
