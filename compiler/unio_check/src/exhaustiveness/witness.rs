//! Uncovered values and how they are shown to the user.

use unio_types::{AdtKind, Idx, TypeModel};

use super::usefulness::Ctor;

/// A value shape no case matches.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub(super) enum Witness {
    /// Any value of the type.
    Wild(Idx),
    /// A value built by `ctor` at type `ty`.
    Ctor {
        ctor: Ctor,
        ty: Idx,
        fields: Vec<Witness>,
    },
}

/// Render a witness the way the user would write the missing pattern:
/// `None`, `Some(_)`, `Leaf(_, false)`, `List(_, _*)`, `_`.
pub(super) fn render<M: TypeModel + ?Sized>(model: &M, witness: &Witness) -> String {
    let mut buf = String::new();
    render_into(model, witness, &mut buf);
    buf
}

fn render_into<M: TypeModel + ?Sized>(model: &M, witness: &Witness, buf: &mut String) {
    let Witness::Ctor { ctor, ty, fields } = witness else {
        buf.push('_');
        return;
    };
    match ctor {
        Ctor::Subtype(sub) => match fields.first() {
            Some(field @ Witness::Ctor { .. }) => render_into(model, field, buf),
            _ => describe_into(model, *sub, buf),
        },
        Ctor::Product(product) => {
            buf.push_str(&constructor_name(model, *product));
            render_fields(model, fields, false, buf);
        }
        Ctor::Singleton(single) => buf.push_str(&singleton_name(model, *single)),
        Ctor::SeqExact(_) => {
            buf.push_str(&constructor_name(model, *ty));
            render_fields(model, fields, false, buf);
        }
        Ctor::SeqAtLeast(_) => {
            buf.push_str(&constructor_name(model, *ty));
            render_fields(model, fields, true, buf);
        }
    }
}

fn render_fields<M: TypeModel + ?Sized>(
    model: &M,
    fields: &[Witness],
    open: bool,
    buf: &mut String,
) {
    buf.push('(');
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        render_into(model, field, buf);
    }
    if open {
        if !fields.is_empty() {
            buf.push_str(", ");
        }
        buf.push_str("_*");
    }
    buf.push(')');
}

/// A whole direct subtype left unmatched.
fn describe_into<M: TypeModel + ?Sized>(model: &M, ty: Idx, buf: &mut String) {
    if let Some(lit) = model.as_literal(ty) {
        buf.push_str(&model.format_literal(lit));
        return;
    }
    if ty == Idx::UNIT {
        buf.push_str("()");
        return;
    }
    let Some(adt) = model.constructor(ty) else {
        buf.push_str("_: ");
        buf.push_str(&model.format_type(ty));
        return;
    };
    let def = model.adt(adt);
    match &def.kind {
        AdtKind::Module => buf.push_str(model.lookup(def.name)),
        AdtKind::Product { fields } => {
            buf.push_str(model.lookup(def.name));
            buf.push('(');
            buf.push_str(&vec!["_"; fields.len()].join(", "));
            buf.push(')');
        }
        AdtKind::Abstract { .. } | AdtKind::Sequence => {
            buf.push_str("_: ");
            buf.push_str(&model.format_type(ty));
        }
    }
}

fn constructor_name<M: TypeModel + ?Sized>(model: &M, ty: Idx) -> String {
    match model.constructor(ty) {
        Some(adt) => model.lookup(model.adt(adt).name).to_string(),
        None => model.format_type(ty),
    }
}

fn singleton_name<M: TypeModel + ?Sized>(model: &M, ty: Idx) -> String {
    if let Some(lit) = model.as_literal(ty) {
        return model.format_literal(lit);
    }
    if ty == Idx::UNIT {
        return "()".to_string();
    }
    constructor_name(model, ty)
}
