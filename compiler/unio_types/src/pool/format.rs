//! Type formatting for diagnostics.

#![allow(clippy::format_push_string)] // formatting favors clarity over allocation

use std::fmt::Write as _;

use crate::{Idx, Literal, Pool, TypeData};

impl Pool {
    /// Format a type as a human-readable string.
    ///
    /// Literal types print as their value (`42`, `"s"`), unions as
    /// `a | b`, and applied data types as `Name[args]`.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        if let Some(name) = idx.name() {
            buf.push_str(name);
            return;
        }
        match self.data(idx) {
            TypeData::Primitive(tag) => {
                let _ = write!(buf, "{tag:?}");
            }
            TypeData::Literal(lit) => self.format_literal_into(lit, buf),
            TypeData::Union(..) => {
                for (i, member) in self.flatten_union(idx).into_iter().enumerate() {
                    if i > 0 {
                        buf.push_str(" | ");
                    }
                    self.format_type_into(member, buf);
                }
            }
            TypeData::Adt { adt, args } => {
                buf.push_str(self.lookup(self.adt(adt).name));
                if !args.is_empty() {
                    buf.push('[');
                    for (i, &arg) in args.iter().enumerate() {
                        if i > 0 {
                            buf.push_str(", ");
                        }
                        self.format_type_into(arg, buf);
                    }
                    buf.push(']');
                }
            }
            TypeData::Param { owner, index } => {
                match self.adt(owner).params.get(index as usize) {
                    Some(param) => buf.push_str(self.lookup(param.name)),
                    None => buf.push('?'),
                }
            }
        }
    }

    /// Format a literal value the way it is written in source.
    pub fn format_literal(&self, lit: Literal) -> String {
        let mut buf = String::new();
        self.format_literal_into(lit, &mut buf);
        buf
    }

    fn format_literal_into(&self, lit: Literal, buf: &mut String) {
        match lit {
            Literal::Int(value) => {
                let _ = write!(buf, "{value}");
            }
            Literal::Float(bits) => {
                let _ = write!(buf, "{:?}", f64::from_bits(bits));
            }
            Literal::Bool(value) => {
                let _ = write!(buf, "{value}");
            }
            Literal::Str(name) => {
                let _ = write!(buf, "{:?}", self.lookup(name));
            }
            Literal::Char(c) => {
                let _ = write!(buf, "{c:?}");
            }
            Literal::Unit => buf.push_str("()"),
        }
    }
}
