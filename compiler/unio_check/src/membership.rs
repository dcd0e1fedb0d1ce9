//! Single membership queries for union-typed handles.

use unio_diagnostic::{Diagnostic, ErrorCode};
use unio_ir::Span;
use unio_types::{Idx, TypeModel};
use unio_union::UnionAlgebra;

/// Check that a value of type `candidate` may be sent through a handle
/// typed by `union`.
pub fn check_membership<M: TypeModel + ?Sized>(
    model: &M,
    candidate: Idx,
    union: Idx,
    span: Span,
) -> Result<(), Diagnostic> {
    UnionAlgebra::new(model)
        .is_part_of_type(candidate, union)
        .map_err(|mismatch| mismatch.to_diagnostic(model, ErrorCode::E3002, span))
}

/// Check that a handle typed by `union` may be narrowed to `subset`, which
/// holds when every member of `subset` is part of `union`.
pub fn check_narrowing<M: TypeModel + ?Sized>(
    model: &M,
    subset: Idx,
    union: Idx,
    span: Span,
) -> Result<(), Diagnostic> {
    UnionAlgebra::new(model)
        .check_contains_all_of(union, subset)
        .map_err(|mismatch| {
            mismatch
                .to_diagnostic(model, ErrorCode::E3006, span)
                .with_note(format!(
                    "a handle of {} cannot be narrowed to {}",
                    mismatch.target.render(model),
                    model.format_type(subset)
                ))
        })
}
