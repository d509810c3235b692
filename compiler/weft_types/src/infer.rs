//! Bottom-up type inference over IR values.
//!
//! A single pass annotates every node it understands. Nodes that already
//! carry a type are verified with [`check_equal`] instead of overwritten,
//! so running inference twice is a no-op and a contradictory preset type
//! is reported rather than silently replaced.
//!
//! Supported shapes: scalars, structs, selections. Calls, references and
//! intrinsics fail `Unimplemented`.

use weft_ir::error::{internal, invalid_argument, unimplemented};
use weft_ir::{ensure_sufficient_stack, Result, Scalar, ScalarKind, Selection, Type, Value, ValueKind};

use crate::check_equal;

/// Infer and record types for `value` and all of its descendants.
///
/// The first failure aborts the whole pass.
#[tracing::instrument(level = "trace", skip_all, fields(shape = value.kind().shape_name()))]
pub fn infer_types(value: &mut Value) -> Result<()> {
    let shape = value.kind().shape_name();
    ensure_sufficient_stack(|| {
        let inferred = match value.kind_mut() {
            ValueKind::Scalar(scalar) => Type::Scalar(scalar_kind(scalar)),
            ValueKind::Struct(elements) => struct_type(elements)?,
            ValueKind::Selection(selection) => selection_type(selection)?,
            ValueKind::Call(_) | ValueKind::Reference(_) | ValueKind::Intrinsic(_) => {
                return Err(unimplemented(format!(
                    "Type inference is not implemented for {shape} values."
                )));
            }
        };
        value.verify_or_set_type(inferred, check_equal)
    })
}

fn scalar_kind(scalar: &Scalar) -> ScalarKind {
    match scalar {
        Scalar::Str(_) => ScalarKind::String,
        Scalar::Int32(_) => ScalarKind::Int32,
        Scalar::Bool(_) => ScalarKind::Bool,
    }
}

fn annotation(value: &Value) -> Result<Type> {
    value
        .ty()
        .cloned()
        .ok_or_else(|| internal("Inference left a node without a type."))
}

fn struct_type(elements: &mut [Value]) -> Result<Type> {
    let mut types = Vec::with_capacity(elements.len());
    for element in elements {
        infer_types(element)?;
        types.push(annotation(element)?);
    }
    Ok(Type::Struct(types))
}

fn selection_type(selection: &mut Selection) -> Result<Type> {
    infer_types(&mut selection.source)?;
    let source_type = annotation(&selection.source)?;
    let Some(elements) = source_type.as_struct() else {
        return Err(invalid_argument(format!(
            "Selecting from a non-struct type {source_type}."
        )));
    };
    let index = selection.index;
    let size = elements.len();
    let Ok(position) = usize::try_from(index) else {
        return Err(invalid_argument(format!(
            "Negative selection index {index} for a struct of size {size}."
        )));
    };
    elements.get(position).cloned().ok_or_else(|| {
        invalid_argument(format!(
            "Selection index {index} out of range for a struct of size {size}."
        ))
    })
}
