//! Structural type equality.
//!
//! Two types are equal when they have the same shape all the way down.
//! The first mismatch aborts the comparison; its message names the
//! failing position and embeds the nested message, so a mismatch deep in
//! a struct of functions still says exactly where it happened.

use weft_ir::error::invalid_argument;
use weft_ir::{ensure_sufficient_stack, FunctionType, Result, ScalarKind, Type};

/// Check that `x` and `y` are structurally identical.
///
/// Fails `InvalidArgument` on any mismatch.
pub fn check_equal(x: &Type, y: &Type) -> Result<()> {
    ensure_sufficient_stack(|| match (x, y) {
        (Type::Scalar(a), Type::Scalar(b)) => check_scalar_equal(*a, *b),
        (Type::Struct(a), Type::Struct(b)) => check_struct_equal(a, b),
        (Type::Function(a), Type::Function(b)) => check_function_equal(a, b),
        (Type::Scalar(a), _) => Err(invalid_argument(format!(
            "Scalar {a} vs. non-scalar {y}."
        ))),
        (Type::Struct(_), _) => Err(invalid_argument(format!(
            "Struct {x} vs. non-struct {y}."
        ))),
        (Type::Function(_), _) => Err(invalid_argument(format!(
            "Function {x} vs. non-function {y}."
        ))),
    })
}

fn check_scalar_equal(x: ScalarKind, y: ScalarKind) -> Result<()> {
    if x == y {
        return Ok(());
    }
    Err(invalid_argument(format!(
        "Scalar {x} vs. a different scalar {y}."
    )))
}

fn check_struct_equal(x: &[Type], y: &[Type]) -> Result<()> {
    if x.len() != y.len() {
        return Err(invalid_argument(format!(
            "Unequal number of struct elements {} vs. {}.",
            x.len(),
            y.len()
        )));
    }
    for (i, (a, b)) in x.iter().zip(y).enumerate() {
        check_equal(a, b).map_err(|e| e.context(format!("Type mismatch at struct element {i}: ")))?;
    }
    Ok(())
}

fn check_function_equal(x: &FunctionType, y: &FunctionType) -> Result<()> {
    check_equal(&x.parameter, &y.parameter)
        .map_err(|e| e.context("Function parameter type mismatch: "))?;
    check_equal(&x.result, &y.result).map_err(|e| e.context("Function result type mismatch: "))
}
