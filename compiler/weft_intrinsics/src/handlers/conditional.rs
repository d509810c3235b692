use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::static_struct;
use crate::handler::{HandlerContext, IntrinsicHandler};

/// Evaluates the `then` or the `else` branch, never both.
pub struct Conditional;

const MISSING_BRANCHES: &str = "Missing a pair of static parameters.";

fn branches(intrinsic: &Intrinsic) -> Result<(&Value, &Value)> {
    match static_struct(intrinsic, MISSING_BRANCHES)? {
        [then_branch, else_branch] => {
            if then_branch.label() != Some("then") || else_branch.label() != Some("else") {
                return Err(invalid_argument("Wrong static parameter names."));
            }
            Ok((then_branch, else_branch))
        }
        _ => Err(invalid_argument(MISSING_BRANCHES)),
    }
}

impl IntrinsicHandler for Conditional {
    fn uri(&self) -> &str {
        uris::CONDITIONAL
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        branches(intrinsic).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        context: &dyn HandlerContext,
    ) -> Result<Value> {
        let (then_branch, else_branch) = branches(intrinsic)?;
        let condition = argument
            .as_bool()
            .ok_or_else(|| invalid_argument(format!("Condition is not a Boolean: {argument}")))?;
        tracing::trace!(condition, "conditional");
        context.evaluate(if condition { then_branch } else { else_branch })
    }
}
