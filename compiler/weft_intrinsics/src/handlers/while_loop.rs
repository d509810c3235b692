use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::static_struct;
use crate::handler::{HandlerContext, IntrinsicHandler};

/// Pre-checked loop: `while condition_fn(state) { state = body_fn(state) }`.
pub struct While;

fn parameters(intrinsic: &Intrinsic) -> Result<(&Value, &Value)> {
    match static_struct(intrinsic, "Missing required static parameters.")? {
        [condition, body] => {
            if condition.label() != Some("condition_fn") || body.label() != Some("body_fn") {
                return Err(invalid_argument(
                    "Wrong static parameter names. Expected condition_fn and body_fn.",
                ));
            }
            Ok((condition, body))
        }
        _ => Err(invalid_argument("Missing required static parameters.")),
    }
}

impl IntrinsicHandler for While {
    fn uri(&self) -> &str {
        uris::WHILE
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        parameters(intrinsic).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        context: &dyn HandlerContext,
    ) -> Result<Value> {
        let (condition, body) = parameters(intrinsic)?;
        let mut state = argument.clone();
        let mut iterations = 0usize;
        loop {
            let verdict = context.call(condition, state.clone())?;
            let proceed = verdict.as_bool().ok_or_else(|| {
                invalid_argument(format!("Condition does not have boolean: {verdict}"))
            })?;
            if !proceed {
                tracing::trace!(iterations, "while loop done");
                return Ok(state);
            }
            state = context.call(body, state)?;
            iterations += 1;
        }
    }
}
