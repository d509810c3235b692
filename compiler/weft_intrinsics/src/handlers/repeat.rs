use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::{static_struct, step_count};
use crate::handler::{HandlerContext, IntrinsicHandler};

/// `body_fn` applied `num_steps` times in sequence.
pub struct Repeat;

const SHAPE: &str = "Expected num_steps and body_fn static parameters.";

fn parameters(intrinsic: &Intrinsic) -> Result<(usize, &Value)> {
    match static_struct(intrinsic, SHAPE)? {
        [steps, body] if steps.label() == Some("num_steps") && body.label() == Some("body_fn") => {
            Ok((step_count(steps)?, body))
        }
        _ => Err(invalid_argument(SHAPE)),
    }
}

impl IntrinsicHandler for Repeat {
    fn uri(&self) -> &str {
        uris::REPEAT
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
        let (steps, body) = parameters(intrinsic)?;
        (0..steps).try_fold(argument.clone(), |state, _| context.call(body, state))
    }
}
