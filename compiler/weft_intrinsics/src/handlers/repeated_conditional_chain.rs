use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::breakable_chain::run_pass;
use super::{static_struct, step_count};
use crate::handler::{HandlerContext, IntrinsicHandler};

/// A breakable chain run up to `num_steps` times; any break ends the loop.
pub struct RepeatedConditionalChain;

const SHAPE: &str = "Expected num_steps followed by at least one function.";

fn parameters(intrinsic: &Intrinsic) -> Result<(usize, &[Value])> {
    match static_struct(intrinsic, SHAPE)? {
        [steps, fns @ ..] if !fns.is_empty() && steps.label() == Some("num_steps") => {
            Ok((step_count(steps)?, fns))
        }
        _ => Err(invalid_argument(SHAPE)),
    }
}

impl IntrinsicHandler for RepeatedConditionalChain {
    fn uri(&self) -> &str {
        uris::REPEATED_CONDITIONAL_CHAIN
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
        let (steps, fns) = parameters(intrinsic)?;
        let mut state = argument.clone();
        for step in 0..steps {
            let pass = run_pass(fns, state, context)?;
            state = pass.state;
            if pass.broke {
                tracing::trace!(step, "chain broke");
                break;
            }
        }
        Ok(state)
    }
}
