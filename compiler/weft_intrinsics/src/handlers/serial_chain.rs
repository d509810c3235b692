use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::static_struct;
use crate::handler::{HandlerContext, IntrinsicHandler};

/// Pipes the argument through each function in turn.
pub struct SerialChain;

fn chain(intrinsic: &Intrinsic) -> Result<&[Value]> {
    const EMPTY: &str = "Expected at least one function in the chain.";
    match static_struct(intrinsic, EMPTY)? {
        [] => Err(invalid_argument(EMPTY)),
        fns => Ok(fns),
    }
}

impl IntrinsicHandler for SerialChain {
    fn uri(&self) -> &str {
        uris::SERIAL_CHAIN
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        chain(intrinsic).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        context: &dyn HandlerContext,
    ) -> Result<Value> {
        chain(intrinsic)?
            .iter()
            .try_fold(argument.clone(), |state, function| context.call(function, state))
    }
}

#[cfg(test)]
mod tests;
