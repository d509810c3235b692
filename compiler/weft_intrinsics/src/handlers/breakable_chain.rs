use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::static_struct;
use crate::handler::{HandlerContext, IntrinsicHandler};

/// Serial chain with boolean stages acting as guards.
///
/// A stage returning `true` ends the chain with the current state; `false`
/// passes the state on unchanged; any other result becomes the new state.
pub struct BreakableChain;

const EMPTY: &str = "Expected at least one function in the chain.";

/// Outcome of one pass over a breakable chain.
pub(super) struct Pass {
    pub(super) state: Value,
    pub(super) broke: bool,
}

/// Run `fns` once over `state`.
pub(super) fn run_pass(fns: &[Value], state: Value, context: &dyn HandlerContext) -> Result<Pass> {
    let mut state = state;
    for function in fns {
        let next = context.call(function, state.clone())?;
        match next.as_bool() {
            Some(true) => return Ok(Pass { state, broke: true }),
            Some(false) => {}
            None => state = next,
        }
    }
    Ok(Pass {
        state,
        broke: false,
    })
}

fn chain(intrinsic: &Intrinsic) -> Result<&[Value]> {
    match static_struct(intrinsic, EMPTY)? {
        [] => Err(invalid_argument(EMPTY)),
        fns => Ok(fns),
    }
}

impl IntrinsicHandler for BreakableChain {
    fn uri(&self) -> &str {
        uris::BREAKABLE_CHAIN
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
        run_pass(chain(intrinsic)?, argument.clone(), context).map(|pass| pass.state)
    }
}
