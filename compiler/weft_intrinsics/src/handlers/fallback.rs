use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::static_struct;
use crate::handler::{HandlerContext, IntrinsicHandler};

/// Tries each candidate in order; the first success wins.
pub struct Fallback;

const NO_CANDIDATES: &str = "Expected at least one candidate function.";

const CANDIDATE_LABEL: &str = "candidate_fn";

fn candidates(intrinsic: &Intrinsic) -> Result<&[Value]> {
    let fns = match static_struct(intrinsic, NO_CANDIDATES)? {
        [] => return Err(invalid_argument(NO_CANDIDATES)),
        fns => fns,
    };
    if let Some(bad) = fns.iter().find(|f| f.label() != Some(CANDIDATE_LABEL)) {
        return Err(invalid_argument(format!(
            "Bad parameter name: {}",
            bad.label().unwrap_or_default()
        )));
    }
    Ok(fns)
}

impl IntrinsicHandler for Fallback {
    fn uri(&self) -> &str {
        uris::FALLBACK
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        candidates(intrinsic).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        context: &dyn HandlerContext,
    ) -> Result<Value> {
        let mut last_error = invalid_argument(NO_CANDIDATES);
        for (index, candidate) in candidates(intrinsic)?.iter().enumerate() {
            match context.call(candidate, argument.clone()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(index, error = %e, "fallback candidate failed");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}
