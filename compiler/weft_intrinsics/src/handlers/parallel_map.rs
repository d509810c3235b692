use rayon::prelude::*;
use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use crate::handler::{HandlerContext, IntrinsicHandler};

/// Applies the static function to every element of a struct argument.
///
/// Elements run on the rayon pool; results keep the input order.
pub struct ParallelMap;

fn map_fn(intrinsic: &Intrinsic) -> Result<&Value> {
    intrinsic
        .static_parameter()
        .ok_or_else(|| invalid_argument("Expected a function as the static parameter."))
}

impl IntrinsicHandler for ParallelMap {
    fn uri(&self) -> &str {
        uris::PARALLEL_MAP
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        map_fn(intrinsic).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        context: &dyn HandlerContext,
    ) -> Result<Value> {
        let function = map_fn(intrinsic)?;
        let elements = argument
            .as_struct()
            .ok_or_else(|| invalid_argument(format!("Expected a struct argument, got {argument}.")))?;
        let results = elements
            .par_iter()
            .map(|element| context.call(function, element.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::structure(results))
    }
}
