use weft_ir::error::unimplemented;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::{static_str, HostFnMap};
use crate::handler::{HandlerContext, IntrinsicHandler};

/// Calls a host function registered under the static `fn_uri`.
pub struct CustomFunction {
    functions: HostFnMap,
}

impl CustomFunction {
    pub fn new(functions: HostFnMap) -> Self {
        CustomFunction { functions }
    }
}

const MISSING_URI: &str = "Expected a function URI as a string static parameter.";

impl IntrinsicHandler for CustomFunction {
    fn uri(&self) -> &str {
        uris::CUSTOM_FUNCTION
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        static_str(intrinsic, MISSING_URI).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        _context: &dyn HandlerContext,
    ) -> Result<Value> {
        let fn_uri = static_str(intrinsic, MISSING_URI)?;
        let function = self
            .functions
            .get(fn_uri)
            .ok_or_else(|| unimplemented(format!("Unknown custom function: {fn_uri}")))?;
        function(argument)
    }
}
