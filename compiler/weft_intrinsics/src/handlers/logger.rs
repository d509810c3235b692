use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use crate::handler::{HandlerContext, IntrinsicHandler};

/// Logs its argument at info level and passes it through.
pub struct Logger;

impl IntrinsicHandler for Logger {
    fn uri(&self) -> &str {
        uris::LOGGER
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        if intrinsic.static_parameter().is_some() {
            return Err(invalid_argument("logger takes no static parameter."));
        }
        Ok(())
    }

    fn execute_call(
        &self,
        _intrinsic: &Intrinsic,
        argument: &Value,
        _context: &dyn HandlerContext,
    ) -> Result<Value> {
        tracing::info!(target: "weft::logger", value = %argument);
        Ok(argument.clone())
    }
}
