use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use crate::handler::{HandlerContext, IntrinsicHandler};

/// Boolean negation. Takes no static parameter.
pub struct LogicalNot;

impl IntrinsicHandler for LogicalNot {
    fn uri(&self) -> &str {
        uris::LOGICAL_NOT
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        if intrinsic.static_parameter().is_some() {
            return Err(invalid_argument("logical_not takes no static parameter."));
        }
        Ok(())
    }

    fn execute_call(
        &self,
        _intrinsic: &Intrinsic,
        argument: &Value,
        _context: &dyn HandlerContext,
    ) -> Result<Value> {
        let b = argument
            .as_bool()
            .ok_or_else(|| invalid_argument("Argument does not contain boolean."))?;
        Ok(Value::boolean(!b))
    }
}
