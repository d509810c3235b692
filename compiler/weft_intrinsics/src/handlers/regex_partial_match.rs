use regex::Regex;
use weft_ir::error::invalid_argument;
use weft_ir::{uris, Intrinsic, Result, Value};

use super::static_str;
use crate::handler::{HandlerContext, IntrinsicHandler};

/// True if the pattern matches anywhere in the string argument.
pub struct RegexPartialMatch;

fn compile(intrinsic: &Intrinsic) -> Result<Regex> {
    let pattern = static_str(intrinsic, "Expected a regex pattern as a string static parameter.")?;
    Regex::new(pattern).map_err(|e| invalid_argument(format!("Invalid regex {pattern:?}: {e}")))
}

impl IntrinsicHandler for RegexPartialMatch {
    fn uri(&self) -> &str {
        uris::REGEX_PARTIAL_MATCH
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        compile(intrinsic).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        _context: &dyn HandlerContext,
    ) -> Result<Value> {
        let regex = compile(intrinsic)?;
        let text = argument
            .as_str()
            .ok_or_else(|| invalid_argument("Argument does not contain a string."))?;
        Ok(Value::boolean(regex.is_match(text)))
    }
}
