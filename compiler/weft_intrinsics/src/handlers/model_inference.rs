//! Model calls routed through a host-supplied inference map.
//!
//! The map is how a deployment plugs real backends in; tests register
//! closures. `test_model` is always available and answers with a canned
//! echo of its prompt.

use weft_ir::error::{invalid_argument, unimplemented};
use weft_ir::{uris, Intrinsic, Result, Value};

use super::{static_str, HostFnMap};
use crate::handler::{HandlerContext, IntrinsicHandler};

/// Model URI that needs no registration.
pub const TEST_MODEL: &str = "test_model";

const MISSING_MODEL: &str = "Expected a model URI as a string static parameter.";

pub struct ModelInference {
    models: HostFnMap,
}

impl ModelInference {
    pub fn new(models: HostFnMap) -> Self {
        ModelInference { models }
    }
}

impl IntrinsicHandler for ModelInference {
    fn uri(&self) -> &str {
        uris::MODEL_INFERENCE
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        static_str(intrinsic, MISSING_MODEL).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        _context: &dyn HandlerContext,
    ) -> Result<Value> {
        let model_uri = static_str(intrinsic, MISSING_MODEL)?;
        tracing::debug!(%model_uri, "model inference");
        if let Some(model) = self.models.get(model_uri) {
            return model(argument);
        }
        if model_uri == TEST_MODEL {
            let prompt = argument
                .as_str()
                .ok_or_else(|| invalid_argument("Expected a string prompt."))?;
            return Ok(Value::string(format!(
                "This is an output from a test model in response to \"{prompt}\"."
            )));
        }
        Err(unimplemented(format!("Unsupported model: {model_uri}")))
    }
}
