//! A minimal in-crate evaluator for exercising control-flow handlers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use weft_ir::error::{internal, invalid_argument};
use weft_ir::{Intrinsic, Result, Value};

use crate::config::{create_handler_set, HandlerSetConfig};
use crate::handler::{HandlerContext, IntrinsicHandler, IntrinsicHandlerSet};

pub(crate) const FAILING: &str = "test/failing";

/// Always fails with `Internal("boom")`, counting invocations.
#[derive(Default)]
pub(crate) struct Failing {
    pub(crate) calls: AtomicUsize,
}

impl IntrinsicHandler for Failing {
    fn uri(&self) -> &str {
        FAILING
    }

    fn check_well_formed(&self, _intrinsic: &Intrinsic) -> Result<()> {
        Ok(())
    }

    fn execute_call(
        &self,
        _intrinsic: &Intrinsic,
        _argument: &Value,
        _context: &dyn HandlerContext,
    ) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(internal("boom"))
    }
}

/// Dispatches calls straight to the handlers of a config plus [`Failing`].
pub(crate) struct Direct {
    handlers: IntrinsicHandlerSet,
    pub(crate) failing: Arc<Failing>,
    pub(crate) evaluated: AtomicUsize,
}

impl Direct {
    /// Built-ins plus an `echo` model.
    pub(crate) fn new() -> Self {
        Self::with_config(HandlerSetConfig::new().with_model("echo", |prompt| {
            Ok(Value::string(format!("echo: {}", prompt.as_str().unwrap_or_default())))
        }))
    }

    pub(crate) fn with_config(config: HandlerSetConfig) -> Self {
        let failing = Arc::new(Failing::default());
        let handlers = create_handler_set(config.with_handler(failing.clone()));
        Direct {
            handlers,
            failing,
            evaluated: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing_fn() -> Value {
        Value::intrinsic(FAILING, None)
    }
}

impl HandlerContext for Direct {
    fn evaluate(&self, value: &Value) -> Result<Value> {
        self.evaluated.fetch_add(1, Ordering::SeqCst);
        Ok(value.clone())
    }

    fn call(&self, function: &Value, argument: Value) -> Result<Value> {
        let intrinsic = function
            .as_intrinsic()
            .ok_or_else(|| invalid_argument(format!("Not a function: {function}")))?;
        let handler = self.handlers.handler(&intrinsic.uri)?;
        handler.check_well_formed(intrinsic)?;
        handler.execute_call(intrinsic, &argument, self)
    }
}

/// Model that appends `suffix` to its string prompt.
pub(crate) fn append(
    suffix: &'static str,
) -> impl Fn(&Value) -> Result<Value> + Send + Sync + 'static {
    move |prompt| {
        let text = prompt
            .as_str()
            .ok_or_else(|| invalid_argument("Expected a string prompt."))?;
        Ok(Value::string(format!("{text}{suffix}")))
    }
}
