use weft_authoring::{Context, Locals};
use weft_ir::{Result, Value};

use crate::executor::Executor;

/// A [`Context`] that runs calls immediately instead of tracing them.
///
/// Arguments are packed into a struct exactly as tracing would, so a graph
/// behaves the same whether it is interpreted or traced and executed later.
pub struct InterpretingContext {
    executor: Executor,
    locals: Locals,
}

impl InterpretingContext {
    pub fn new(executor: Executor) -> Self {
        InterpretingContext {
            executor,
            locals: Locals::new(),
        }
    }

    /// Interpret with `locals` available for reference resolution.
    pub fn with_locals(executor: Executor, locals: Locals) -> Self {
        InterpretingContext { executor, locals }
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

impl Context for InterpretingContext {
    fn call(&self, function: &Value, args: &[Value]) -> Result<Value> {
        let call = Value::call(function.clone(), Value::structure(args.to_vec()));
        self.executor.execute(&call, &self.locals)
    }
}
