//! Call syntax for authoring.
//!
//! A [`Computation`] wraps a piece of portable IR. Calling it hands the IR
//! and the arguments to the current context, and wraps whatever comes back,
//! so results can be called or passed on in turn.

use std::sync::Arc;

use weft_ir::error::failed_precondition;
use weft_ir::{Result, Value};

use crate::context::{context_stack, Context, ContextStack};
use crate::locals::Locals;
use crate::tracer::{decode_locals, TracingContext};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Computation {
    portable_ir: Value,
}

impl Computation {
    pub fn new(portable_ir: Value) -> Self {
        Computation { portable_ir }
    }

    #[inline]
    pub fn portable_ir(&self) -> &Value {
        &self.portable_ir
    }

    pub fn into_portable_ir(self) -> Value {
        self.portable_ir
    }

    /// Call through the process-wide context stack.
    pub fn call(&self, args: &[Value]) -> Result<Computation> {
        self.call_in(&context_stack(), args)
    }

    /// Call through `stack`'s current context.
    pub fn call_in(&self, stack: &ContextStack, args: &[Value]) -> Result<Computation> {
        let ctx = stack
            .current_context()
            .ok_or_else(|| failed_precondition("No context available."))?;
        ctx.call(&self.portable_ir, args).map(Computation::new)
    }
}

impl From<Value> for Computation {
    fn from(portable_ir: Value) -> Self {
        Computation::new(portable_ir)
    }
}

impl From<Computation> for Value {
    fn from(computation: Computation) -> Self {
        computation.portable_ir
    }
}

/// Result of one tracing session: the emitted graph and its symbol table.
#[derive(Debug)]
pub struct TracedGraph {
    pub root: Value,
    pub locals: Locals,
}

impl TracedGraph {
    /// Decoded bindings in registration order.
    pub fn bindings(&self) -> Result<Vec<(String, Value)>> {
        decode_locals(&self.locals)
    }
}

/// Run `body` with a fresh [`TracingContext`] on top of `stack`.
///
/// The context is removed again whether or not `body` succeeds. A failure
/// of `body` is reported ahead of any failure to remove the context.
pub fn trace(stack: &ContextStack, body: impl FnOnce() -> Result<Value>) -> Result<TracedGraph> {
    let tracer = Arc::new(TracingContext::new());
    let ctx: Arc<dyn Context> = tracer.clone();
    stack.append_nested_context(Arc::clone(&ctx));
    let result = body();
    let popped = stack.remove_nested_context(&ctx);
    drop(ctx);
    // A failing body outranks a failed pop.
    let root = result?;
    popped?;

    let locals = match Arc::try_unwrap(tracer) {
        Ok(tracer) => tracer.into_locals(),
        // Someone kept a handle to the context; copy the table out.
        Err(shared) => {
            let copy = Locals::new();
            for (name, encoded) in shared.locals().snapshot() {
                copy.insert_encoded(name, encoded);
            }
            copy
        }
    };
    tracing::debug!(locals = locals.len(), "trace complete");
    Ok(TracedGraph { root, locals })
}

#[cfg(test)]
mod tests;
