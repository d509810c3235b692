//! Call interception and the context stack.
//!
//! A [`Context`] decides what calling a computation means: record it
//! (tracing), run it (interpreting), or whatever a test needs. The
//! [`ContextStack`] holds one replaceable default plus a LIFO sequence of
//! nested contexts; the current context is the top of that sequence, or
//! the default when it is empty.
//!
//! Contexts are shared by `Arc`. A context lives as long as its longest
//! holder among the stack, the call site, and any wrapping context.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use weft_ir::error::failed_precondition;
use weft_ir::{Result, Value};

/// A swappable call-interception strategy.
pub trait Context: Send + Sync {
    /// Process a call of `function` with positional `args`.
    fn call(&self, function: &Value, args: &[Value]) -> Result<Value>;
}

struct StackState {
    default: Option<Arc<dyn Context>>,
    nested: Vec<Arc<dyn Context>>,
}

/// Default context plus nested contexts, guarded by one lock.
pub struct ContextStack {
    state: RwLock<StackState>,
}

/// Identity comparison of two shared contexts (data pointer only).
fn same_context(a: &Arc<dyn Context>, b: &Arc<dyn Context>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a).cast::<()>(),
        Arc::as_ptr(b).cast::<()>(),
    )
}

impl ContextStack {
    /// A stack with no default and no nested contexts.
    pub fn new() -> Self {
        ContextStack {
            state: RwLock::new(StackState {
                default: None,
                nested: Vec::new(),
            }),
        }
    }

    pub fn with_default(ctx: Arc<dyn Context>) -> Self {
        let stack = Self::new();
        stack.set_default_context(ctx);
        stack
    }

    /// Replace the fallback context unconditionally.
    pub fn set_default_context(&self, ctx: Arc<dyn Context>) {
        self.state.write().default = Some(ctx);
    }

    /// Push `ctx` as the new top.
    pub fn append_nested_context(&self, ctx: Arc<dyn Context>) {
        let mut state = self.state.write();
        state.nested.push(ctx);
        tracing::debug!(depth = state.nested.len(), "pushed nested context");
    }

    /// Pop `ctx`, which must be the current top.
    pub fn remove_nested_context(&self, ctx: &Arc<dyn Context>) -> Result<()> {
        let mut state = self.state.write();
        let Some(top) = state.nested.last() else {
            return Err(failed_precondition("No nested context on the stack."));
        };
        if !same_context(top, ctx) {
            return Err(failed_precondition(
                "Can only remove the top context from the stack.",
            ));
        }
        state.nested.pop();
        tracing::debug!(depth = state.nested.len(), "popped nested context");
        Ok(())
    }

    /// Top of the nested sequence, else the default (if any).
    pub fn current_context(&self) -> Option<Arc<dyn Context>> {
        let state = self.state.read();
        state.nested.last().or(state.default.as_ref()).cloned()
    }

    /// Number of nested contexts.
    pub fn depth(&self) -> usize {
        self.state.read().nested.len()
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

static CONTEXT_STACK: OnceLock<Arc<ContextStack>> = OnceLock::new();

/// The process-wide stack, created empty on first use.
///
/// Code with an explicit handle should prefer its own [`ContextStack`];
/// tests in particular should construct private stacks.
pub fn context_stack() -> Arc<ContextStack> {
    Arc::clone(CONTEXT_STACK.get_or_init(|| Arc::new(ContextStack::new())))
}

#[cfg(test)]
mod tests;
