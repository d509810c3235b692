//! The intrinsic contract and the handler registry.
//!
//! An executor interprets a `call` whose function is an intrinsic by
//! looking up the handler registered for the intrinsic's URI, running
//! [`IntrinsicHandler::check_well_formed`] on the descriptor, and only then
//! [`IntrinsicHandler::execute_call`] with the evaluated argument.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use weft_ir::error::unimplemented;
use weft_ir::{Intrinsic, Result, Value};

/// Callback into the running graph, handed to every `execute_call`.
///
/// Must be `Sync`: handlers may fan work out across threads.
pub trait HandlerContext: Sync {
    /// Evaluate `value` (e.g. a lazily chosen branch) in the current graph.
    fn evaluate(&self, value: &Value) -> Result<Value>;

    /// Apply `function` to an already evaluated `argument`.
    fn call(&self, function: &Value, argument: Value) -> Result<Value>;
}

/// A pluggable primitive operation.
///
/// Handlers never mutate the descriptor they are given.
pub trait IntrinsicHandler: Send + Sync {
    /// URI this handler answers to.
    fn uri(&self) -> &str;

    /// Validate the static parameter independently of any call.
    ///
    /// Side-effect free; always invoked before `execute_call` for the same
    /// descriptor.
    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()>;

    /// Perform the operation on `argument`.
    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        context: &dyn HandlerContext,
    ) -> Result<Value>;
}

/// Registry of handlers keyed by URI.
#[derive(Default)]
pub struct IntrinsicHandlerSet {
    handlers: RwLock<FxHashMap<String, Arc<dyn IntrinsicHandler>>>,
}

impl IntrinsicHandlerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`, replacing any handler with the same URI.
    pub fn add_handler(&self, handler: Arc<dyn IntrinsicHandler>) {
        let uri = handler.uri().to_string();
        if self.handlers.write().insert(uri.clone(), handler).is_some() {
            tracing::debug!(%uri, "replaced intrinsic handler");
        } else {
            tracing::debug!(%uri, "registered intrinsic handler");
        }
    }

    /// The handler for `uri`; `Unimplemented` if none is registered.
    pub fn handler(&self, uri: &str) -> Result<Arc<dyn IntrinsicHandler>> {
        self.handlers.read().get(uri).cloned().ok_or_else(|| {
            tracing::warn!(%uri, "no handler for intrinsic");
            unimplemented(format!("No handler for intrinsic {uri}."))
        })
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.handlers.read().contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests;
