//! Graph building by tracing.
//!
//! [`TracingContext`] turns `f(args)` into a `call` node instead of running
//! it. Every argument and the function itself are swapped for a named
//! reference; the name is keyed on the canonical encoding of the sub-tree,
//! so structurally identical sub-expressions share one name per session.
//!
//! Names are `v_0`, `v_1`, ... in first-seen order, drawn from a private
//! counter that only moves forward. A name that is already taken, e.g. a
//! parameter bound by hand, is skipped rather than retried.

use std::sync::atomic::{AtomicUsize, Ordering};

use weft_ir::error::invalid_argument;
use weft_ir::{Result, Value};

use crate::context::Context;
use crate::locals::Locals;

/// Prefix of generated local names.
pub const LOCAL_NAME_PREFIX: &str = "v_";

fn local_name(index: usize) -> String {
    format!("{LOCAL_NAME_PREFIX}{index}")
}

/// Authoring context that records calls as IR.
///
/// One instance per authoring session. It is safe to share, but sessions
/// must not be interleaved through the same instance.
#[derive(Default)]
pub struct TracingContext {
    locals: Locals,
    next_index: AtomicUsize,
}

impl TracingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated name → encoded IR bindings.
    pub fn locals(&self) -> &Locals {
        &self.locals
    }

    pub fn into_locals(self) -> Locals {
        self.locals
    }

    /// Replace `ir` with a reference to its local name, registering it first
    /// if this is the first time its encoding is seen.
    pub fn replace_with_reference(&self, ir: &Value) -> Result<Value> {
        if ir.is_reference() {
            return Ok(ir.clone());
        }
        let key = ir.encode()?;
        loop {
            if let Some(name) = self.locals.name_of(&key) {
                return Ok(Value::reference(name));
            }
            let name = local_name(self.next_index.fetch_add(1, Ordering::Relaxed));
            if self.locals.insert_encoded(name.clone(), key.clone()) {
                tracing::debug!(%name, "registered local");
                return Ok(Value::reference(name));
            }
            // Name taken, or another writer registered this key first.
        }
    }
}

impl Context for TracingContext {
    fn call(&self, function: &Value, args: &[Value]) -> Result<Value> {
        if args.is_empty() {
            return Err(invalid_argument("At least one argument is required."));
        }
        let processed_args = args
            .iter()
            .map(|arg| self.replace_with_reference(arg))
            .collect::<Result<Vec<_>>>()?;
        let processed_function = self.replace_with_reference(function)?;
        Ok(Value::call(processed_function, Value::structure(processed_args)))
    }
}

/// Decode every binding in `locals`, generated names first in index order.
pub fn decode_locals(locals: &Locals) -> Result<Vec<(String, Value)>> {
    locals
        .snapshot()
        .into_iter()
        .map(|(name, bytes)| {
            let value = Value::decode(&bytes).map_err(|e| e.context(format!("Local {name}: ")))?;
            Ok((name, value))
        })
        .collect()
}

#[cfg(test)]
mod tests;
