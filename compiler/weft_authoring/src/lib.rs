//! Authoring weft graphs.
//!
//! - [`Context`] / [`ContextStack`]: pluggable call interception and its
//!   nesting discipline, with a lazily created process-wide stack
//! - [`TracingContext`]: records calls as deduplicated IR plus a symbol
//!   table of locals
//! - [`Computation`]: call syntax that delegates to the current context
//! - [`trace`]: one tracing session from start to finished graph
//!
//! # Example
//!
//! ```
//! use weft_authoring::{trace, Computation, ContextStack};
//! use weft_ir::{build, Value};
//!
//! let stack = ContextStack::new();
//! let not = Computation::new(build::create_logical_not());
//! let graph = trace(&stack, || {
//!     Ok(not.call_in(&stack, &[Value::boolean(true)])?.into())
//! })
//! .unwrap();
//! assert_eq!(graph.locals.len(), 2);
//! ```

mod computation;
mod context;
mod locals;
mod tracer;

pub use computation::{trace, Computation, TracedGraph};
pub use context::{context_stack, Context, ContextStack};
pub use locals::Locals;
pub use tracer::{decode_locals, TracingContext, LOCAL_NAME_PREFIX};
