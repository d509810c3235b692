//! Inline graph evaluation.
//!
//! Scalars and intrinsics evaluate to themselves, structs element-wise,
//! references to their (evaluated) binding in the locals. A call evaluates
//! its function to an intrinsic, checks the descriptor, evaluates the
//! argument and hands both to the registered handler.
//!
//! The whole graph is checked for malformed descriptors first, so a bad
//! static parameter surfaces before any handler has run.
//!
//! Traced calls always pack their arguments into a struct, so a
//! one-element struct argument is unwrapped before dispatch.

use std::sync::Arc;

use weft_authoring::Locals;
use weft_intrinsics::{
    create_handler_set, HandlerContext, HandlerSetConfig, IntrinsicHandler, IntrinsicHandlerSet,
};
use weft_ir::error::{failed_precondition, invalid_argument};
use weft_ir::{ensure_sufficient_stack, Intrinsic, Result, Selection, Value, ValueKind};

use crate::validate::check_graph;

/// Limits for one [`Executor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Maximum nesting of evaluations, counting calls made by handlers.
    pub max_depth: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        ExecutorConfig { max_depth: 512 }
    }
}

pub struct Executor {
    handlers: Arc<IntrinsicHandlerSet>,
    config: ExecutorConfig,
}

impl Executor {
    pub fn new(handlers: Arc<IntrinsicHandlerSet>, config: ExecutorConfig) -> Self {
        Executor { handlers, config }
    }

    /// Executor over the built-in handlers with default limits.
    pub fn with_builtins() -> Self {
        Self::new(
            Arc::new(create_handler_set(HandlerSetConfig::default())),
            ExecutorConfig::default(),
        )
    }

    pub fn handlers(&self) -> &Arc<IntrinsicHandlerSet> {
        &self.handlers
    }

    pub fn config(&self) -> ExecutorConfig {
        self.config
    }

    /// Evaluate `graph`, resolving references against `locals`.
    ///
    /// Every reachable intrinsic descriptor is checked before any handler
    /// runs.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn execute(&self, graph: &Value, locals: &Locals) -> Result<Value> {
        check_graph(&self.handlers, graph, locals)?;
        Frame {
            executor: self,
            locals,
            depth: 0,
        }
        .eval(graph)
    }
}

/// One level of evaluation; handlers re-enter through it.
struct Frame<'a> {
    executor: &'a Executor,
    locals: &'a Locals,
    depth: usize,
}

impl Frame<'_> {
    fn nested(&self) -> Result<Self> {
        let max_depth = self.executor.config.max_depth;
        if self.depth >= max_depth {
            return Err(failed_precondition(format!(
                "Evaluation exceeded the maximum depth of {max_depth}."
            )));
        }
        Ok(Frame {
            executor: self.executor,
            locals: self.locals,
            depth: self.depth + 1,
        })
    }

    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(shape = value.kind().shape_name(), depth = self.depth)
    )]
    fn eval(&self, value: &Value) -> Result<Value> {
        ensure_sufficient_stack(|| match value.kind() {
            ValueKind::Scalar(_) | ValueKind::Intrinsic(_) => Ok(value.clone()),
            ValueKind::Struct(elements) => {
                let inner = self.nested()?;
                let evaluated = elements
                    .iter()
                    .map(|element| inner.eval(element))
                    .collect::<Result<Vec<_>>>()?;
                let result = Value::structure(evaluated);
                Ok(match value.label() {
                    Some(label) => result.with_label(label),
                    None => result,
                })
            }
            ValueKind::Selection(selection) => self.nested()?.select(selection),
            ValueKind::Reference(name) => {
                let bound = self
                    .locals
                    .resolve(name)?
                    .ok_or_else(|| invalid_argument(format!("Unknown reference {name}.")))?;
                self.nested()?.eval(&bound)
            }
            ValueKind::Call(call) => {
                let inner = self.nested()?;
                let function = inner.eval(&call.function)?;
                let (intrinsic, handler) = inner.resolve(&function)?;
                let argument = unwrap_single(inner.eval(&call.argument)?);
                tracing::trace!(uri = %intrinsic.uri, "dispatch");
                handler.execute_call(intrinsic, &argument, &inner)
            }
        })
    }

    fn select(&self, selection: &Selection) -> Result<Value> {
        let source = self.eval(&selection.source)?;
        let elements = source
            .as_struct()
            .ok_or_else(|| invalid_argument(format!("Selecting from a non-struct value {source}.")))?;
        let index = selection.index;
        let position = usize::try_from(index).map_err(|_| {
            invalid_argument(format!(
                "Negative selection index {index} for a struct of size {}.",
                elements.len()
            ))
        })?;
        elements.get(position).cloned().ok_or_else(|| {
            invalid_argument(format!(
                "Selection index {index} out of range for a struct of size {}.",
                elements.len()
            ))
        })
    }

    /// The checked handler for an evaluated function value.
    fn resolve<'v>(
        &self,
        function: &'v Value,
    ) -> Result<(&'v Intrinsic, Arc<dyn IntrinsicHandler>)> {
        let intrinsic = function
            .as_intrinsic()
            .ok_or_else(|| invalid_argument(format!("Calling a non-function value {function}.")))?;
        let handler = self.executor.handlers.handler(&intrinsic.uri)?;
        handler.check_well_formed(intrinsic)?;
        Ok((intrinsic, handler))
    }
}

impl HandlerContext for Frame<'_> {
    fn evaluate(&self, value: &Value) -> Result<Value> {
        self.nested()?.eval(value)
    }

    fn call(&self, function: &Value, argument: Value) -> Result<Value> {
        let inner = self.nested()?;
        let function = inner.eval(function)?;
        let (intrinsic, handler) = inner.resolve(&function)?;
        handler.execute_call(intrinsic, &argument, &inner)
    }
}

fn unwrap_single(argument: Value) -> Value {
    match argument.as_struct() {
        Some([only]) => only.clone(),
        _ => argument,
    }
}
