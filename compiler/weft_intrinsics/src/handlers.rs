//! Built-in intrinsic handlers.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use weft_ir::error::invalid_argument;
use weft_ir::{Intrinsic, Result, Value};

use crate::config::HandlerSetConfig;
use crate::handler::IntrinsicHandler;

mod breakable_chain;
mod conditional;
mod custom_function;
mod fallback;
mod logger;
mod logical_not;
mod model_inference;
mod parallel_map;
mod prompt_template;
mod regex_partial_match;
mod repeat;
mod repeated_conditional_chain;
mod serial_chain;
mod while_loop;

#[cfg(test)]
pub(crate) mod testing;

pub use breakable_chain::BreakableChain;
pub use conditional::Conditional;
pub use custom_function::CustomFunction;
pub use fallback::Fallback;
pub use logger::Logger;
pub use logical_not::LogicalNot;
pub use model_inference::{ModelInference, TEST_MODEL};
pub use parallel_map::ParallelMap;
pub use prompt_template::PromptTemplate;
pub use regex_partial_match::RegexPartialMatch;
pub use repeat::Repeat;
pub use repeated_conditional_chain::RepeatedConditionalChain;
pub use serial_chain::SerialChain;
pub use while_loop::While;

/// A host function reachable from IR: a model backend or a custom function.
pub type HostFn = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Host functions keyed by the URI the IR names them with.
pub type HostFnMap = FxHashMap<String, HostFn>;

/// One instance of every built-in handler, wired to `config`'s host maps.
pub fn builtins(config: &HandlerSetConfig) -> Vec<Arc<dyn IntrinsicHandler>> {
    vec![
        Arc::new(LogicalNot),
        Arc::new(RegexPartialMatch),
        Arc::new(PromptTemplate),
        Arc::new(Logger),
        Arc::new(Conditional),
        Arc::new(SerialChain),
        Arc::new(BreakableChain),
        Arc::new(Fallback),
        Arc::new(ParallelMap),
        Arc::new(Repeat),
        Arc::new(While),
        Arc::new(RepeatedConditionalChain),
        Arc::new(ModelInference::new(config.model_inference_map.clone())),
        Arc::new(CustomFunction::new(config.custom_function_map.clone())),
    ]
}

/// The string static parameter, or `missing` as an `InvalidArgument`.
fn static_str<'a>(intrinsic: &'a Intrinsic, missing: &str) -> Result<&'a str> {
    intrinsic
        .static_parameter()
        .and_then(Value::as_str)
        .ok_or_else(|| invalid_argument(missing))
}

/// The struct static parameter's elements, or `missing` as an `InvalidArgument`.
fn static_struct<'a>(intrinsic: &'a Intrinsic, missing: &str) -> Result<&'a [Value]> {
    intrinsic
        .static_parameter()
        .and_then(Value::as_struct)
        .ok_or_else(|| invalid_argument(missing))
}

/// A `num_steps` parameter as a loop bound.
fn step_count(steps: &Value) -> Result<usize> {
    steps
        .as_int32()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            invalid_argument(format!(
                "Expected a non-negative int32 step count, got {steps}."
            ))
        })
}
