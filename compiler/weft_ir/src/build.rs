//! Constructors for common IR nodes.
//!
//! Thin wrappers that spell out the static-parameter layout each built-in
//! intrinsic expects, so authoring code never assembles those by hand.

use crate::uris;
use crate::value::Value;

pub fn create_reference(name: impl Into<String>) -> Value {
    Value::reference(name)
}

pub fn create_call(function: Value, argument: Value) -> Value {
    Value::call(function, argument)
}

pub fn create_struct(elements: impl IntoIterator<Item = Value>) -> Value {
    Value::structure(elements)
}

pub fn create_selection(source: Value, index: i32) -> Value {
    Value::selection(source, index)
}

pub fn create_intrinsic(uri: impl Into<String>, static_parameter: Option<Value>) -> Value {
    Value::intrinsic(uri, static_parameter)
}

pub fn create_logical_not() -> Value {
    Value::intrinsic(uris::LOGICAL_NOT, None)
}

pub fn create_regex_partial_match(pattern: impl Into<String>) -> Value {
    Value::intrinsic(uris::REGEX_PARTIAL_MATCH, Some(Value::string(pattern)))
}

pub fn create_prompt_template(template: impl Into<String>) -> Value {
    Value::intrinsic(uris::PROMPT_TEMPLATE, Some(Value::string(template)))
}

pub fn create_logger() -> Value {
    Value::intrinsic(uris::LOGGER, None)
}

pub fn create_conditional(then_fn: Value, else_fn: Value) -> Value {
    Value::intrinsic(
        uris::CONDITIONAL,
        Some(Value::structure([
            then_fn.with_label("then"),
            else_fn.with_label("else"),
        ])),
    )
}

pub fn create_serial_chain(fns: impl IntoIterator<Item = Value>) -> Value {
    Value::intrinsic(uris::SERIAL_CHAIN, Some(Value::structure(fns)))
}

pub fn create_fallback(candidates: impl IntoIterator<Item = Value>) -> Value {
    Value::intrinsic(
        uris::FALLBACK,
        Some(Value::structure(
            candidates
                .into_iter()
                .map(|candidate| candidate.with_label("candidate_fn")),
        )),
    )
}

pub fn create_parallel_map(map_fn: Value) -> Value {
    Value::intrinsic(uris::PARALLEL_MAP, Some(map_fn.with_label("map_fn")))
}

pub fn create_model_inference(model_uri: impl Into<String>) -> Value {
    Value::intrinsic(uris::MODEL_INFERENCE, Some(Value::string(model_uri)))
}

pub fn create_custom_function(fn_uri: impl Into<String>) -> Value {
    Value::intrinsic(uris::CUSTOM_FUNCTION, Some(Value::string(fn_uri)))
}

pub fn create_repeat(num_steps: i32, body_fn: Value) -> Value {
    Value::intrinsic(
        uris::REPEAT,
        Some(Value::structure([
            Value::int32(num_steps).with_label("num_steps"),
            body_fn.with_label("body_fn"),
        ])),
    )
}

pub fn create_while(condition_fn: Value, body_fn: Value) -> Value {
    Value::intrinsic(
        uris::WHILE,
        Some(Value::structure([
            condition_fn.with_label("condition_fn"),
            body_fn.with_label("body_fn"),
        ])),
    )
}

pub fn create_breakable_chain(fns: impl IntoIterator<Item = Value>) -> Value {
    Value::intrinsic(uris::BREAKABLE_CHAIN, Some(Value::structure(fns)))
}

pub fn create_repeated_conditional_chain(
    num_steps: i32,
    fns: impl IntoIterator<Item = Value>,
) -> Value {
    let steps = Value::int32(num_steps).with_label("num_steps");
    Value::intrinsic(
        uris::REPEATED_CONDITIONAL_CHAIN,
        Some(Value::structure(std::iter::once(steps).chain(fns))),
    )
}

#[cfg(test)]
mod tests;
