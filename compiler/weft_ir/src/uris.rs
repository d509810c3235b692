//! URIs of the built-in intrinsics.

/// Boolean complement. No static parameter; one boolean argument.
pub const LOGICAL_NOT: &str = "logical_not";

/// Partial regex match. Static parameter: pattern string. Argument: string.
/// Returns a boolean.
pub const REGEX_PARTIAL_MATCH: &str = "regex_partial_match";

/// Prompt construction. Static parameter: template string with `{name}`
/// placeholders. Argument: a string, or a struct of labelled strings.
pub const PROMPT_TEMPLATE: &str = "prompt_template";

/// Logs its argument and returns it unchanged. No static parameter.
pub const LOGGER: &str = "logger";

/// Lazy two-way branch. Static parameter: struct labelled `then` / `else`.
/// Argument: boolean.
pub const CONDITIONAL: &str = "conditional";

/// `h(g(f(x)))`. Static parameter: non-empty struct of functions.
pub const SERIAL_CHAIN: &str = "serial_chain";

/// First candidate that succeeds. Static parameter: non-empty struct of
/// functions, tried in order.
pub const FALLBACK: &str = "fallback";

/// Applies one function to every element of a struct argument in parallel.
pub const PARALLEL_MAP: &str = "parallel_map";

/// Model call. Static parameter: model URI string. Argument: the prompt.
pub const MODEL_INFERENCE: &str = "model_inference";

/// Host-provided function. Static parameter: function URI string.
pub const CUSTOM_FUNCTION: &str = "custom_function";

/// Applies the body a fixed number of times. Static parameter: struct of
/// `num_steps` (int32) and `body_fn`.
pub const REPEAT: &str = "repeat";

/// Loop while `condition_fn(state)` holds, replacing the state with
/// `body_fn(state)`. The condition is checked before the first iteration.
pub const WHILE: &str = "while";

/// Chain whose boolean-returning stages act as breaks: `true` stops the
/// chain, `false` keeps the state, anything else becomes the new state.
pub const BREAKABLE_CHAIN: &str = "breakable_chain";

/// A breakable chain repeated up to `num_steps` times. Static parameter:
/// `num_steps` (int32) followed by the chain's functions.
pub const REPEATED_CONDITIONAL_CHAIN: &str = "repeated_conditional_chain";
