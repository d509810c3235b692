//! Handler set assembly.

use std::fmt;
use std::sync::Arc;

use weft_ir::{Result, Value};

use crate::handler::{IntrinsicHandler, IntrinsicHandlerSet};
use crate::handlers::{self, HostFnMap};

/// What goes into a freshly created [`IntrinsicHandlerSet`].
#[derive(Clone)]
pub struct HandlerSetConfig {
    /// Register every built-in handler first.
    pub include_builtins: bool,
    /// Registered after the built-ins; a matching URI replaces the built-in.
    pub custom_handlers: Vec<Arc<dyn IntrinsicHandler>>,
    /// Backends for `model_inference`, keyed by model URI.
    pub model_inference_map: HostFnMap,
    /// Functions for `custom_function`, keyed by function URI.
    pub custom_function_map: HostFnMap,
}

impl HandlerSetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an empty registry.
    #[must_use]
    pub fn without_builtins(mut self) -> Self {
        self.include_builtins = false;
        self
    }

    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn IntrinsicHandler>) -> Self {
        self.custom_handlers.push(handler);
        self
    }

    #[must_use]
    pub fn with_model(
        mut self,
        model_uri: impl Into<String>,
        model: impl Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.model_inference_map.insert(model_uri.into(), Arc::new(model));
        self
    }

    #[must_use]
    pub fn with_custom_function(
        mut self,
        fn_uri: impl Into<String>,
        function: impl Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.custom_function_map.insert(fn_uri.into(), Arc::new(function));
        self
    }
}

impl Default for HandlerSetConfig {
    fn default() -> Self {
        HandlerSetConfig {
            include_builtins: true,
            custom_handlers: Vec::new(),
            model_inference_map: HostFnMap::default(),
            custom_function_map: HostFnMap::default(),
        }
    }
}

impl fmt::Debug for HandlerSetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSetConfig")
            .field("include_builtins", &self.include_builtins)
            .field(
                "custom_handlers",
                &self.custom_handlers.iter().map(|h| h.uri()).collect::<Vec<_>>(),
            )
            .field("models", &sorted_keys(&self.model_inference_map))
            .field("custom_functions", &sorted_keys(&self.custom_function_map))
            .finish()
    }
}

fn sorted_keys(map: &HostFnMap) -> Vec<&str> {
    let mut keys: Vec<_> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

/// Build a handler registry from `config`.
#[tracing::instrument(level = "debug", skip_all, fields(builtins = config.include_builtins))]
pub fn create_handler_set(config: HandlerSetConfig) -> IntrinsicHandlerSet {
    let set = IntrinsicHandlerSet::new();
    if config.include_builtins {
        for handler in handlers::builtins(&config) {
            set.add_handler(handler);
        }
    }
    for handler in config.custom_handlers {
        set.add_handler(handler);
    }
    set
}
