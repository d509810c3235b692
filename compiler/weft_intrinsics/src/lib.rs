//! Weft intrinsics - the pluggable primitive operations
//!
//! An intrinsic is named by URI inside the IR and implemented here by an
//! [`IntrinsicHandler`]. Executors look handlers up in an
//! [`IntrinsicHandlerSet`], built from a [`HandlerSetConfig`].
//!
//! Built-ins:
//! - Pure: `logical_not`, `regex_partial_match`, `prompt_template`, `logger`
//! - Host-backed: `model_inference`, `custom_function`, resolved through
//!   the [`HostFnMap`]s in the config
//! - Control flow: `conditional`, `serial_chain`, `breakable_chain`,
//!   `fallback`, `parallel_map`, `repeat`, `while`,
//!   `repeated_conditional_chain`
//!
//! Control-flow handlers drive sub-computations through the
//! [`HandlerContext`] they are given and never evaluate anything the
//! executor did not ask for.

mod config;
mod handler;
pub mod handlers;

pub use config::{create_handler_set, HandlerSetConfig};
pub use handler::{HandlerContext, IntrinsicHandler, IntrinsicHandlerSet};
pub use handlers::{HostFn, HostFnMap};
pub use weft_ir::uris;
