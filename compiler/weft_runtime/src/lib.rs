//! Weft runtime - evaluating traced graphs in-process
//!
//! [`Executor`] walks a graph against the locals it was traced with and
//! dispatches intrinsic calls to an
//! [`IntrinsicHandlerSet`](weft_intrinsics::IntrinsicHandlerSet).
//! [`InterpretingContext`] plugs the executor into the authoring context
//! stack so computations run eagerly instead of being traced.

mod executor;
mod interpret;
mod validate;

pub use executor::{Executor, ExecutorConfig};
pub use interpret::InterpretingContext;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=weft_runtime=debug`
/// or `RUST_LOG=trace`; does nothing when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Fails only if the host already installed a global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
