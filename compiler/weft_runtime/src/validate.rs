//! Up-front well-formedness check.
//!
//! Before anything runs, every intrinsic descriptor reachable from the
//! graph is checked: call sites, static parameters (branches, chains,
//! candidates) and the locals that references lead to. Each local is
//! visited once.
//!
//! Intrinsics without a registered handler are left to dispatch, which
//! fails `Unimplemented` only if the call is actually made.

use rustc_hash::FxHashSet;
use weft_authoring::Locals;
use weft_intrinsics::IntrinsicHandlerSet;
use weft_ir::error::invalid_argument;
use weft_ir::{ensure_sufficient_stack, Result, Value, ValueKind};

/// Check every descriptor reachable from `graph`.
#[tracing::instrument(level = "trace", skip_all)]
pub(crate) fn check_graph(
    handlers: &IntrinsicHandlerSet,
    graph: &Value,
    locals: &Locals,
) -> Result<()> {
    let mut walker = Walker {
        handlers,
        locals,
        visited: FxHashSet::default(),
        checked: 0,
    };
    walker.visit(graph)?;
    tracing::debug!(descriptors = walker.checked, "graph is well formed");
    Ok(())
}

struct Walker<'a> {
    handlers: &'a IntrinsicHandlerSet,
    locals: &'a Locals,
    visited: FxHashSet<String>,
    checked: usize,
}

impl Walker<'_> {
    fn visit(&mut self, value: &Value) -> Result<()> {
        ensure_sufficient_stack(|| match value.kind() {
            ValueKind::Scalar(_) => Ok(()),
            ValueKind::Struct(elements) => elements.iter().try_for_each(|e| self.visit(e)),
            ValueKind::Selection(selection) => self.visit(&selection.source),
            ValueKind::Call(call) => {
                self.visit(&call.function)?;
                self.visit(&call.argument)
            }
            ValueKind::Reference(name) => {
                if !self.visited.insert(name.clone()) {
                    return Ok(());
                }
                let bound = self
                    .locals
                    .resolve(name)?
                    .ok_or_else(|| invalid_argument(format!("Unknown reference {name}.")))?;
                self.visit(&bound)
            }
            ValueKind::Intrinsic(intrinsic) => {
                if self.handlers.contains(&intrinsic.uri) {
                    self.handlers
                        .handler(&intrinsic.uri)?
                        .check_well_formed(intrinsic)?;
                    self.checked += 1;
                }
                match intrinsic.static_parameter() {
                    Some(parameter) => self.visit(parameter),
                    None => Ok(()),
                }
            }
        })
    }
}
