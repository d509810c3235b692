//! Type system for weft IR.
//!
//! - [`check_equal`]: structural equality of two [`weft_ir::Type`] trees
//! - [`infer_types`]: bottom-up annotation of a [`weft_ir::Value`] tree
//!
//! Both are fail-fast: the first mismatch aborts the call and there is
//! no partial result.

mod check;
mod infer;

pub use check::check_equal;
pub use infer::infer_types;
