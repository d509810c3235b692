//! Weft IR - portable computation graphs
//!
//! This crate holds the data model every other weft crate speaks:
//! - [`Value`] trees: scalars, structs, selections, calls, references and
//!   intrinsic descriptors
//! - [`Type`] trees mirroring value shapes, compared structurally
//! - The canonical byte encoding used as a dedup key and on the wire
//! - The shared [`Error`] taxonomy
//!
//! # Design
//!
//! - **Closed shapes**: `ValueKind` and `Type` are plain enums. Consumers
//!   match exhaustively, so a new shape is a compile error at every site
//!   that has not decided how to handle it.
//! - **Value semantics**: trees are owned and cloned across component
//!   boundaries; nothing is shared mutably once built.
//! - **Write-once annotations**: a node's type is set at most once.

pub mod build;
mod encode;
pub mod error;
mod stack;
mod ty;
pub mod uris;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use stack::ensure_sufficient_stack;
pub use ty::{FunctionType, ScalarKind, Type};
pub use value::{Call, Intrinsic, Scalar, Selection, Value, ValueKind};
