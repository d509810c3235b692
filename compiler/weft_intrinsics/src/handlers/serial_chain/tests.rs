use pretty_assertions::assert_eq;
use weft_ir::build::{create_logical_not, create_prompt_template, create_serial_chain};
use weft_ir::{ErrorKind, Value};

use crate::handlers::testing::Direct;
use crate::HandlerContext;

#[test]
fn feeds_each_result_to_the_next() {
    let ctx = Direct::new();
    let chain = create_serial_chain([
        create_prompt_template("<{x}>"),
        create_prompt_template("[{y}]"),
    ]);
    let out = ctx.call(&chain, Value::string("a")).unwrap();
    assert_eq!(out, Value::string("[<a>]"));
}

#[test]
fn double_negation_is_identity() {
    let ctx = Direct::new();
    let chain = create_serial_chain([create_logical_not(), create_logical_not()]);
    assert_eq!(ctx.call(&chain, Value::boolean(true)).unwrap(), Value::boolean(true));
}

#[test]
fn empty_chain_rejected() {
    let err = Direct::new()
        .call(&create_serial_chain([]), Value::boolean(true))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "Expected at least one function in the chain.");
}

#[test]
fn stage_error_stops_the_chain() {
    let ctx = Direct::new();
    let chain = create_serial_chain([
        create_prompt_template("{x}"),
        create_logical_not(),
        Direct::failing_fn(),
    ]);
    let err = ctx.call(&chain, Value::string("a")).unwrap_err();
    assert_eq!(err.message(), "Argument does not contain boolean.");
    assert_eq!(ctx.failing.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}
