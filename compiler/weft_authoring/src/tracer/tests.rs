use pretty_assertions::assert_eq;
use weft_ir::build::{create_logical_not, create_regex_partial_match};
use weft_ir::{ErrorKind, Value};

use super::*;

#[test]
fn empty_args_rejected() {
    let ctx = TracingContext::new();
    let err = ctx.call(&create_logical_not(), &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "At least one argument is required.");
    assert!(ctx.locals().is_empty());
}

#[test]
fn call_emits_references_in_call_site_order() {
    let ctx = TracingContext::new();
    let out = ctx
        .call(
            &create_regex_partial_match("a"),
            &[Value::string("x"), Value::string("y")],
        )
        .unwrap();
    assert_eq!(
        out,
        Value::call(
            Value::reference("v_2"),
            Value::structure([Value::reference("v_0"), Value::reference("v_1")]),
        )
    );
    assert_eq!(ctx.locals().len(), 3);
}

#[test]
fn references_pass_through_unchanged() {
    let ctx = TracingContext::new();
    let r = Value::reference("param");
    assert_eq!(ctx.replace_with_reference(&r).unwrap(), r);
    assert!(ctx.locals().is_empty());
}

#[test]
fn identical_arguments_share_a_name() {
    let ctx = TracingContext::new();
    let f = create_logical_not();
    let first = ctx.call(&f, &[Value::boolean(true)]).unwrap();
    let size = ctx.locals().len();
    let second = ctx.call(&f, &[Value::boolean(true)]).unwrap();
    assert_eq!(first, second);
    assert_eq!(ctx.locals().len(), size);
}

#[test]
fn distinct_literals_get_names_in_first_seen_order() {
    let ctx = TracingContext::new();
    let a = ctx.replace_with_reference(&Value::string("a")).unwrap();
    let b = ctx.replace_with_reference(&Value::string("b")).unwrap();
    let a_again = ctx.replace_with_reference(&Value::string("a")).unwrap();
    assert_eq!(a.as_reference(), Some("v_0"));
    assert_eq!(b.as_reference(), Some("v_1"));
    assert_eq!(a_again.as_reference(), Some("v_0"));
}

#[test]
fn repeated_call_on_parameter_registers_function_once() {
    let ctx = TracingContext::new();
    let f = create_logical_not();
    let x = Value::reference("x");
    let first = ctx.call(&f, &[x.clone()]).unwrap();
    let second = ctx.call(&f, &[x]).unwrap();
    assert_eq!(first, second);
    assert_eq!(ctx.locals().len(), 1);
}

#[test]
fn repeated_call_on_literal_reuses_both_names() {
    let ctx = TracingContext::new();
    let f = create_logical_not();
    let first = ctx.call(&f, &[Value::boolean(false)]).unwrap();
    let second = ctx.call(&f, &[Value::boolean(false)]).unwrap();
    assert_eq!(first, second);
    assert_eq!(ctx.locals().len(), 2);
}

#[test]
fn nested_call_results_become_locals() {
    let ctx = TracingContext::new();
    let not = create_logical_not();
    let inner = ctx.call(&not, &[Value::boolean(true)]).unwrap();
    let outer = ctx.call(&not, &[inner.clone()]).unwrap();
    assert_eq!(
        outer,
        Value::call(
            Value::reference("v_1"),
            Value::structure([Value::reference("v_2")]),
        )
    );
    let bindings = decode_locals(ctx.locals()).unwrap();
    assert_eq!(
        bindings,
        vec![
            ("v_0".to_string(), Value::boolean(true)),
            ("v_1".to_string(), not),
            ("v_2".to_string(), inner),
        ]
    );
}

#[test]
fn taken_names_are_skipped() {
    let ctx = TracingContext::new();
    let first = ctx.replace_with_reference(&Value::int32(1)).unwrap();
    assert!(ctx.locals().bind("v_1", &Value::string("param")).unwrap());
    assert!(ctx.locals().bind("v_2", &Value::string("other")).unwrap());

    let second = ctx.replace_with_reference(&Value::int32(2)).unwrap();
    let third = ctx.replace_with_reference(&Value::int32(3)).unwrap();
    assert_eq!(first.as_reference(), Some("v_0"));
    assert_eq!(second.as_reference(), Some("v_3"));
    assert_eq!(third.as_reference(), Some("v_4"));
    assert_eq!(ctx.locals().len(), 5);
}

#[test]
fn hand_bound_value_is_reused() {
    let ctx = TracingContext::new();
    assert!(ctx.locals().bind("x", &Value::boolean(true)).unwrap());
    let r = ctx.replace_with_reference(&Value::boolean(true)).unwrap();
    assert_eq!(r.as_reference(), Some("x"));
    assert_eq!(ctx.locals().len(), 1);
}

#[test]
fn decode_orders_generated_names_numerically() {
    let ctx = TracingContext::new();
    for i in 0..12 {
        ctx.replace_with_reference(&Value::int32(i)).unwrap();
    }
    assert!(ctx.locals().bind("param", &Value::string("p")).unwrap());
    let names: Vec<_> = decode_locals(ctx.locals())
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let mut expected: Vec<_> = (0..12).map(|i| format!("v_{i}")).collect();
    expected.push("param".to_string());
    assert_eq!(names, expected);
}
