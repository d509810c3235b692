use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use weft_ir::build::{create_logical_not, create_prompt_template};
use weft_ir::{ErrorKind, Result, Value};

use super::*;

/// Records every call and echoes the function back.
#[derive(Default)]
struct Recording {
    calls: Mutex<Vec<(Value, Vec<Value>)>>,
}

impl Context for Recording {
    fn call(&self, function: &Value, args: &[Value]) -> Result<Value> {
        self.calls.lock().push((function.clone(), args.to_vec()));
        Ok(function.clone())
    }
}

#[test]
fn call_without_context_fails() {
    let stack = ContextStack::new();
    let err = Computation::new(create_logical_not())
        .call_in(&stack, &[Value::boolean(true)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FailedPrecondition);
    assert_eq!(err.message(), "No context available.");
}

#[test]
fn call_delegates_to_current_context() {
    let recording = Arc::new(Recording::default());
    let stack = ContextStack::with_default(recording.clone());
    let comp = Computation::new(create_logical_not());
    let out = comp.call_in(&stack, &[Value::boolean(true)]).unwrap();
    assert_eq!(out.portable_ir(), &create_logical_not());
    assert_eq!(
        *recording.calls.lock(),
        vec![(create_logical_not(), vec![Value::boolean(true)])]
    );
}

#[test]
fn trace_builds_graph_and_pops_context() {
    let stack = ContextStack::new();
    let not = Computation::new(create_logical_not());
    let graph = trace(&stack, || {
        let once = not.call_in(&stack, &[Value::boolean(true)])?;
        let twice = not.call_in(&stack, &[once.into()])?;
        Ok(twice.into_portable_ir())
    })
    .unwrap();

    assert_eq!(stack.depth(), 0);
    assert_eq!(
        graph.root,
        Value::call(
            Value::reference("v_1"),
            Value::structure([Value::reference("v_2")]),
        )
    );
    let names: Vec<_> = graph.bindings().unwrap().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["v_0", "v_1", "v_2"]);
}

#[test]
fn trace_pops_context_on_error() {
    let stack = ContextStack::new();
    let not = Computation::new(create_logical_not());
    let err = trace(&stack, || {
        not.call_in(&stack, &[])?;
        Ok(Value::boolean(true))
    })
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn trace_copies_locals_when_context_escapes() {
    let stack = ContextStack::new();
    let template = Computation::new(create_prompt_template("Hi {name}"));
    let mut escaped = None;
    let graph = trace(&stack, || {
        escaped = stack.current_context();
        Ok(template.call_in(&stack, &[Value::string("Ada")])?.into())
    })
    .unwrap();
    assert!(escaped.is_some());
    assert_eq!(graph.locals.len(), 2);
}

#[test]
fn conversions_round_trip() {
    let v = Value::int32(4);
    let c = Computation::from(v.clone());
    assert_eq!(Value::from(c), v);
}

#[test]
fn body_error_wins_over_failed_pop() {
    let stack = ContextStack::new();
    let err = trace(&stack, || {
        // Leaves a context above the tracer, so popping the tracer fails.
        stack.append_nested_context(Arc::new(Recording::default()));
        Err(weft_ir::error::invalid_argument("body failed"))
    })
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "body failed");
}

#[test]
fn failed_pop_reported_after_successful_body() {
    let stack = ContextStack::new();
    let err = trace(&stack, || {
        stack.append_nested_context(Arc::new(Recording::default()));
        Ok(Value::boolean(true))
    })
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FailedPrecondition);
    assert_eq!(err.message(), "Can only remove the top context from the stack.");
}
