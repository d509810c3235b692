use std::sync::Arc;

use pretty_assertions::assert_eq;
use weft_ir::{ErrorKind, Result, Value};

use super::*;

/// Answers every call with a fixed tag, so tests can tell contexts apart.
struct Tagged(&'static str);

impl Context for Tagged {
    fn call(&self, _function: &Value, _args: &[Value]) -> Result<Value> {
        Ok(Value::string(self.0))
    }
}

fn tagged(tag: &'static str) -> Arc<dyn Context> {
    Arc::new(Tagged(tag))
}

fn current_tag(stack: &ContextStack) -> Option<String> {
    let ctx = stack.current_context()?;
    let result = ctx.call(&Value::reference("f"), &[]).unwrap();
    result.as_str().map(str::to_string)
}

#[test]
fn empty_stack_has_no_context() {
    assert!(ContextStack::new().current_context().is_none());
}

#[test]
fn default_is_current_when_nothing_nested() {
    let stack = ContextStack::with_default(tagged("default"));
    assert_eq!(current_tag(&stack).as_deref(), Some("default"));
}

#[test]
fn set_default_replaces() {
    let stack = ContextStack::with_default(tagged("one"));
    stack.set_default_context(tagged("two"));
    assert_eq!(current_tag(&stack).as_deref(), Some("two"));
}

#[test]
fn most_recent_nested_wins() {
    let stack = ContextStack::with_default(tagged("default"));
    let a = tagged("a");
    let b = tagged("b");
    stack.append_nested_context(Arc::clone(&a));
    assert_eq!(current_tag(&stack).as_deref(), Some("a"));
    stack.append_nested_context(Arc::clone(&b));
    assert_eq!(current_tag(&stack).as_deref(), Some("b"));
    assert_eq!(stack.depth(), 2);

    stack.remove_nested_context(&b).unwrap();
    assert_eq!(current_tag(&stack).as_deref(), Some("a"));
    stack.remove_nested_context(&a).unwrap();
    assert_eq!(current_tag(&stack).as_deref(), Some("default"));
}

#[test]
fn remove_from_empty_fails() {
    let stack = ContextStack::new();
    let err = stack.remove_nested_context(&tagged("x")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FailedPrecondition);
    assert_eq!(err.message(), "No nested context on the stack.");
}

#[test]
fn remove_non_top_fails_and_keeps_stack() {
    let stack = ContextStack::new();
    let a = tagged("a");
    let b = tagged("b");
    stack.append_nested_context(Arc::clone(&a));
    stack.append_nested_context(Arc::clone(&b));

    let err = stack.remove_nested_context(&a).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FailedPrecondition);
    assert_eq!(err.message(), "Can only remove the top context from the stack.");
    assert_eq!(stack.depth(), 2);
    assert_eq!(current_tag(&stack).as_deref(), Some("b"));
}

#[test]
fn identity_not_equality_decides_top() {
    let stack = ContextStack::new();
    stack.append_nested_context(tagged("same"));
    // A different instance with identical behavior is not the top.
    assert!(stack.remove_nested_context(&tagged("same")).is_err());
}

#[test]
fn process_wide_stack_is_shared() {
    let a = context_stack();
    let b = context_stack();
    assert!(Arc::ptr_eq(&a, &b));
}
