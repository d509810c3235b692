use std::sync::Arc;

use pretty_assertions::assert_eq;
use weft_ir::{uris, ErrorKind};

use super::*;
use crate::handlers::{Logger, LogicalNot};

#[test]
fn registry_starts_empty() {
    let set = IntrinsicHandlerSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn lookup_by_uri() {
    let set = IntrinsicHandlerSet::new();
    set.add_handler(Arc::new(LogicalNot));
    set.add_handler(Arc::new(Logger));
    assert_eq!(set.len(), 2);
    assert_eq!(set.handler(uris::LOGGER).unwrap().uri(), uris::LOGGER);
    assert!(set.contains(uris::LOGICAL_NOT));
}

#[test]
fn unknown_uri_is_unimplemented() {
    let set = IntrinsicHandlerSet::new();
    let err = set.handler("model_inference").err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Unimplemented);
    assert_eq!(err.message(), "No handler for intrinsic model_inference.");
}

#[test]
fn re_registering_replaces() {
    let set = IntrinsicHandlerSet::new();
    let first: Arc<dyn IntrinsicHandler> = Arc::new(LogicalNot);
    let second: Arc<dyn IntrinsicHandler> = Arc::new(LogicalNot);
    set.add_handler(first);
    set.add_handler(Arc::clone(&second));
    assert_eq!(set.len(), 1);
    let found = set.handler(uris::LOGICAL_NOT).unwrap();
    assert!(Arc::ptr_eq(&found, &second));
}
