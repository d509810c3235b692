use pretty_assertions::assert_eq;

use super::*;

#[test]
fn logical_not_has_no_static_parameter() {
    let v = create_logical_not();
    let intrinsic = v.as_intrinsic().unwrap();
    assert_eq!(intrinsic.uri, uris::LOGICAL_NOT);
    assert_eq!(intrinsic.static_parameter(), None);
}

#[test]
fn regex_pattern_is_string_parameter() {
    let v = create_regex_partial_match("^a+$");
    let param = v.as_intrinsic().unwrap().static_parameter().unwrap();
    assert_eq!(param.as_str(), Some("^a+$"));
}

#[test]
fn conditional_labels_branches() {
    let v = create_conditional(Value::string("yes"), Value::string("no"));
    let param = v.as_intrinsic().unwrap().static_parameter().unwrap();
    assert_eq!(param.field("then").and_then(Value::as_str), Some("yes"));
    assert_eq!(param.field("else").and_then(Value::as_str), Some("no"));
}

#[test]
fn fallback_keeps_candidate_order() {
    let v = create_fallback([create_logger(), create_logical_not()]);
    let param = v.as_intrinsic().unwrap().static_parameter().unwrap();
    let order: Vec<_> = param
        .as_struct()
        .unwrap()
        .iter()
        .map(|c| c.as_intrinsic().unwrap().uri.as_str())
        .collect();
    assert_eq!(order, vec![uris::LOGGER, uris::LOGICAL_NOT]);
}

#[test]
fn call_wraps_function_and_argument() {
    let v = create_call(create_reference("v_1"), create_struct([create_reference("v_0")]));
    assert_eq!(v.to_string(), "v_1(<v_0>)");
}

#[test]
fn model_inference_names_the_model() {
    let v = create_model_inference("test_model");
    let intrinsic = v.as_intrinsic().unwrap();
    assert_eq!(intrinsic.uri, uris::MODEL_INFERENCE);
    assert_eq!(intrinsic.static_parameter().and_then(Value::as_str), Some("test_model"));
}

#[test]
fn while_labels_condition_and_body() {
    let v = create_while(create_logical_not(), create_logger());
    let param = v.as_intrinsic().unwrap().static_parameter().unwrap();
    let labels: Vec<_> = param.as_struct().unwrap().iter().map(Value::label).collect();
    assert_eq!(labels, vec![Some("condition_fn"), Some("body_fn")]);
}

#[test]
fn repeated_conditional_chain_leads_with_step_count() {
    let v = create_repeated_conditional_chain(100, [create_logger(), create_logical_not()]);
    let param = v.as_intrinsic().unwrap().static_parameter().unwrap();
    let elements = param.as_struct().unwrap();
    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].label(), Some("num_steps"));
    assert_eq!(elements[0].as_int32(), Some(100));
}

#[test]
fn repeat_labels_step_count_and_body() {
    let v = create_repeat(3, create_logger());
    let param = v.as_intrinsic().unwrap().static_parameter().unwrap();
    assert_eq!(param.field("num_steps").and_then(Value::as_int32), Some(3));
    assert!(param.field("body_fn").is_some());
}
