use ld_context_check as ldc;
use ldc::ErrorKind;
use serde_json::json;

// A number value for a term fails every one of the seven definition-value variants
// and is reported once, at the term's path.
#[test]
fn test_number_term_value() {
    let out = ldc::validate(&json!({"name": 42}));
    assert!(!out.valid);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].path.to_json_pointer(), "/name");
    assert_eq!(out.errors[0].kind, ErrorKind::InvalidContextDefinitionValue);
}

#[test]
fn test_scalar_roots() {
    for v in [json!(0), json!(-3.5), json!(true), json!(false)] {
        let out = ldc::validate(&v);
        assert!(!out.valid, "{v} should be invalid");
        assert_eq!(out.errors[0].kind, ErrorKind::TypeMismatch);
        assert!(out.errors[0].message.contains("context definition (object)"));
    }
}

#[test]
fn test_nested_array_element() {
    let out = ldc::validate(&json!([["http://example.org/"]]));
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, ErrorKind::InvalidArrayElement);
    assert_eq!(out.errors[0].path.to_json_pointer(), "/0");
}

#[test]
fn test_array_term_value() {
    let out = ldc::validate(&json!([{"tags": ["a", "b"]}]));
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].path.to_json_pointer(), "/0/tags");
    assert!(out.errors[0].message.ends_with("found array"));
}

#[test]
fn test_malformed_text_is_decode_error() {
    match ldc::validate_str("[null,") {
        Err(ldc::Error::Decode(_)) => {}
        other => panic!("expected decode error, got {other:?}"),
    }
}
