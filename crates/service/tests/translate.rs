use std::sync::Arc;

use serde_json::{json, Map, Value};

use service::auth::catalog::{ErrorCatalog, DEFAULT_KEY};
use service::auth::domain::AuthFailure;
use service::auth::sink::BufferSink;
use service::auth::AuthErrorTranslator;

fn context(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

fn capture_translator() -> (AuthErrorTranslator, BufferSink) {
    let sink = BufferSink::default();
    let translator = AuthErrorTranslator::new(ErrorCatalog::builtin(), Arc::new(sink.clone()));
    (translator, sink)
}

#[test]
fn known_code_produces_exact_normalized_result() {
    let (translator, _sink) = capture_translator();
    let failure = AuthFailure::from_code("auth/user-not-found");

    let result = translator.handle(Some(&failure), Map::new());

    assert!(!result.success);
    assert_eq!(result.message, "No user found with this email address.");
    assert_eq!(result.code.as_deref(), Some("auth/user-not-found"));
    assert!(result.context.is_empty());
}

#[test]
fn context_fields_are_merged_into_result() {
    let (translator, _sink) = capture_translator();
    let failure = AuthFailure::from_code("auth/email-already-in-use");

    let result = translator.handle(Some(&failure), context(&[("field", json!("email"))]));

    assert_eq!(result.message, "An account with this email address already exists.");
    assert_eq!(result.context.get("field"), Some(&json!("email")));
}

#[test]
fn reserved_context_keys_are_dropped() {
    let (translator, _sink) = capture_translator();
    let failure = AuthFailure::from_code("auth/wrong-password");

    let result = translator.handle(
        Some(&failure),
        context(&[
            ("success", json!(true)),
            ("message", json!("spoofed")),
            ("code", json!("auth/none")),
            ("attempt", json!(3)),
        ]),
    );

    assert!(!result.success, "caller context must not flip the success flag");
    assert_eq!(result.message, "Incorrect password. Please try again.");
    assert_eq!(result.code.as_deref(), Some("auth/wrong-password"));
    assert_eq!(result.context.get("attempt"), Some(&json!(3)));
    assert!(!result.context.contains_key("success"));
    assert!(!result.context.contains_key("message"));
}

#[test]
fn absent_error_yields_default_message_and_no_code() {
    let (translator, _sink) = capture_translator();

    let result = translator.handle(None, Map::new());

    assert!(!result.success);
    assert_eq!(result.message, "An unexpected error occurred. Please try again.");
    assert_eq!(result.code, None);
}

#[test]
fn unknown_code_degrades_to_generic_message() {
    let (translator, _sink) = capture_translator();
    let failure = AuthFailure::from_code("auth/made-up-code");

    let result = translator.handle(Some(&failure), Map::new());

    assert_eq!(result.message, "An unexpected error occurred. Please try again.");
    assert_eq!(result.code.as_deref(), Some("auth/made-up-code"));
}

#[test]
fn handle_is_idempotent_for_result_fields() {
    let (translator, _sink) = capture_translator();
    let failure = AuthFailure::from_code("auth/weak-password");

    let first = translator.handle(Some(&failure), context(&[("field", json!("password"))]));
    let second = translator.handle(Some(&failure), context(&[("field", json!("password"))]));

    assert_eq!(first, second);
}

#[test]
fn every_handle_call_reaches_the_sink() {
    let (translator, sink) = capture_translator();
    let failure = AuthFailure::from_code("auth/wrong-password");

    translator.handle(Some(&failure), Map::new());
    translator.handle(Some(&failure), Map::new());

    assert_eq!(sink.len(), 2, "raw-error diagnostics fire on every call");
    let entry = &sink.entries()[0];
    assert_eq!(entry.message, "Incorrect password. Please try again.");
    let original = entry.original.as_ref().expect("original error is attached");
    assert_eq!(original.get("code"), Some(&json!("auth/wrong-password")));
}

#[test]
fn raw_error_logging_can_be_disabled() {
    let sink = BufferSink::default();
    let translator = AuthErrorTranslator::new(ErrorCatalog::builtin(), Arc::new(sink.clone()))
        .log_raw_errors(false);

    let failure = AuthFailure::from_code("auth/user-disabled");
    let result = translator.handle(Some(&failure), Map::new());

    assert_eq!(result.message, "This account has been disabled.");
    assert!(sink.is_empty(), "disabled diagnostics must not reach the sink");
}

#[test]
fn provider_details_are_passed_through_to_the_sink() {
    let (translator, sink) = capture_translator();
    let failure: AuthFailure = serde_json::from_value(json!({
        "code": "auth/too-many-requests",
        "httpStatus": 429,
        "serverMessage": "QUOTA_EXCEEDED"
    }))
    .expect("failure shape");

    translator.handle(Some(&failure), Map::new());

    let entries = sink.entries();
    let original = entries[0].original.as_ref().expect("original");
    assert_eq!(original.get("httpStatus"), Some(&json!(429)));
    assert_eq!(original.get("serverMessage"), Some(&json!("QUOTA_EXCEEDED")));
}

#[test]
fn serialized_result_is_flat() {
    let (translator, _sink) = capture_translator();
    let failure = AuthFailure::from_code("auth/invalid-email");

    let result = translator.handle(Some(&failure), context(&[("field", json!("email"))]));
    let value = serde_json::to_value(&result).expect("serialize result");

    assert_eq!(
        value,
        json!({
            "success": false,
            "message": "Please enter a valid email address.",
            "code": "auth/invalid-email",
            "field": "email"
        })
    );
}

#[test]
fn absent_code_is_omitted_from_serialized_result() {
    let (translator, _sink) = capture_translator();

    let result = translator.handle(None, Map::new());
    let value = serde_json::to_value(&result).expect("serialize result");

    assert!(value.get("code").is_none(), "absent code serializes as an omitted field");
}

#[test]
fn translate_is_a_message_only_shortcut() {
    let (translator, sink) = capture_translator();

    assert_eq!(
        translator.translate(Some("auth/requires-recent-login")),
        "Please sign in again to complete this action."
    );
    assert!(sink.is_empty(), "message lookup alone emits no diagnostics");
}

#[test]
fn test_catalog_can_be_substituted() {
    let catalog = ErrorCatalog::new([
        ("auth/wrong-password", "Nope."),
        (DEFAULT_KEY, "Something broke."),
    ])
    .expect("minimal catalog");
    let sink = BufferSink::default();
    let translator = AuthErrorTranslator::new(Arc::new(catalog), Arc::new(sink));

    let failure = AuthFailure::from_code("auth/wrong-password");
    assert_eq!(translator.handle(Some(&failure), Map::new()).message, "Nope.");
    assert_eq!(translator.handle(None, Map::new()).message, "Something broke.");
}
