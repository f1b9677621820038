//! Shared test utilities for the handler integration tests.
//!
//! Helpers for building Lambda events with a default test context and for
//! pulling apart response bodies.

#![allow(dead_code)] // used unevenly across integration test files

use calc_functions::envelope::{EvalEvent, GreetEvent};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::Value;

/// Wraps a payload in a `LambdaEvent` with a default test context.
pub fn lambda_event<T>(payload: T) -> LambdaEvent<T> {
    LambdaEvent::new(payload, Context::default())
}

/// Builds a greeter event carrying the given name.
pub fn greet_event(name: Option<&str>) -> LambdaEvent<GreetEvent> {
    lambda_event(GreetEvent {
        name: name.map(String::from),
    })
}

/// Builds an evaluator event whose body is the JSON encoding of an
/// expression request.
pub fn expression_event(expression: &str) -> LambdaEvent<EvalEvent> {
    let body = serde_json::json!({ "expression": expression }).to_string();
    raw_body_event(Some(&body))
}

/// Builds an evaluator event with a raw (possibly absent) body string.
pub fn raw_body_event(body: Option<&str>) -> LambdaEvent<EvalEvent> {
    lambda_event(EvalEvent {
        body: body.map(String::from),
    })
}

/// Parses a response body back into JSON for assertions.
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).expect("response body is valid JSON")
}
