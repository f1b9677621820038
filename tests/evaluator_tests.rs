//! Integration tests for the expression-evaluator function.
//!
//! These exercise the full request cycle: raw event in, API-Gateway-shaped
//! response out.

mod common;

use calc_functions::handlers::evaluate;
use common::*;
use serde_json::json;

// =============================================================================
// Success Responses
// =============================================================================

#[tokio::test]
async fn evaluates_a_simple_sum() {
    let response = evaluate::handle(expression_event("2+2")).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(parse_body(&response.body), json!({ "result": 4 }));
}

#[tokio::test]
async fn respects_operator_precedence() {
    let response = evaluate::handle(expression_event("2+3*4")).await.unwrap();
    assert_eq!(parse_body(&response.body), json!({ "result": 14 }));
}

#[tokio::test]
async fn division_yields_a_float_result() {
    let response = evaluate::handle(expression_event("7/2")).await.unwrap();
    assert_eq!(parse_body(&response.body), json!({ "result": 3.5 }));
}

#[tokio::test]
async fn power_binds_tighter_than_unary_minus() {
    let response = evaluate::handle(expression_event("-2**2")).await.unwrap();
    assert_eq!(parse_body(&response.body), json!({ "result": -4 }));
}

#[tokio::test]
async fn success_response_carries_json_content_type() {
    let response = evaluate::handle(expression_event("1+1")).await.unwrap();

    let headers = response.headers.expect("evaluator always sets headers");
    assert_eq!(
        headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

// =============================================================================
// Error Responses
// =============================================================================

#[tokio::test]
async fn empty_expression_is_rejected() {
    let response = evaluate::handle(expression_event("")).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(
        parse_body(&response.body),
        json!({ "error": "No expression provided" })
    );
}

#[tokio::test]
async fn missing_body_behaves_like_an_empty_request() {
    let response = evaluate::handle(raw_body_event(None)).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(
        parse_body(&response.body),
        json!({ "error": "No expression provided" })
    );
}

#[tokio::test]
async fn malformed_body_surfaces_the_parse_error() {
    let response = evaluate::handle(raw_body_event(Some("not json")))
        .await
        .unwrap();

    assert_eq!(response.status_code, 400);
    let body = parse_body(&response.body);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid expression: "));
}

#[tokio::test]
async fn division_by_zero_is_rejected() {
    let response = evaluate::handle(expression_event("1/0")).await.unwrap();

    assert_eq!(response.status_code, 400);
    let body = parse_body(&response.body);
    assert_eq!(
        body["error"].as_str().unwrap(),
        "Invalid expression: division by zero"
    );
}

#[tokio::test]
async fn syntax_errors_are_rejected() {
    let response = evaluate::handle(expression_event("2 +")).await.unwrap();

    assert_eq!(response.status_code, 400);
    let message = parse_body(&response.body)["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.starts_with("Invalid expression: "));
}

#[tokio::test]
async fn code_like_expressions_never_execute() {
    let response = evaluate::handle(expression_event("__import__('os').system('id')"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 400);
    let message = parse_body(&response.body)["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.starts_with("Invalid expression: "));
}

#[tokio::test]
async fn non_finite_results_are_rejected() {
    let response = evaluate::handle(expression_event("1e308 * 10")).await.unwrap();

    assert_eq!(response.status_code, 400);
    let message = parse_body(&response.body)["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("not a finite number"));
}

#[tokio::test]
async fn error_responses_carry_json_content_type() {
    let response = evaluate::handle(expression_event("")).await.unwrap();

    let headers = response.headers.expect("evaluator always sets headers");
    assert_eq!(
        headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}
