//! Evaluator function handler.
//!
//! Parses a JSON-encoded request body, evaluates the contained arithmetic
//! expression with the sandboxed engine, and wraps the outcome in an
//! API-Gateway-shaped response. Every failure mode is folded into a 400
//! response; the handler itself never returns a function error.

use std::collections::HashMap;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::json;

use crate::envelope::{EvalEvent, EvalRequest, FunctionResponse};
use crate::eval::{self, Number};

/// Body substituted when the event carries none.
const EMPTY_BODY: &str = "{}";

/// Content type attached to every evaluator response.
const CONTENT_TYPE_JSON: &str = "application/json";

/// Lambda handler for the evaluator function.
pub async fn handle(event: LambdaEvent<EvalEvent>) -> Result<FunctionResponse, Error> {
    let (payload, _context) = event.into_parts();

    tracing::info!(body = ?payload.body, "received event");

    let body = payload.body.as_deref().unwrap_or(EMPTY_BODY);
    let request: EvalRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(%err, "malformed request body");
            return invalid_expression(&err.to_string());
        }
    };

    if request.expression.is_empty() {
        tracing::warn!("request carried no expression");
        return error_response("No expression provided".to_string());
    }

    tracing::info!(expression = %request.expression, "evaluating expression");
    match eval::evaluate(&request.expression) {
        Ok(result) => {
            tracing::info!(%result, "evaluation succeeded");
            success_response(result)
        }
        Err(err) => {
            tracing::warn!(%err, "evaluation failed");
            invalid_expression(&err.to_string())
        }
    }
}

fn response_headers() -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())])
}

fn success_response(result: Number) -> Result<FunctionResponse, Error> {
    let body = serde_json::to_string(&json!({ "result": result }))?;
    Ok(FunctionResponse::ok(body).with_headers(response_headers()))
}

fn error_response(message: String) -> Result<FunctionResponse, Error> {
    let body = serde_json::to_string(&json!({ "error": message }))?;
    Ok(FunctionResponse::bad_request(body).with_headers(response_headers()))
}

/// Error response for anything the expression pipeline rejected; the
/// underlying error text is surfaced to the caller verbatim.
fn invalid_expression(detail: &str) -> Result<FunctionResponse, Error> {
    error_response(format!("Invalid expression: {detail}"))
}
