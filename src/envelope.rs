//! Lambda request/response envelope types.
//!
//! This module defines the input events the two functions accept and the
//! API-Gateway-shaped response they both return. Field names follow the
//! wire casing via explicit serde renames.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response payload returned by both Lambda functions.
///
/// The body is always valid JSON text and the status code is either 200
/// or 400; responses are built fresh per invocation and never mutated
/// after being returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionResponse {
    /// HTTP status code of the response
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Response headers, omitted entirely when none are set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,

    /// JSON-encoded response body
    pub body: String,
}

impl FunctionResponse {
    /// Status code for a successful invocation.
    pub const STATUS_OK: u16 = 200;
    /// Status code for a rejected request.
    pub const STATUS_BAD_REQUEST: u16 = 400;

    /// Creates a 200 response with the given JSON body text.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: Self::STATUS_OK,
            headers: None,
            body: body.into(),
        }
    }

    /// Creates a 400 response with the given JSON body text.
    pub fn bad_request(body: impl Into<String>) -> Self {
        Self {
            status_code: Self::STATUS_BAD_REQUEST,
            headers: None,
            body: body.into(),
        }
    }

    /// Attaches headers to the response.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Returns true if this is a success response.
    pub fn is_ok(&self) -> bool {
        self.status_code == Self::STATUS_OK
    }
}

/// Input event for the greeter function.
///
/// Unknown event keys are ignored; a missing `name` is not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetEvent {
    /// Optional name to greet
    #[serde(default)]
    pub name: Option<String>,
}

/// Input event for the evaluator function.
///
/// Mirrors the API Gateway proxy shape: the request body arrives as a
/// JSON-encoded string that must be parsed separately.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvalEvent {
    /// Raw JSON-encoded request body
    #[serde(default)]
    pub body: Option<String>,
}

/// Parsed shape of the evaluator request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvalRequest {
    /// The arithmetic expression to evaluate
    #[serde(default)]
    pub expression: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_serializes_with_wire_casing() {
        let response = FunctionResponse::ok("\"hi\"");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "statusCode": 200, "body": "\"hi\"" }));
    }

    #[test]
    fn headers_are_omitted_when_absent() {
        let response = FunctionResponse::bad_request("{}");
        let text = serde_json::to_string(&response).unwrap();
        assert!(!text.contains("headers"));

        let with = response.with_headers(HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]));
        let value = serde_json::to_value(&with).unwrap();
        assert_eq!(value["headers"]["Content-Type"], "application/json");
    }

    #[test]
    fn greet_event_tolerates_unknown_keys() {
        let event: GreetEvent =
            serde_json::from_value(json!({ "name": "Ada", "requestId": 7 })).unwrap();
        assert_eq!(event.name.as_deref(), Some("Ada"));

        let empty: GreetEvent = serde_json::from_value(json!({})).unwrap();
        assert!(empty.name.is_none());
    }

    #[test]
    fn eval_request_defaults_expression_to_empty() {
        let request: EvalRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.expression, "");
    }
}
