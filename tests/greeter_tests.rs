//! Integration tests for the greeter function.

mod common;

use calc_functions::handlers::greet;
use common::*;
use proptest::prelude::*;
use serde_json::json;

// =============================================================================
// Handler Tests
// =============================================================================

#[tokio::test]
async fn greets_the_supplied_name() {
    let response = greet::handle(greet_event(Some("Ada"))).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "\"Hello, Ada!\"");
}

#[tokio::test]
async fn defaults_to_world_when_name_is_absent() {
    let response = greet::handle(greet_event(None)).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "\"Hello, World!\"");
}

#[tokio::test]
async fn response_carries_no_headers() {
    let response = greet::handle(greet_event(Some("Ada"))).await.unwrap();
    assert!(response.headers.is_none());
}

#[tokio::test]
async fn body_is_json_encoded_text() {
    // Names with quotes and non-ASCII text must survive the JSON encoding.
    let response = greet::handle(greet_event(Some("\"Grace\" Hopper")))
        .await
        .unwrap();

    assert_eq!(parse_body(&response.body), json!("Hello, \"Grace\" Hopper!"));
}

#[tokio::test]
async fn unknown_event_keys_are_ignored() {
    let event: calc_functions::GreetEvent =
        serde_json::from_value(json!({ "name": "Ada", "source": "test", "retries": 3 })).unwrap();
    let response = greet::handle(lambda_event(event)).await.unwrap();

    assert_eq!(response.body, "\"Hello, Ada!\"");
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn greeting_embeds_any_name(name in "\\PC*") {
        prop_assert_eq!(
            greet::greeting(Some(&name)),
            format!("Hello, {name}!")
        );
    }

    #[test]
    fn greeting_body_round_trips_through_json(name in "[a-zA-Z0-9 ]{0,32}") {
        let encoded = serde_json::to_string(&greet::greeting(Some(&name))).unwrap();
        let decoded: String = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, format!("Hello, {name}!"));
    }
}
