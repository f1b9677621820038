//! Greeter function handler.
//!
//! Builds a greeting from the optional `name` field of the event, falling
//! back to a default when the field is absent. There are no error paths:
//! a missing name substitutes the default rather than failing.

use std::time::{SystemTime, UNIX_EPOCH};

use lambda_runtime::{Error, LambdaEvent};

use crate::envelope::{FunctionResponse, GreetEvent};

/// Name substituted when the event does not carry one.
pub const DEFAULT_NAME: &str = "World";

/// Builds the greeting string for the given name.
pub fn greeting(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}

/// Lambda handler for the greeter function.
///
/// Logs the received event and the invocation metadata supplied by the
/// runtime (remaining time, function name, memory limit), then returns a
/// 200 response whose body is the JSON-encoded greeting.
pub async fn handle(event: LambdaEvent<GreetEvent>) -> Result<FunctionResponse, Error> {
    let (payload, context) = event.into_parts();

    tracing::info!(name = ?payload.name, "received event");
    tracing::info!(
        remaining_ms = remaining_time_ms(context.deadline),
        function_name = %context.env_config.function_name,
        memory_limit_mb = context.env_config.memory,
        "invocation context"
    );

    let message = greeting(payload.name.as_deref());
    tracing::info!(%message, "returning greeting");

    Ok(FunctionResponse::ok(serde_json::to_string(&message)?))
}

/// Milliseconds left before the invocation deadline.
fn remaining_time_ms(deadline_ms: u64) -> u64 {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    deadline_ms.saturating_sub(now_ms)
}
