//! Request handlers for the Lambda functions.
//!
//! One module per deployed function: the greeter and the
//! arithmetic-expression evaluator. Each exposes an async `handle`
//! function suitable for `lambda_runtime::service_fn`, plus the pure
//! pieces the handler is built from.

pub mod evaluate;
pub mod greet;

pub use evaluate::handle as evaluate_handler;
pub use greet::handle as greet_handler;
