//! # Greeting & Calculator Lambda Functions
//!
//! Two independent, stateless AWS Lambda handlers packaged as one crate
//! with two binary targets:
//!
//! - **`greet`**: reads an optional `name` field from the event, defaults
//!   to `"World"`, and returns a 200 response whose body is the
//!   JSON-encoded greeting string.
//! - **`evaluate`**: reads a JSON-encoded `body` string from the event,
//!   extracts an `expression` field, evaluates it with a sandboxed
//!   arithmetic engine, and returns `{"result": ...}` on success or a 400
//!   response with `{"error": ...}` on any failure.
//!
//! The functions share no state and are each a single pure mapping from
//! `(event, context)` to a response envelope.
//!
//! ## Security
//!
//! Expression input is never executed as code. The engine in [`eval`]
//! accepts only numeric literals, the operators `+ - * / % // **`, unary
//! `+`/`-`, and parentheses; anything else fails to tokenize. The tradeoff
//! is deliberate: a calculator endpoint exposed to untrusted callers must
//! bound what an expression can mean.
//!
//! ## Example
//!
//! ```
//! use calc_functions::eval::{evaluate, Number};
//!
//! assert_eq!(evaluate("2 + 2"), Ok(Number::Int(4)));
//! assert_eq!(evaluate("2 ** -1"), Ok(Number::Float(0.5)));
//! assert!(evaluate("1 / 0").is_err());
//! ```
//!
//! ## Error Handling
//!
//! Handler failures never surface as Lambda function errors: malformed
//! bodies, empty expressions, and every evaluation failure (syntax,
//! division by zero, overflow, non-finite result) are converted into
//! well-formed 400 responses. See [`error::EvalError`] for the taxonomy.

pub mod envelope;
pub mod error;
pub mod eval;
pub mod handlers;

pub use envelope::{EvalEvent, EvalRequest, FunctionResponse, GreetEvent};
pub use error::EvalError;
pub use eval::{evaluate, Number};
pub use handlers::{evaluate_handler, greet_handler};
