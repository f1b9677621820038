//! Sandboxed arithmetic expression engine.
//!
//! This module replaces the general code-evaluation facility a naive
//! calculator might reach for with a dedicated grammar: numeric literals,
//! `+ - * / % // **`, unary `+`/`-`, and parentheses. Nothing else
//! tokenizes, so expression input can never name, import, or call anything
//! on the host.
//!
//! Evaluation is a three-stage pipeline: [`Tokenizer`] produces positioned
//! tokens, [`Parser`] builds an [`Expr`] tree, and the tree is folded into
//! a single [`Number`].
//!
//! ```
//! use calc_functions::eval::{evaluate, Number};
//!
//! assert_eq!(evaluate("2 + 3 * 4"), Ok(Number::Int(14)));
//! assert_eq!(evaluate("7 / 2"), Ok(Number::Float(3.5)));
//! ```

pub mod parser;
pub mod tokenizer;
pub mod value;

pub use parser::{BinaryOp, Expr, Parser, UnaryOp};
pub use tokenizer::{Spanned, Token, Tokenizer};
pub use value::Number;

use crate::error::EvalError;

/// Parses and evaluates an arithmetic expression.
///
/// Results that JSON cannot represent (infinite or NaN floats) are
/// rejected with [`EvalError::NonFinite`] rather than leaking into the
/// response encoding.
pub fn evaluate(expression: &str) -> Result<Number, EvalError> {
    let tokens = Tokenizer::new(expression).tokenize()?;
    let expr = Parser::new(tokens, expression.len()).parse()?;
    let result = expr.eval()?;
    if !result.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(result)
}
