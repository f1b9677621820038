//! Error types for the expression-evaluation engine.
//!
//! Every failure mode of tokenizing, parsing, or evaluating an expression
//! is represented here. The evaluator handler folds all of these into a
//! 400 response; none of them escape as a function error.

use thiserror::Error;

/// The error type for arithmetic expression evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The expression is not valid arithmetic syntax.
    #[error("{message} at position {position}")]
    Syntax {
        /// Description of what the tokenizer or parser rejected
        message: String,
        /// Byte offset into the source expression
        position: usize,
    },

    /// A division, modulo, or floor division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer arithmetic exceeded the 64-bit range.
    #[error("integer overflow")]
    IntegerOverflow,

    /// Evaluation produced a value with no JSON representation (inf/NaN).
    #[error("result is not a finite number")]
    NonFinite,
}

impl EvalError {
    /// Creates a new syntax error at the given byte offset.
    pub fn syntax(message: impl Into<String>, position: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            position,
        }
    }

    /// Returns true if this error was raised before evaluation started.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}
