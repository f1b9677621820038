//! Pratt parser for arithmetic expressions.
//!
//! Precedence-climbing over the token stream, producing a small [`Expr`]
//! tree that is folded into a [`Number`]. Exponentiation is right
//! associative and binds tighter than unary minus on its left, so
//! `-2**2` is `-(2**2)` while `2**-1` parses the unary on the right.

use crate::error::EvalError;
use crate::eval::tokenizer::{Spanned, Token};
use crate::eval::value::Number;

/// Operator precedence levels (higher binds tighter).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Additive operators (+, -)
    Additive = 1,
    /// Multiplicative operators (*, /, //, %)
    Multiplicative = 2,
    /// Unary operators (+, -)
    Unary = 3,
    /// Exponentiation (**)
    Power = 4,
}

/// Binary operators of the arithmetic grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// True division
    Div,
    /// Floor division
    FloorDiv,
    /// Modulo
    Mod,
    /// Exponentiation
    Pow,
}

impl BinaryOp {
    /// Maps a token to its binary operator, if it is one.
    fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::SlashSlash => Some(Self::FloorDiv),
            Token::Percent => Some(Self::Mod),
            Token::StarStar => Some(Self::Pow),
            _ => None,
        }
    }

    /// The precedence level this operator binds at.
    fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div | Self::FloorDiv | Self::Mod => Precedence::Multiplicative,
            Self::Pow => Precedence::Power,
        }
    }

    /// Whether the operator groups to the right.
    fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    fn apply(self, lhs: Number, rhs: Number) -> Result<Number, EvalError> {
        match self {
            Self::Add => lhs.add(rhs),
            Self::Sub => lhs.sub(rhs),
            Self::Mul => lhs.mul(rhs),
            Self::Div => lhs.div(rhs),
            Self::FloorDiv => lhs.floor_div(rhs),
            Self::Mod => lhs.rem(rhs),
            Self::Pow => lhs.pow(rhs),
        }
    }
}

/// Unary operators of the arithmetic grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation
    Neg,
    /// Identity (unary plus)
    Pos,
}

/// A parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal
    Literal(Number),
    /// A unary operation
    Unary {
        /// The operator
        op: UnaryOp,
        /// The operand expression
        operand: Box<Expr>,
    },
    /// A binary operation
    Binary {
        /// The operator
        op: BinaryOp,
        /// Left-hand operand
        lhs: Box<Expr>,
        /// Right-hand operand
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Folds the expression tree into a single value.
    pub fn eval(&self) -> Result<Number, EvalError> {
        match self {
            Expr::Literal(n) => Ok(*n),
            Expr::Unary { op, operand } => {
                let value = operand.eval()?;
                match op {
                    UnaryOp::Neg => value.neg(),
                    UnaryOp::Pos => Ok(value),
                }
            }
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval()?;
                let rhs = rhs.eval()?;
                op.apply(lhs, rhs)
            }
        }
    }
}

/// Pratt parser over a tokenized expression.
pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    source_len: usize,
}

impl Parser {
    /// Creates a parser over the given tokens.
    ///
    /// `source_len` is the byte length of the original expression, used to
    /// position end-of-input errors.
    pub fn new(tokens: Vec<Spanned>, source_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            source_len,
        }
    }

    /// Parses a complete expression, rejecting trailing tokens.
    pub fn parse(mut self) -> Result<Expr, EvalError> {
        let expr = self.parse_expression(Precedence::Additive as u8)?;
        if let Some(spanned) = self.peek() {
            return Err(EvalError::syntax(
                format!("unexpected token '{}'", spanned.token),
                spanned.offset,
            ));
        }
        Ok(expr)
    }

    fn parse_expression(&mut self, min_precedence: u8) -> Result<Expr, EvalError> {
        let mut lhs = self.parse_prefix()?;

        while let Some(spanned) = self.peek() {
            let Some(op) = BinaryOp::from_token(spanned.token) else {
                break;
            };
            let precedence = op.precedence() as u8;
            if precedence < min_precedence {
                break;
            }
            self.advance();

            let next_min = if op.is_right_associative() {
                precedence
            } else {
                precedence + 1
            };
            let rhs = self.parse_expression(next_min)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expr, EvalError> {
        let Some(spanned) = self.peek() else {
            return Err(EvalError::syntax(
                "unexpected end of expression",
                self.source_len,
            ));
        };
        self.advance();

        match spanned.token {
            Token::Number(n) => Ok(Expr::Literal(n)),
            Token::Minus => {
                let operand = self.parse_expression(Precedence::Unary as u8)?;
                Ok(Expr::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                })
            }
            Token::Plus => {
                let operand = self.parse_expression(Precedence::Unary as u8)?;
                Ok(Expr::Unary {
                    op: UnaryOp::Pos,
                    operand: Box::new(operand),
                })
            }
            Token::LeftParen => {
                let expr = self.parse_expression(Precedence::Additive as u8)?;
                match self.peek() {
                    Some(Spanned {
                        token: Token::RightParen,
                        ..
                    }) => {
                        self.advance();
                        Ok(expr)
                    }
                    Some(other) => Err(EvalError::syntax(
                        format!("expected ')', found '{}'", other.token),
                        other.offset,
                    )),
                    None => Err(EvalError::syntax("unclosed parenthesis", self.source_len)),
                }
            }
            token => Err(EvalError::syntax(
                format!("unexpected token '{token}'"),
                spanned.offset,
            )),
        }
    }

    fn peek(&self) -> Option<Spanned> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}
