//! Numeric value model for the expression engine.
//!
//! Values are either 64-bit integers or double-precision floats, with the
//! promotion rules callers of the original calculator expect: integer
//! operations stay integral (true division excepted, which always yields a
//! float), and any operation touching a float yields a float. Modulo and
//! floor division follow the sign-of-divisor convention.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::EvalError;

/// A numeric value produced by expression evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer
    Int(i64),
    /// Double-precision float
    Float(f64),
}

impl Number {
    /// Returns the value widened to a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns true if the value is zero (of either representation).
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// Returns true if the value can be represented in JSON.
    ///
    /// Integers always can; floats only when finite.
    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    /// Adds two values, erroring on 64-bit overflow.
    pub fn add(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .ok_or(EvalError::IntegerOverflow),
            _ => Ok(Number::Float(self.as_f64() + rhs.as_f64())),
        }
    }

    /// Subtracts two values, erroring on 64-bit overflow.
    pub fn sub(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map(Number::Int)
                .ok_or(EvalError::IntegerOverflow),
            _ => Ok(Number::Float(self.as_f64() - rhs.as_f64())),
        }
    }

    /// Multiplies two values, erroring on 64-bit overflow.
    pub fn mul(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map(Number::Int)
                .ok_or(EvalError::IntegerOverflow),
            _ => Ok(Number::Float(self.as_f64() * rhs.as_f64())),
        }
    }

    /// True division. Always yields a float; a zero divisor is an error.
    pub fn div(self, rhs: Number) -> Result<Number, EvalError> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        Ok(Number::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Floor division. Integer operands stay integral.
    pub fn floor_div(self, rhs: Number) -> Result<Number, EvalError> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                let q = a.checked_div(b).ok_or(EvalError::IntegerOverflow)?;
                // Truncating division rounds toward zero; adjust toward
                // negative infinity when signs differ and there is a
                // remainder.
                let r = a % b;
                if r != 0 && (r < 0) != (b < 0) {
                    Ok(Number::Int(q - 1))
                } else {
                    Ok(Number::Int(q))
                }
            }
            _ => Ok(Number::Float((self.as_f64() / rhs.as_f64()).floor())),
        }
    }

    /// Modulo with the result taking the sign of the divisor.
    pub fn rem(self, rhs: Number) -> Result<Number, EvalError> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                if b == -1 {
                    // i64::MIN % -1 overflows the hardware remainder; the
                    // mathematical result is always zero.
                    return Ok(Number::Int(0));
                }
                let r = a % b;
                if r != 0 && (r < 0) != (b < 0) {
                    Ok(Number::Int(r + b))
                } else {
                    Ok(Number::Int(r))
                }
            }
            _ => {
                let (a, b) = (self.as_f64(), rhs.as_f64());
                let r = a % b;
                if r != 0.0 && (r < 0.0) != (b < 0.0) {
                    Ok(Number::Float(r + b))
                } else {
                    Ok(Number::Float(r))
                }
            }
        }
    }

    /// Exponentiation. Integer bases with non-negative integer exponents
    /// stay integral; negative exponents promote to float.
    pub fn pow(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) if b >= 0 => match u32::try_from(b) {
                Ok(exp) => a
                    .checked_pow(exp)
                    .map(Number::Int)
                    .ok_or(EvalError::IntegerOverflow),
                // Exponents beyond u32 range only stay representable for
                // bases -1, 0, and 1.
                Err(_) => match a {
                    0 | 1 => Ok(Number::Int(a)),
                    -1 => Ok(Number::Int(if b % 2 == 0 { 1 } else { -1 })),
                    _ => Err(EvalError::IntegerOverflow),
                },
            },
            (Number::Int(0), Number::Int(_)) => Err(EvalError::DivisionByZero),
            _ => Ok(Number::Float(self.as_f64().powf(rhs.as_f64()))),
        }
    }

    /// Arithmetic negation.
    pub fn neg(self) -> Result<Number, EvalError> {
        match self {
            Number::Int(i) => i
                .checked_neg()
                .map(Number::Int)
                .ok_or(EvalError::IntegerOverflow),
            Number::Float(f) => Ok(Number::Float(-f)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Int(i) => serializer.serialize_i64(i),
            Number::Float(f) => serializer.serialize_f64(f),
        }
    }
}
