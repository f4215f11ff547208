//! # Operator Table
//!
//! Defines the operators understood by the calculator and the lookup table used to resolve
//! a token to its [`Operator`].
//!
//! ## Operand Order
//!
//! Operands are handed to [`Operator::compute`] in popping order: `a` is the value that was
//! on top of the stack, `b` the one beneath it. Binary operators compute `b OP a`, so the
//! input `6 3 /` evaluates to `2`.
//!
//! ## Inverses
//!
//! Every arithmetic operator names the operator that reverses it. The undo mechanism uses
//! the inverse to build a replay expression (see [`crate::instruction`]). `clear` and `undo`
//! have no inverse and are never recorded.

use std::collections::HashMap;

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{CalculatorError, CalculatorResult};

/// Represents an operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum Operator {
    /// Addition (`+`)
    #[strum(serialize = "+")]
    Add,
    /// Subtraction (`-`)
    #[strum(serialize = "-")]
    Subtract,
    /// Multiplication (`*`)
    #[strum(serialize = "*")]
    Multiply,
    /// Division (`/`)
    #[strum(serialize = "/")]
    Divide,
    /// Square root (`sqrt`)
    #[strum(serialize = "sqrt")]
    Sqrt,
    /// Square (`square`)
    #[strum(serialize = "square")]
    Square,
    /// Empties the value stack and the history (`clear`)
    #[strum(serialize = "clear")]
    Clear,
    /// Reverses the last recorded token (`undo`)
    #[strum(serialize = "undo")]
    Undo,
}

lazy_static! {
    static ref OPERATORS: HashMap<&'static str, Operator> = Operator::iter()
        .map(|operator| (operator.symbol(), operator))
        .collect();
}

impl Operator {
    /// Resolves a token to its operator, or `None` when the token is not an operator symbol.
    pub fn lookup(symbol: &str) -> Option<Operator> {
        OPERATORS.get(symbol).copied()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Sqrt => "sqrt",
            Operator::Square => "square",
            Operator::Clear => "clear",
            Operator::Undo => "undo",
        }
    }

    /// Number of values the operator pops from the stack.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => 2,
            Operator::Sqrt | Operator::Square => 1,
            Operator::Clear | Operator::Undo => 0,
        }
    }

    pub fn inverse(&self) -> Option<Operator> {
        match self {
            Operator::Add => Some(Operator::Subtract),
            Operator::Subtract => Some(Operator::Add),
            Operator::Multiply => Some(Operator::Divide),
            Operator::Divide => Some(Operator::Multiply),
            Operator::Sqrt => Some(Operator::Square),
            Operator::Square => Some(Operator::Sqrt),
            Operator::Clear | Operator::Undo => None,
        }
    }

    /// Applies the operator to already popped operands.
    ///
    /// `a` is the first popped value and `b` the second one. Unary operators ignore `b`.
    /// A binary operator called without `b` is treated as missing its operand.
    pub fn compute(&self, a: f64, b: Option<f64>) -> CalculatorResult<f64> {
        match self {
            Operator::Add => Ok(self.second_operand(b)? + a),
            Operator::Subtract => Ok(self.second_operand(b)? - a),
            Operator::Multiply => Ok(self.second_operand(b)? * a),
            Operator::Divide => {
                let b = self.second_operand(b)?;
                if a == 0.0 {
                    return Err(CalculatorError::DivisionByZero);
                }
                Ok(b / a)
            }
            Operator::Sqrt => Ok(a.sqrt()),
            Operator::Square => Ok(a.powi(2)),
            Operator::Clear | Operator::Undo => {
                Err(CalculatorError::InvalidOperation { operator: *self })
            }
        }
    }

    // position is unknown at this level; the engine checks arity before computing
    fn second_operand(&self, b: Option<f64>) -> CalculatorResult<f64> {
        b.ok_or(CalculatorError::InsufficientOperands {
            operator: *self,
            position: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_lookup_known_symbols() {
        assert_eq!(Operator::lookup("+"), Some(Operator::Add));
        assert_eq!(Operator::lookup("-"), Some(Operator::Subtract));
        assert_eq!(Operator::lookup("*"), Some(Operator::Multiply));
        assert_eq!(Operator::lookup("/"), Some(Operator::Divide));
        assert_eq!(Operator::lookup("sqrt"), Some(Operator::Sqrt));
        assert_eq!(Operator::lookup("square"), Some(Operator::Square));
        assert_eq!(Operator::lookup("clear"), Some(Operator::Clear));
        assert_eq!(Operator::lookup("undo"), Some(Operator::Undo));
    }

    #[test]
    fn test_lookup_unknown_symbols() {
        assert_eq!(Operator::lookup("a"), None);
        assert_eq!(Operator::lookup("2+"), None);
        assert_eq!(Operator::lookup(""), None);
        assert_eq!(Operator::lookup("SQRT"), None);
    }

    #[test]
    fn test_symbol_matches_strum_serialization() {
        for operator in Operator::iter() {
            assert_eq!(operator.to_string(), operator.symbol());
            assert_eq!(operator.as_ref(), operator.symbol());
            assert_eq!(Operator::from_str(operator.symbol()), Ok(operator));
        }
    }

    #[test]
    fn test_inverse_is_symmetric() {
        for operator in Operator::iter() {
            match operator.inverse() {
                Some(inverse) => {
                    assert_eq!(inverse.inverse(), Some(operator));
                    assert_eq!(inverse.arity(), operator.arity());
                }
                None => assert_eq!(operator.arity(), 0),
            }
        }
    }

    #[test]
    fn test_binary_operand_order() {
        assert_eq!(Operator::Add.compute(2.0, Some(5.0)), Ok(7.0));
        assert_eq!(Operator::Subtract.compute(2.0, Some(5.0)), Ok(3.0));
        assert_eq!(Operator::Multiply.compute(2.0, Some(5.0)), Ok(10.0));
        assert_eq!(Operator::Divide.compute(2.0, Some(5.0)), Ok(2.5));
    }

    #[test]
    fn test_binary_operator_without_second_operand() {
        assert_eq!(
            Operator::Add.compute(1.0, None),
            Err(CalculatorError::InsufficientOperands {
                operator: Operator::Add,
                position: 0,
            })
        );
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(Operator::Sqrt.compute(9.0, None), Ok(3.0));
        assert_eq!(Operator::Square.compute(-3.0, None), Ok(9.0));
        assert!(Operator::Sqrt.compute(-1.0, None).unwrap().is_nan());
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Divide.compute(0.0, Some(1.0)),
            Err(CalculatorError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.compute(-0.0, Some(1.0)),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_special_operators_cannot_compute() {
        assert_eq!(
            Operator::Clear.compute(1.0, None),
            Err(CalculatorError::InvalidOperation {
                operator: Operator::Clear
            })
        );
        assert_eq!(
            Operator::Undo.compute(1.0, Some(2.0)),
            Err(CalculatorError::InvalidOperation {
                operator: Operator::Undo
            })
        );
    }
}
