use thiserror::Error;

use crate::operator::Operator;

/// Errors raised while evaluating a line of RPN input.
///
/// Every variant aborts only the current `calculate` call; the calculator stays usable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Input null!")]
    NullInput,

    #[error("Invalid operator!")]
    InvalidOperator { token: String },

    // historic wording, kept byte-for-byte
    #[error("operator {operator} (position: {position}): insucient parameters")]
    InsufficientOperands { operator: Operator, position: usize },

    #[error("Divisor cannot be 0.")]
    DivisionByZero,

    #[error("Invalid operation")]
    InvalidOperation { operator: Operator },
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;

impl CalculatorError {
    pub fn invalid_operator<S: Into<String>>(token: S) -> Self {
        CalculatorError::InvalidOperator {
            token: token.into(),
        }
    }
}
