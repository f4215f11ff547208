//! # Instructions
//!
//! An [`Instruction`] records one applied operator together with the operand it consumed
//! first. It can render the RPN text that, evaluated against the current stack, reverses the
//! operation.
//!
//! For a binary operator with captured operand `x` and inverse `INV` the reverse text is
//! `x INV x`: push `x`, apply `INV` to the result and `x` (recovering the operand that was
//! underneath), then push `x` back. Unary operators reverse with their inverse symbol alone.

use crate::{
    error::{CalculatorError, CalculatorResult},
    operator::Operator,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
    operator: Operator,
    operand: f64,
}

impl Instruction {
    pub fn new(operator: Operator, operand: f64) -> Self {
        Self { operator, operand }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> f64 {
        self.operand
    }

    /// Builds the RPN text that undoes this instruction.
    ///
    /// Operands are written with the shortest representation that parses back to the same
    /// `f64`, so replaying never loses precision.
    pub fn reverse_text(&self) -> CalculatorResult<String> {
        let inverse = self
            .operator
            .inverse()
            .ok_or(CalculatorError::InvalidOperation {
                operator: self.operator,
            })?;
        match self.operator.arity() {
            1 => Ok(inverse.symbol().to_string()),
            2 => Ok(format!("{} {} {}", self.operand, inverse, self.operand)),
            _ => Err(CalculatorError::InvalidOperation {
                operator: self.operator,
            }),
        }
    }
}
