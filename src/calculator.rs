//! # Evaluation Engine
//!
//! [`Calculator`] owns the value stack and the history stack and evaluates lines of RPN
//! input against them.
//!
//! ## Evaluation
//!
//! Each token is parsed as a number first and pushed; anything else must be an
//! [`Operator`] symbol. A failing token stops the rest of the line, while tokens processed
//! before it keep their effect on both stacks.
//!
//! ## Undo by Replay
//!
//! Every number pushed and every operator applied leaves one [`HistoryEntry`]. `undo` pops
//! the most recent entry: a pushed number is simply popped off the value stack, an applied
//! operator is reversed by evaluating its [`Instruction::reverse_text`] through the same
//! routine with history recording turned off. No stack snapshots are kept.
//!
//! ```
//! use rpncalc::Calculator;
//!
//! let mut calculator = Calculator::new();
//! calculator.calculate("5 4 3 2").unwrap();
//! calculator.calculate("undo undo *").unwrap();
//! assert_eq!(calculator.stack(), &[20.0]);
//! ```

use strum_macros::Display;
use tracing::{debug, info};

use crate::{
    error::{CalculatorError, CalculatorResult},
    formatter::{round, DEFAULT_PRECISION},
    instruction::Instruction,
    operator::Operator,
    tokenizer::{tokenize, TokenSpan},
};

/// One entry of the history stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryEntry {
    /// A number was pushed; undone by popping it.
    Push,
    /// An operator was applied; undone by replaying the instruction's reverse text.
    Applied(Instruction),
}

/// Informational messages produced by a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Notice {
    #[strum(to_string = "Currently no operations to undo")]
    NothingToUndo,
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    stack: Vec<f64>,
    history: Vec<HistoryEntry>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one line of RPN input.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` fails with [`CalculatorError::NullInput`].
    /// Returns the notices raised along the way, e.g. an `undo` with nothing to undo.
    pub fn calculate<'a>(
        &mut self,
        input: impl Into<Option<&'a str>>,
    ) -> CalculatorResult<Vec<Notice>> {
        let input = input.into().ok_or(CalculatorError::NullInput)?;
        let mut notices = Vec::new();
        self.eval(input, true, &mut notices)?;
        Ok(notices)
    }

    /// Values on the stack, bottom first.
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    /// The stack value at `index` (0 = bottom) rounded to 10 decimal places.
    pub fn stack_item(&self, index: usize) -> Option<f64> {
        self.stack
            .get(index)
            .map(|value| round(*value, DEFAULT_PRECISION))
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty() && self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.history.clear();
    }

    #[tracing::instrument(level = "debug", skip(self, notices))]
    fn eval(
        &mut self,
        input: &str,
        record: bool,
        notices: &mut Vec<Notice>,
    ) -> CalculatorResult<()> {
        for token in tokenize(input) {
            self.process_token(&token, record, notices)?;
        }
        Ok(())
    }

    fn process_token(
        &mut self,
        token: &TokenSpan,
        record: bool,
        notices: &mut Vec<Notice>,
    ) -> CalculatorResult<()> {
        match token.text.parse::<f64>() {
            Ok(value) => {
                debug!("push {}", value);
                self.stack.push(value);
                if record {
                    self.history.push(HistoryEntry::Push);
                }
                Ok(())
            }
            Err(_) => self.process_operator(token, record, notices),
        }
    }

    fn process_operator(
        &mut self,
        token: &TokenSpan,
        record: bool,
        notices: &mut Vec<Notice>,
    ) -> CalculatorResult<()> {
        let operator = Operator::lookup(token.text)
            .ok_or_else(|| CalculatorError::invalid_operator(token.text))?;

        match operator {
            Operator::Clear => {
                debug!("clear");
                self.clear();
                Ok(())
            }
            Operator::Undo => self.undo(notices),
            _ => self.apply(operator, token, record),
        }
    }

    fn undo(&mut self, notices: &mut Vec<Notice>) -> CalculatorResult<()> {
        match self.history.pop() {
            None => {
                info!("{}", Notice::NothingToUndo);
                notices.push(Notice::NothingToUndo);
            }
            Some(HistoryEntry::Push) => {
                debug!("undo push");
                self.stack.pop();
            }
            Some(HistoryEntry::Applied(instruction)) => {
                let reverse = instruction.reverse_text()?;
                debug!("undo {} by replaying `{}`", instruction.operator(), reverse);
                self.eval(&reverse, false, notices)?;
            }
        }
        Ok(())
    }

    fn apply(
        &mut self,
        operator: Operator,
        token: &TokenSpan,
        record: bool,
    ) -> CalculatorResult<()> {
        let insufficient = CalculatorError::InsufficientOperands {
            operator,
            position: token.position(),
        };
        if operator.arity() > self.stack.len() {
            return Err(insufficient);
        }

        // operands stay popped when compute fails
        let a = self.stack.pop().ok_or(insufficient)?;
        let b = if operator.arity() > 1 {
            self.stack.pop()
        } else {
            None
        };
        let result = operator.compute(a, b)?;

        debug!("{} -> {}", operator, result);
        self.stack.push(result);
        if record {
            self.history
                .push(HistoryEntry::Applied(Instruction::new(operator, a)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_numbers_record_push_entries() {
        let mut calculator = Calculator::new();
        calculator.calculate("5 2").unwrap();
        assert_eq!(calculator.stack(), &[5.0, 2.0]);
        assert_eq!(
            calculator.history(),
            &[HistoryEntry::Push, HistoryEntry::Push]
        );
    }

    #[test]
    fn test_operator_records_instruction_with_first_operand() {
        let mut calculator = Calculator::new();
        calculator.calculate("7 12 2 /").unwrap();
        assert_eq!(calculator.stack(), &[7.0, 6.0]);
        assert_eq!(calculator.history_len(), 4);
        assert_eq!(
            calculator.history()[3],
            HistoryEntry::Applied(Instruction::new(Operator::Divide, 2.0))
        );
    }

    #[test]
    fn test_undo_replay_is_not_recorded() {
        let mut calculator = Calculator::new();
        calculator.calculate("20 5 *").unwrap();
        assert_eq!(calculator.history_len(), 3);

        calculator.calculate("undo").unwrap();
        assert_eq!(calculator.stack(), &[20.0, 5.0]);
        assert_eq!(
            calculator.history(),
            &[HistoryEntry::Push, HistoryEntry::Push]
        );
    }

    #[test]
    fn test_undo_unary_operator() {
        let mut calculator = Calculator::new();
        calculator.calculate("4 square").unwrap();
        assert_eq!(calculator.stack(), &[16.0]);
        calculator.calculate("undo").unwrap();
        assert_eq!(calculator.stack(), &[4.0]);
        assert_eq!(calculator.history(), &[HistoryEntry::Push]);
    }

    #[test]
    fn test_undo_with_empty_history_is_a_notice() {
        let mut calculator = Calculator::new();
        let notices = calculator.calculate("undo").unwrap();
        assert_eq!(notices, vec![Notice::NothingToUndo]);
        assert!(calculator.is_empty());
        assert_eq!(
            Notice::NothingToUndo.to_string(),
            "Currently no operations to undo"
        );
    }

    #[test]
    fn test_clear_continues_with_following_tokens() {
        let mut calculator = Calculator::new();
        calculator.calculate("1 2 3").unwrap();
        calculator.calculate("clear 9 sqrt").unwrap();
        assert_eq!(calculator.stack(), &[3.0]);
        assert_eq!(calculator.history_len(), 2);
    }

    #[test]
    fn test_failure_keeps_partial_effects() {
        let mut calculator = Calculator::new();
        let result = calculator.calculate("1 2 a 3");
        assert_eq!(result, Err(CalculatorError::invalid_operator("a")));
        assert_eq!(calculator.stack(), &[1.0, 2.0]);
        assert_eq!(calculator.history_len(), 2);
    }

    #[test]
    fn test_division_by_zero_drops_operands() {
        let mut calculator = Calculator::new();
        let result = calculator.calculate("1 0 /");
        assert_eq!(result, Err(CalculatorError::DivisionByZero));
        assert!(calculator.stack().is_empty());
        assert_eq!(calculator.history_len(), 2);
    }

    #[test]
    fn test_undo_push_on_emptied_stack_is_harmless() {
        let mut calculator = Calculator::new();
        let _ = calculator.calculate("1 0 /");
        calculator.calculate("undo undo").unwrap();
        assert!(calculator.is_empty());
    }

    #[test]
    fn test_insufficient_operands_position() {
        let mut calculator = Calculator::new();
        let result = calculator.calculate("3 sqrt +");
        assert_eq!(
            result,
            Err(CalculatorError::InsufficientOperands {
                operator: Operator::Add,
                position: 5,
            })
        );
        assert_eq!(calculator.stack_item(0), Some(1.7320508076));
    }

    #[test]
    fn test_stack_item_out_of_range() {
        let calculator = Calculator::new();
        assert_eq!(calculator.stack_item(0), None);
    }

    #[test]
    fn test_calculator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calculator>();
    }
}
