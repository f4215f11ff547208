//! # rpncalc: an RPN calculator with undo
//!
//! `rpncalc` evaluates whitespace-separated Reverse Polish Notation input against a value
//! stack and can reverse previously applied tokens one at a time.
//!
//! ## Evaluation Pipeline
//!
//! ```text
//! Input line → Tokenizer → Calculator → Operator Table
//!                              ↓
//!                      History (Instructions) → Undo replay
//! ```
//!
//! - Tokenization ([`tokenizer`])
//! - Operators, their arity and inverses ([`operator`])
//! - Reversible records of applied operators ([`instruction`])
//! - The evaluation engine and its two stacks ([`calculator`])
//! - Error handling ([`error`])
//!
//! The interactive front end lives in [`shell`], configured through [`config`] and rendering
//! numbers with [`formatter`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod formatter;
pub mod instruction;
pub mod operator;
pub mod shell;
pub mod tokenizer;

// Re-exports
pub use calculator::*;
pub use error::*;
pub use instruction::Instruction;
pub use operator::Operator;
