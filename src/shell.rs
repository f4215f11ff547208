//! # Interactive Shell
//!
//! The read-eval-print adapter around [`Calculator`]. It is generic over its input and
//! output so the binary can drive it from a terminal and tests from in-memory buffers.
//!
//! After every evaluated line the shell prints the notices, the error message if the line
//! failed, and the whole value stack. A failed line never ends the session.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::{calculator::Calculator, config::ShellConfig, formatter::format_stack};

pub struct Shell<'c> {
    calculator: Calculator,
    config: &'c ShellConfig,
}

impl<'c> Shell<'c> {
    pub fn new(config: &'c ShellConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            config,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Evaluates `line` and writes the outcome followed by the stack line.
    pub fn evaluate_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<()> {
        match self.calculator.calculate(line) {
            Ok(notices) => {
                for notice in notices {
                    writeln!(output, "{}", notice)?;
                }
            }
            Err(e) => {
                warn!("failed to evaluate `{}`: {}", line, e);
                writeln!(output, "{}", e)?;
            }
        }
        writeln!(
            output,
            "{}{}",
            self.config.stack_label,
            format_stack(self.calculator.stack(), self.config.precision)
        )
    }

    /// Runs the prompt loop until end of input or the exit command.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", self.config.banner)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                return Ok(());
            }

            let trimmed = line.trim_end_matches(['\r', '\n']);
            if trimmed == self.config.exit_command {
                debug!("exit requested");
                return Ok(());
            }
            self.evaluate_line(trimmed, output)?;
        }
    }
}
