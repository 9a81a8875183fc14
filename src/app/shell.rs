use crate::core::calculator::{Calculator, Outcome, Session};
use crate::core::{Category, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::format::format_number;
use std::io::{BufRead, Write};

const BANNER: &str = "===== Advanced Calculator =====\n\
Type \"help\" for commands or \"exit\" to quit\n\
===============================";

const HELP: &str = "\n===== Available Commands =====\n\
Basic Operations: +, -, *, /, ^, %\n\
Functions: sin(x), cos(x), tan(x), sqrt(x), log(x), ln(x), exp(x), abs(x), round(x)\n\
Constants: pi, e\n\
Memory Operations:\n\
\x20 mem       - Display current memory value\n\
\x20 m+        - Add result to memory\n\
\x20 m-        - Subtract result from memory\n\
\x20 mr        - Recall memory value\n\
\x20 mc        - Clear memory\n\
Unit Conversions:\n\
\x20 conv      - List all available conversions\n\
\x20 conv:function value - Execute conversion (e.g. conv:celsiusToFahrenheit 100)\n\
Other Commands:\n\
\x20 clear     - Clear console\n\
\x20 help      - Show this help menu\n\
\x20 exit      - Quit calculator\n\
==============================\n";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Line-oriented calculator session over any reader/writer pair.
pub struct Shell<R: BufRead, W: Write> {
    calculator: Calculator,
    session: Session,
    precision: Option<usize>,
    show_banner: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new<C: ConfigProvider>(calculator: Calculator, config: &C, input: R, output: W) -> Self {
        Self {
            calculator,
            session: Session::new(),
            precision: config.precision(),
            show_banner: config.show_banner(),
            input,
            output,
        }
    }

    /// Read and execute lines until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            writeln!(self.output, "{}", BANNER)?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input");
                writeln!(self.output)?;
                writeln!(self.output, "Goodbye!")?;
                break;
            }

            if !self.handle_line(&line)? {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Execute one line. Returns `false` once the shell should stop.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let outcome = match self.calculator.execute_line(&mut self.session, line) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("Command failed: {}", e);
                writeln!(self.output, "Error: {}", e.user_friendly_message())?;
                return Ok(true);
            }
        };

        match outcome {
            Outcome::Value(value) => {
                writeln!(self.output, "Result: {}", format_number(value, self.precision))?;
            }
            Outcome::ShowMemory(value) => {
                writeln!(self.output, "Memory: {}", format_number(value, self.precision))?;
            }
            Outcome::MemoryAdded { amount, change } => writeln!(
                self.output,
                "Added {} to memory. Memory: {}",
                format_number(amount, self.precision),
                format_number(change.new_value, self.precision)
            )?,
            Outcome::MemorySubtracted { amount, change } => writeln!(
                self.output,
                "Subtracted {} from memory. Memory: {}",
                format_number(amount, self.precision),
                format_number(change.new_value, self.precision)
            )?,
            Outcome::MemoryCleared => writeln!(self.output, "Memory cleared")?,
            Outcome::ShowHelp => write!(self.output, "{}", HELP)?,
            Outcome::ShowConversions => self.write_conversions()?,
            Outcome::ClearScreen => {
                write!(self.output, "{}", CLEAR_SCREEN)?;
                writeln!(self.output, "{}", BANNER)?;
            }
            Outcome::Exit => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(false);
            }
            Outcome::Nothing => {}
        }

        Ok(true)
    }

    fn write_conversions(&mut self) -> Result<()> {
        writeln!(self.output, "\n===== Available Unit Conversions =====")?;
        for category in Category::ALL {
            writeln!(self.output, "\n{}:", category.title())?;
            for conversion in category.conversions() {
                writeln!(self.output, "  {}", conversion.name())?;
            }
        }
        writeln!(self.output, "\nUsage: conv:conversionName value")?;
        writeln!(self.output, "Example: conv:celsiusToFahrenheit 100")?;
        writeln!(self.output, "==============================")?;
        Ok(())
    }
}
