use crate::core::command::Command;
use crate::core::memory::Memory;
use crate::core::registry;
use crate::core::{Evaluator, MemoryChange};
use crate::utils::error::{CalcError, Result};
use std::sync::Arc;

/// Per-user calculator state: the memory register and the last result.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub memory: Memory,
    pub last_result: f64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What executing a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A numeric result; it has already become the session's last result.
    Value(f64),
    ShowMemory(f64),
    MemoryAdded { amount: f64, change: MemoryChange },
    MemorySubtracted { amount: f64, change: MemoryChange },
    MemoryCleared,
    ShowHelp,
    ShowConversions,
    ClearScreen,
    Exit,
    Nothing,
}

/// Routes commands to the conversion registry or the expression evaluator.
#[derive(Clone)]
pub struct Calculator {
    evaluator: Arc<dyn Evaluator>,
}

impl Calculator {
    pub fn new<E: Evaluator + 'static>(evaluator: E) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }

    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        if expression.trim().is_empty() {
            return Err(CalcError::missing_field("expression"));
        }
        self.evaluator.evaluate(expression)
    }

    pub fn convert(&self, name: &str, value: f64) -> Result<f64> {
        registry::convert(name, value)
    }

    /// Parse and run one line of input against `session`.
    pub fn execute_line(&self, session: &mut Session, input: &str) -> Result<Outcome> {
        let command = Command::parse(input)?;
        self.execute(session, command)
    }

    pub fn execute(&self, session: &mut Session, command: Command) -> Result<Outcome> {
        tracing::debug!(?command, "Executing command");

        let outcome = match command {
            Command::Exit => Outcome::Exit,
            Command::Empty => Outcome::Nothing,
            Command::Help => Outcome::ShowHelp,
            Command::Clear => Outcome::ClearScreen,
            Command::ListConversions => Outcome::ShowConversions,
            Command::ShowMemory => Outcome::ShowMemory(session.memory.recall()),
            Command::MemoryAdd => {
                let amount = session.last_result;
                Outcome::MemoryAdded {
                    amount,
                    change: session.memory.add(amount),
                }
            }
            Command::MemorySubtract => {
                let amount = session.last_result;
                Outcome::MemorySubtracted {
                    amount,
                    change: session.memory.subtract(amount),
                }
            }
            Command::MemoryClear => {
                session.memory.clear();
                Outcome::MemoryCleared
            }
            Command::MemoryRecall => Outcome::Value(session.memory.recall()),
            Command::Convert { name, value } => Outcome::Value(self.convert(&name, value)?),
            Command::Evaluate(expression) => Outcome::Value(self.evaluate(&expression)?),
        };

        if let Outcome::Value(value) = outcome {
            session.last_result = value;
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluator that only understands plain numbers.
    struct NumberEvaluator;

    impl Evaluator for NumberEvaluator {
        fn evaluate(&self, expression: &str) -> Result<f64> {
            expression
                .trim()
                .parse()
                .map_err(|_| CalcError::Evaluation {
                    expression: expression.to_string(),
                    message: "not a number".to_string(),
                })
        }
    }

    #[test]
    fn test_results_become_last_result() {
        let calculator = Calculator::new(NumberEvaluator);
        let mut session = Session::new();

        let outcome = calculator.execute_line(&mut session, "12").unwrap();
        assert_eq!(outcome, Outcome::Value(12.0));
        assert_eq!(session.last_result, 12.0);

        calculator
            .execute_line(&mut session, "conv:celsiusToFahrenheit 100")
            .unwrap();
        assert_eq!(session.last_result, 212.0);
    }

    #[test]
    fn test_memory_uses_last_result() {
        let calculator = Calculator::new(NumberEvaluator);
        let mut session = Session::new();

        calculator.execute_line(&mut session, "5").unwrap();
        calculator.execute_line(&mut session, "m+").unwrap();
        calculator.execute_line(&mut session, "m+").unwrap();
        calculator.execute_line(&mut session, "2").unwrap();
        let outcome = calculator.execute_line(&mut session, "m-").unwrap();

        assert_eq!(
            outcome,
            Outcome::MemorySubtracted {
                amount: 2.0,
                change: MemoryChange {
                    old_value: 10.0,
                    new_value: 8.0
                }
            }
        );

        let outcome = calculator.execute_line(&mut session, "mr").unwrap();
        assert_eq!(outcome, Outcome::Value(8.0));
        assert_eq!(session.last_result, 8.0);

        calculator.execute_line(&mut session, "mc").unwrap();
        assert_eq!(
            calculator.execute_line(&mut session, "mem").unwrap(),
            Outcome::ShowMemory(0.0)
        );
    }

    #[test]
    fn test_errors_leave_session_untouched() {
        let calculator = Calculator::new(NumberEvaluator);
        let mut session = Session::new();
        calculator.execute_line(&mut session, "3").unwrap();

        assert!(matches!(
            calculator.execute_line(&mut session, "conv:doesNotExist 5"),
            Err(CalcError::UnknownConversion { .. })
        ));
        assert!(matches!(
            calculator.execute_line(&mut session, "two"),
            Err(CalcError::Evaluation { .. })
        ));
        assert_eq!(session.last_result, 3.0);
    }

    #[test]
    fn test_sessions_are_independent() {
        let calculator = Calculator::new(NumberEvaluator);
        let mut first = Session::new();
        let mut second = Session::new();

        calculator.execute_line(&mut first, "4").unwrap();
        calculator.execute_line(&mut first, "m+").unwrap();

        assert_eq!(first.memory.recall(), 4.0);
        assert_eq!(second.memory.recall(), 0.0);
        calculator.execute_line(&mut second, "m+").unwrap();
        assert_eq!(second.memory.recall(), 0.0);
    }

    #[test]
    fn test_empty_expression_is_rejected() {
        let calculator = Calculator::new(NumberEvaluator);
        assert!(matches!(
            calculator.evaluate("  "),
            Err(CalcError::MissingField { .. })
        ));
    }
}
