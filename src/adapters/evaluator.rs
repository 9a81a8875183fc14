//! Expression evaluation backed by fasteval.
//!
//! fasteval supplies the grammar and the built-in functions (`sin`, `cos`,
//! `tan`, `abs`, `round`, ...). The namespace callback adds the names it
//! does not know: the constants `pi` and `e`, and `sqrt`, `cbrt`, `exp` and
//! `ln`.
//!
//! `log(x)` is the natural log and `log(x, base)` takes the base second.
//! fasteval's own `log` is base 10 with the base first, so calls to `log`
//! are renamed before parsing and resolved through the namespace.

use crate::core::Evaluator;
use crate::utils::error::{CalcError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const LOG_FN: &str = "lognat";

static LOG_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\blog\s*\(").expect("log call pattern is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct FastEvaluator;

impl FastEvaluator {
    pub fn new() -> Self {
        Self
    }
}

fn resolve(name: &str, args: &[f64]) -> Option<f64> {
    match (name, args) {
        ("pi", []) => Some(std::f64::consts::PI),
        ("e", []) => Some(std::f64::consts::E),
        ("sqrt", [x]) => Some(x.sqrt()),
        ("cbrt", [x]) => Some(x.cbrt()),
        ("exp", [x]) => Some(x.exp()),
        ("ln", [x]) | (LOG_FN, [x]) => Some(x.ln()),
        (LOG_FN, [x, base]) => Some(x.ln() / base.ln()),
        _ => None,
    }
}

/// Plain-text message for a fasteval failure.
fn describe(error: &fasteval::Error) -> String {
    use fasteval::Error;

    match error {
        Error::EOF | Error::EofWhileParsing(_) => {
            "Invalid expression: unexpected end of input".to_string()
        }
        Error::UnparsedTokensRemaining(rest) => {
            format!("Invalid expression: unexpected \"{}\"", rest.trim())
        }
        Error::InvalidValue | Error::ParseF64(_) => {
            "Invalid expression: expected a number".to_string()
        }
        Error::Expected(what) => format!("Invalid expression: expected {}", what),
        Error::WrongArgs(what) => format!("Invalid expression: wrong arguments for {}", what),
        Error::Undefined(name) => format!("Undefined symbol {}", name),
        Error::TooLong | Error::TooDeep => "Invalid expression: too long or too deeply nested".to_string(),
        _ => "Invalid expression".to_string(),
    }
}

impl Evaluator for FastEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64> {
        let expression = expression.trim();
        let rewritten = LOG_CALL.replace_all(expression, "lognat(");
        let mut unknown = BTreeMap::<String, usize>::new();

        let mut namespace = |name: &str, args: Vec<f64>| -> Option<f64> {
            let value = resolve(name, &args);
            if value.is_none() {
                unknown.insert(name.to_string(), args.len());
            }
            value
        };

        match fasteval::ez_eval(&rewritten, &mut namespace) {
            Ok(value) => {
                tracing::debug!(expression, value, "Evaluated expression");
                Ok(value)
            }
            Err(e) => {
                let message = match unknown.iter().next() {
                    Some((name, arity)) if name.as_str() == LOG_FN => {
                        format!("Invalid expression: log takes 1 or 2 arguments, got {}", arity)
                    }
                    Some((name, _)) => format!("Undefined symbol {}", name),
                    None => describe(&e),
                };
                tracing::debug!(expression, error = ?e, %message, "Expression evaluation failed");
                Err(CalcError::Evaluation {
                    expression: expression.to_string(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expression: &str) -> f64 {
        FastEvaluator::new().evaluate(expression).unwrap()
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(eval("1 + 2"), 3.0);
        assert_eq!(eval("2 ^ 10"), 1024.0);
        assert_eq!(eval("(2 + 3) * 4 - 6 / 3"), 18.0);
    }

    #[test]
    fn test_constants_and_functions() {
        assert!((eval("pi") - std::f64::consts::PI).abs() < 1e-12);
        assert!((eval("2 * e") - 2.0 * std::f64::consts::E).abs() < 1e-12);
        assert_eq!(eval("sqrt(16)"), 4.0);
        assert_eq!(eval("sin(0)"), 0.0);
        assert!((eval("cos(pi)") + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_is_natural_with_optional_base() {
        assert!((eval("ln(e)") - 1.0).abs() < 1e-12);
        assert!((eval("log(e)") - 1.0).abs() < 1e-12);
        assert!((eval("log(100)") - 100f64.ln()).abs() < 1e-12);
        assert!((eval("log(8, 2)") - 3.0).abs() < 1e-12);
        assert!((eval("log (1000, 10)") - 3.0).abs() < 1e-12);
        assert!((eval("2 * log(e) + ln(1)") - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_arity() {
        let err = FastEvaluator::new().evaluate("log(1, 2, 3)").unwrap_err();
        match err {
            CalcError::Evaluation { message, .. } => {
                assert_eq!(message, "Invalid expression: log takes 1 or 2 arguments, got 3")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_division_by_zero_is_a_value() {
        assert_eq!(eval("1 / 0"), f64::INFINITY);
    }

    #[test]
    fn test_invalid_expression() {
        for expression in ["2 +* 2", "2 +", "(1 + 2", "3 4"] {
            match FastEvaluator::new().evaluate(expression).unwrap_err() {
                CalcError::Evaluation { message, .. } => {
                    assert!(message.starts_with("Invalid expression"), "{expression}: {message}");
                    assert!(!message.contains("Tokens"), "{expression}: {message}");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_undefined_symbol() {
        let err = FastEvaluator::new().evaluate("foo(3) + 1").unwrap_err();
        match err {
            CalcError::Evaluation { message, .. } => assert_eq!(message, "Undefined symbol foo"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
